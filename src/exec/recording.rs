//! In-memory runner for tests

use std::time::Duration;

use anyhow::{anyhow, Result};

use super::subprocess::{CommandLine, CommandResult, Output, Runner};

/// Records every command and environment change instead of running them
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub commands: Vec<String>,
    pub env: Vec<(String, String)>,
    failing: Vec<String>,
    failing_when: Vec<(String, String, String)>,
    missing: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `program` exit with code 1
    pub fn failing(mut self, program: &str) -> Self {
        self.failing.push(program.to_string());
        self
    }

    /// Make `program` exit with code 1 while `key` is set to `value`
    pub fn failing_when(mut self, program: &str, key: &str, value: &str) -> Self {
        self.failing_when
            .push((program.to_string(), key.to_string(), value.to_string()));
        self
    }

    /// Make `program` fail to spawn and be absent from PATH
    pub fn missing(mut self, program: &str) -> Self {
        self.missing.push(program.to_string());
        self
    }

    /// Last value set for `key`
    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Recorded commands whose program is `program`
    pub fn runs_of(&self, program: &str) -> usize {
        self.commands
            .iter()
            .filter(|c| c.split_whitespace().next() == Some(program))
            .count()
    }
}

impl Runner for RecordingRunner {
    fn run(&mut self, command: &CommandLine, _output: Output) -> Result<CommandResult> {
        self.commands.push(command.to_string());
        if self.missing.contains(&command.program) {
            return Err(anyhow!("Failed to execute {}", command.program));
        }
        let conditional_failure = self.failing_when.iter().any(|(program, key, value)| {
            *program == command.program && self.env_var(key) == Some(value.as_str())
        });
        let success = !self.failing.contains(&command.program) && !conditional_failure;
        Ok(CommandResult {
            success,
            exit_code: Some(if success { 0 } else { 1 }),
            duration: Duration::ZERO,
        })
    }

    fn set_env(&mut self, key: &str, value: &str) {
        self.env.push((key.to_string(), value.to_string()));
    }

    fn has_program(&self, program: &str) -> bool {
        !self.missing.iter().any(|m| m == program)
    }
}
