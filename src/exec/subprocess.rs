//! Subprocess execution

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

/// A program and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Start a command line for `program` with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Split a command line on whitespace.
    ///
    /// There is no quoting: an argument containing spaces cannot be
    /// expressed this way, use [`CommandLine::arg`] instead. Returns `None`
    /// for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
        })
    }

    /// Append an argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of a subprocess execution
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code, `None` when killed by a signal
    pub exit_code: Option<i32>,

    /// Execution duration
    pub duration: Duration,
}

impl CommandResult {
    /// Create a CommandResult from an exit status
    pub fn from_status(status: ExitStatus, duration: Duration) -> Self {
        Self {
            success: status.success(),
            exit_code: status.code(),
            duration,
        }
    }
}

/// Where a child's standard output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Output {
    /// Share the terminal with the child
    #[default]
    Inherit,
    /// Discard standard output
    Discard,
}

/// Run a command in `cwd`, waiting for it to exit
pub fn run_command(command: &CommandLine, cwd: &Path, output: Output) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(&command.program);
    cmd.args(&command.args).current_dir(cwd);

    cmd.stdin(Stdio::inherit());
    cmd.stderr(Stdio::inherit());
    match output {
        Output::Inherit => cmd.stdout(Stdio::inherit()),
        Output::Discard => cmd.stdout(Stdio::null()),
    };

    let status = cmd
        .status()
        .with_context(|| format!("Failed to execute {}", command.program))?;

    Ok(CommandResult::from_status(status, start.elapsed()))
}

/// Check if a command exists in PATH
pub fn command_exists(program: &str) -> bool {
    which::which(program).is_ok()
}

/// Runs external commands and owns the environment they inherit
pub trait Runner {
    /// Run a command to completion
    fn run(&mut self, command: &CommandLine, output: Output) -> Result<CommandResult>;

    /// Set an environment variable for this and all later commands
    fn set_env(&mut self, key: &str, value: &str);

    /// Whether `program` can be found
    fn has_program(&self, program: &str) -> bool;
}

/// Runner spawning real processes in the project directory
#[derive(Debug)]
pub struct SystemRunner {
    cwd: PathBuf,
    verbose: bool,
}

impl SystemRunner {
    pub fn new(cwd: PathBuf, verbose: bool) -> Self {
        Self { cwd, verbose }
    }
}

impl Runner for SystemRunner {
    fn run(&mut self, command: &CommandLine, output: Output) -> Result<CommandResult> {
        if self.verbose {
            eprintln!("Running: {}", command);
        }

        let result = run_command(command, &self.cwd, output);

        if self.verbose {
            match &result {
                Ok(r) => eprintln!(
                    "Finished: {} (exit code {:?}, {:.2?})",
                    command.program, r.exit_code, r.duration
                ),
                Err(e) => eprintln!("Failed: {:#}", e),
            }
        }
        result
    }

    fn set_env(&mut self, key: &str, value: &str) {
        if self.verbose {
            eprintln!("Setting {}={}", key, value);
        }
        std::env::set_var(key, value);
    }

    fn has_program(&self, program: &str) -> bool {
        command_exists(program)
    }
}
