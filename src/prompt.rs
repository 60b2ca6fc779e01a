//! Interactive prompts on the controlling terminal

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

/// Source of answers to interactive questions
pub trait Prompter {
    /// Show `message` and return the raw answer line without its newline.
    /// End of input yields an empty answer.
    fn ask(&mut self, message: &str) -> Result<String>;
}

/// Prompter reading answers from standard input
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, message: &str) -> Result<String> {
        print!("{}", message);
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut input = String::new();
        io::stdin()
            .lock()
            .read_line(&mut input)
            .context("Failed to read answer from stdin")?;
        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Strict confirmation: only "y" (any case) accepts
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Lenient confirmation: an empty answer or "y" (any case) accepts
pub fn is_yes_or_default(answer: &str) -> bool {
    let answer = answer.trim();
    answer.is_empty() || answer.eq_ignore_ascii_case("y")
}
