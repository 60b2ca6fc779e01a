//! External process execution
//!
//! Three policies sit on top of a [`Runner`]:
//!
//! - [`run_checked`]: a non-zero exit or a spawn failure is an error
//! - [`run_unchecked`]: the outcome is ignored
//! - [`run_optional`]: optionally asks first, outcome ignored

pub mod subprocess;

#[cfg(test)]
pub mod recording;

use anyhow::Result;

use crate::error::EugeneError;
use crate::prompt::{self, Prompter};

pub use subprocess::{CommandLine, Output, Runner, SystemRunner};

/// Run a command whose failure must stop the caller
pub fn run_checked(runner: &mut dyn Runner, command: &CommandLine) -> Result<()> {
    let result = runner.run(command, Output::Inherit)?;
    if !result.success {
        return Err(EugeneError::CommandFailed {
            command: command.to_string(),
            code: result.exit_code,
        }
        .into());
    }
    Ok(())
}

/// Run a command without looking at how it went
pub fn run_unchecked(runner: &mut dyn Runner, command: &CommandLine, output: Output) {
    let _ = runner.run(command, output);
}

/// Run a command, first asking `"<message> Ok? "` when `ask_first` is set.
///
/// The command is skipped when the answer is neither empty nor "y".
/// Returns whether the command was run.
pub fn run_optional(
    runner: &mut dyn Runner,
    prompter: &mut dyn Prompter,
    command: &CommandLine,
    message: &str,
    ask_first: bool,
) -> Result<bool> {
    if ask_first {
        let answer = prompter.ask(&format!("{} Ok? ", message))?;
        if !prompt::is_yes_or_default(&answer) {
            return Ok(false);
        }
    }
    run_unchecked(runner, command, Output::Inherit);
    Ok(true)
}
