//! Tool detection with an offer to install what is missing

use anyhow::Result;

use crate::dispatch::Session;
use crate::error::EugeneError;
use crate::exec::{self, CommandLine, Output};
use crate::prompt;
use crate::utils::terminal::print_warning;

/// Packages installed through pip when the user accepts setup
pub const SETUP_REQUIREMENTS: &[&str] = &["cmake-format"];

const DEFAULT_PIP: &str = "pip";

/// Make sure `tool` is on PATH, offering to install the setup requirements
/// when it is not.
///
/// Declining yields [`EugeneError::SetupDeclined`], which ends the process
/// with exit code 0.
pub fn ensure_tool(session: &mut Session, tool: &str) -> Result<()> {
    if session.runner.has_program(tool) {
        return Ok(());
    }

    print_warning(&format!("'{}' not found in PATH", tool));
    let answer = session.prompter.ask("Install missing modules? Y/n ")?;
    if !prompt::is_yes(&answer) {
        return Err(EugeneError::SetupDeclined {
            tool: tool.to_string(),
        }
        .into());
    }

    let pip = session
        .prompter
        .ask("How is `pip` spelled - pip2, pip3, etc.? [default: `pip`] ")?;
    let pip = match pip.trim() {
        "" => DEFAULT_PIP,
        spelled => spelled,
    };
    println!("Entered '{}'", pip);

    // pip may be spelled with arguments, e.g. "python3 -m pip"
    for requirement in SETUP_REQUIREMENTS {
        let Some(command) = CommandLine::parse(&format!("{} install {}", pip, requirement)) else {
            continue;
        };
        println!("{}", command);
        exec::run_unchecked(&mut *session.runner, &command, Output::Inherit);
    }
    Ok(())
}
