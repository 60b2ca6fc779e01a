//! Suggestions for mistyped command names

use anyhow::Result;

use crate::prompt::{self, Prompter};
use crate::registry::{CommandSpec, COMMANDS};
use crate::utils::terminal::Palette;

/// Allows a single suggestion attempt per invocation
#[derive(Debug)]
pub struct RetryGate {
    open: bool,
}

impl Default for RetryGate {
    fn default() -> Self {
        Self { open: true }
    }
}

impl RetryGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the gate, returning whether it was still open
    pub fn take(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

/// Whether `candidate` is close enough to `token` to be offered:
/// Levenshtein distance of at most half the token's length, inclusive.
pub fn is_close(token: &str, candidate: &str) -> bool {
    let distance = strsim::levenshtein(token, candidate);
    2 * distance <= token.chars().count()
}

/// First registry command close enough to `token`, in registry order
pub fn candidate(token: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| is_close(token, spec.name))
}

/// Offer the first close command and return it if the user accepts.
///
/// Closes `gate`; once closed, no further suggestion is made.
pub fn suggest(
    token: &str,
    gate: &mut RetryGate,
    prompter: &mut dyn Prompter,
    palette: &mut Palette,
) -> Result<Option<&'static str>> {
    if !gate.take() {
        return Ok(None);
    }

    let Some(spec) = candidate(token) else {
        println!();
        return Ok(None);
    };

    let question = palette
        .next_style()
        .apply_to(format!(" > Proceed with '{}'? Y/n: ", spec.name));
    let answer = prompter.ask(&format!("\n{}", question))?;
    println!();

    if prompt::is_yes(&answer) {
        Ok(Some(spec.name))
    } else {
        Ok(None)
    }
}
