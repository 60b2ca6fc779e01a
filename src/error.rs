//! Error types and helpers for user-friendly error messages
//!
//! Domain failures are `EugeneError` variants carried inside `anyhow::Error`.
//! `main` downcasts them to decide between aborting, exiting with a specific
//! code, or printing the error with a hint.

use console::style;
use thiserror::Error;

use crate::utils::terminal::print_error;

/// Exit code used when every toolchain candidate fails to configure
pub const EXIT_CONFIGURATION_FAILED: i32 = -1;

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum EugeneError {
    /// More than one token followed the command name
    #[error("expected at most one sub-argument, got {count}")]
    TooManyArguments { count: usize },

    /// A command that takes no sub-argument was given one
    #[error("'{command}' does not take a sub-argument (got '{argument}')")]
    UnexpectedArgument { command: String, argument: String },

    /// A checked external step exited unsuccessfully
    #[error("'{command}' failed with exit code {code:?}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Every toolchain candidate failed during configuration
    #[error("Configuration failed with all {attempts} toolchain candidates")]
    ConfigurationFailed { attempts: usize },

    /// Feature that is recognized but not implemented yet
    #[error("{feature} is not yet supported")]
    Unsupported { feature: String },

    /// User declined installing a missing tool
    #[error("'{tool}' is required but was not installed")]
    SetupDeclined { tool: String },

    /// Eugene.toml could not be used
    #[error("Configuration error: {message}")]
    InvalidConfig { message: String },
}

impl EugeneError {
    /// Create an unsupported-feature error
    pub fn unsupported(feature: impl Into<String>) -> Self {
        Self::Unsupported {
            feature: feature.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Whether the error breaks a dispatch precondition
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            Self::TooManyArguments { .. } | Self::UnexpectedArgument { .. }
        )
    }

    /// Hint shown below the error, if any
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::TooManyArguments { .. } | Self::UnexpectedArgument { .. } => {
                Some(hints::usage())
            }
            Self::ConfigurationFailed { .. } => Some(hints::configuration()),
            Self::InvalidConfig { .. } => Some(hints::eugene_toml()),
            Self::CommandFailed { .. } | Self::Unsupported { .. } | Self::SetupDeclined { .. } => {
                None
            }
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);
        if let Some(hint) = self.hint() {
            eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);
        }
    }
}

/// Report an error from the CLI and return the process exit code.
///
/// Precondition violations never return: the process aborts.
pub fn report(err: &anyhow::Error) -> i32 {
    let Some(eugene_err) = err.downcast_ref::<EugeneError>() else {
        print_error(&format!("{:#}", err));
        return 1;
    };

    match eugene_err {
        e if e.is_precondition_violation() => {
            e.display_with_hints();
            std::process::abort();
        }
        EugeneError::SetupDeclined { .. } => 0,
        EugeneError::ConfigurationFailed { .. } => {
            eugene_err.display_with_hints();
            EXIT_CONFIGURATION_FAILED
        }
        _ => {
            eugene_err.display_with_hints();
            1
        }
    }
}

/// Hints for common failures
pub mod hints {
    /// Get hint for malformed invocations
    pub fn usage() -> &'static str {
        "Usage: eugene <command> [<subflag>]\n\
         Run `eugene` without arguments to list commands and their sub-flags."
    }

    /// Get hint for configuration failures
    pub fn configuration() -> &'static str {
        "Both conan and cmake must succeed for at least one toolchain. Check:\n\
         • conan and cmake are installed and on PATH\n\
         • the compilers listed under [[toolchains]] in Eugene.toml exist\n\
         • conanfile and CMakeLists.txt are present in the project root"
    }

    /// Get hint for invalid Eugene.toml
    pub fn eugene_toml() -> &'static str {
        "Eugene.toml is invalid. Common issues:\n\
         • Invalid TOML syntax (check quotes, brackets, commas)\n\
         • Empty [[toolchains]] list\n\
         • build.jobs set to 0"
    }
}
