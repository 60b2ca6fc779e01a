//! Command implementations
//!
//! The sub-argument is interpreted once, here, by substring containment.
//! Each command module provides an `execute` function taking the parsed
//! options.

pub mod build;
pub mod clean;
pub mod config;
pub mod doc;
pub mod lint;
pub mod version;

use crate::error::EugeneError;

pub use build::BuildOptions;
pub use clean::CleanOptions;
pub use doc::DocOptions;
pub use test::TestOptions;

/// A recognized command with its typed options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Build(BuildOptions),
    Config,
    Test(TestOptions),
    Clean(CleanOptions),
    Lint,
    Doc(DocOptions),
    Version,
}

impl Command {
    /// Parse a lower-cased command name and its sub-arguments.
    ///
    /// Returns `Ok(None)` for an unknown name. More than one sub-argument,
    /// or any sub-argument for `config` and `lint`, is a precondition
    /// violation.
    pub fn parse(name: &str, sub_args: &[String]) -> Result<Option<Self>, EugeneError> {
        if sub_args.len() > 1 {
            return Err(EugeneError::TooManyArguments {
                count: sub_args.len(),
            });
        }
        let sub_arg = sub_args.first().map(String::as_str);
        let has = |flag: &str| sub_arg.is_some_and(|arg| arg.contains(flag));

        let command = match name {
            "build" => Self::Build(BuildOptions {
                tests: has("test"),
                docs: has("doc"),
            }),
            "config" => {
                reject_argument(name, sub_arg)?;
                Self::Config
            }
            "test" => Self::Test(TestOptions { run: has("run") }),
            "clean" | "mrproper" => Self::Clean(CleanOptions {
                forced: has("force") || sub_arg.is_none(),
                kind: has("kind"),
            }),
            "lint" => {
                reject_argument(name, sub_arg)?;
                Self::Lint
            }
            "doc" => Self::Doc(DocOptions { upload: has("up") }),
            "version" => Self::Version,
            _ => return Ok(None),
        };
        Ok(Some(command))
    }

    /// Whether the command reads build settings from `Eugene.toml`
    pub fn needs_config(&self) -> bool {
        !matches!(self, Self::Version)
    }
}

fn reject_argument(command: &str, sub_arg: Option<&str>) -> Result<(), EugeneError> {
    match sub_arg {
        Some(argument) => Err(EugeneError::UnexpectedArgument {
            command: command.to_string(),
            argument: argument.to_string(),
        }),
        None => Ok(()),
    }
}
