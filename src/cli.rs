//! CLI argument parsing using clap derive macros

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::EugeneConfig;
use crate::dispatch::{self, Invocation, Session};
use crate::exec::SystemRunner;
use crate::fuzzy::RetryGate;
use crate::prompt::StdinPrompter;
use crate::usage;
use crate::utils::terminal::Palette;

/// Eugene - build, test and lint the Eugene C++ project
///
/// Commands: build, config, test, clean (mrproper), lint, doc, version.
/// Each takes at most one sub-flag, e.g. `eugene build test`. Options go
/// before the command; everything after it is passed on as a sub-flag.
#[derive(Parser, Debug)]
#[command(name = "eugene")]
#[command(about, long_about = None)]
pub struct Cli {
    /// Echo every external command and its exit status
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Command followed by an optional sub-flag
    #[arg(value_name = "COMMAND", allow_hyphen_values = true, trailing_var_arg = true)]
    pub tokens: Vec<String>,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        let Some(invocation) = Invocation::from_tokens(&self.tokens) else {
            usage::print_usage(&mut Palette::new());
            return Ok(());
        };

        let mut prompter = StdinPrompter;
        let mut palette = Palette::new();
        let mut gate = RetryGate::new();
        let Some(command) = dispatch::resolve(&invocation, &mut prompter, &mut palette, &mut gate)?
        else {
            return Ok(());
        };

        let project_dir =
            std::env::current_dir().context("Failed to get current working directory")?;
        let config = if command.needs_config() {
            EugeneConfig::load_from_dir(&project_dir)?
        } else {
            EugeneConfig::default()
        };

        let mut runner = SystemRunner::new(project_dir.clone(), self.verbose);
        let mut session = Session::new(&mut runner, &mut prompter, config, project_dir);
        session.palette = palette;
        dispatch::execute(&mut session, command)
    }
}
