//! Eugene - build orchestration CLI
//!
//! Wraps the project's native toolchain behind a handful of commands.
//!
//! ## Architecture
//!
//! ```text
//! CLI tokens → dispatch → commands/ → exec → conan/cmake/ninja/ctest (direct)
//! ```

mod cli;
mod commands;
mod config;
mod dispatch;
mod error;
mod exec;
mod fuzzy;
mod prompt;
mod registry;
mod usage;
mod utils;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.execute() {
        std::process::exit(error::report(&err));
    }
}
