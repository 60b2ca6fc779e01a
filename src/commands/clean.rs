//! Clean command implementation

use std::path::Path;

use anyhow::Result;
use walkdir::WalkDir;

use crate::dispatch::Session;
use crate::exec::{self, CommandLine};
use crate::utils::terminal::print_info;

/// Options parsed from the `clean` sub-argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanOptions {
    /// "force" given, or no sub-argument at all
    pub forced: bool,
    /// "kind" given
    pub kind: bool,
}

impl CleanOptions {
    /// Ask before each removal only for a kind clean that was not forced.
    ///
    /// Any other sub-argument removes without asking.
    pub fn ask_before_delete(&self) -> bool {
        self.kind && !self.forced
    }
}

fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.metadata().ok())
        .filter(|metadata| metadata.is_file())
        .map(|metadata| metadata.len())
        .sum()
}

fn format_size(size_bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = size_bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_idx])
}

/// Remove the build directory and the build log
pub fn execute(session: &mut Session, options: CleanOptions) -> Result<()> {
    let ask = options.ask_before_delete();
    let build_dir = session.build_dir();
    let size = dir_size(&build_dir);

    let remove_dir = CommandLine::new("rm")
        .arg("-rf")
        .arg(&session.config.build.dir);
    let removed = exec::run_optional(
        &mut *session.runner,
        &mut *session.prompter,
        &remove_dir,
        "Removing build directory",
        ask,
    )?;
    if removed && size > 0 && !build_dir.exists() {
        print_info(&format!("Freed {}", format_size(size)));
    }

    let remove_log = CommandLine::new("rm")
        .arg("-f")
        .arg(&session.config.build.log_file);
    exec::run_optional(
        &mut *session.runner,
        &mut *session.prompter,
        &remove_log,
        "Removing build logs",
        ask,
    )?;

    session.palette.print_style("Clean without scratching");
    Ok(())
}
