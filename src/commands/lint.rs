//! Lint command implementation
//!
//! Formats C++ sources with clang-format-all and every CMakeLists.txt with
//! cmake-format. Neither exit status is inspected.

use std::path::{Path, PathBuf};

use anyhow::Result;
use walkdir::{DirEntry, WalkDir};

use crate::dispatch::Session;
use crate::exec::{self, CommandLine, Output};
use crate::utils::tools;

const CMAKE_LISTS: &str = "CMakeLists.txt";

/// Every CMakeLists.txt below `root`, relative to it, skipping hidden
/// directories and the build directory
pub fn find_cmake_lists(root: &Path, build_dir: &str) -> Vec<PathBuf> {
    let build_root = root.join(build_dir);
    let keep = |entry: &DirEntry| {
        if entry.depth() == 0 {
            return true;
        }
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        !hidden && entry.path() != build_root.as_path()
    };

    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(keep)
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == CMAKE_LISTS)
        .filter_map(|entry| entry.path().strip_prefix(root).ok().map(Path::to_path_buf))
        .collect()
}

pub fn execute(session: &mut Session) -> Result<()> {
    println!("Linting");
    tools::ensure_tool(session, "cmake-format")?;

    let format_all =
        CommandLine::new("clang-format-all").args(session.config.lint.format_dirs.iter().cloned());
    exec::run_unchecked(&mut *session.runner, &format_all, Output::Inherit);

    let lists = find_cmake_lists(&session.project_dir, &session.config.build.dir);
    if !lists.is_empty() {
        let cmake_format = CommandLine::new("cmake-format")
            .arg("-i")
            .args(lists.iter().map(|path| path.to_string_lossy().into_owned()));
        exec::run_unchecked(&mut *session.runner, &cmake_format, Output::Discard);
    }
    Ok(())
}
