//! Build command implementation

use anyhow::Result;

use crate::commands::config;
use crate::dispatch::Session;
use crate::error::EugeneError;
use crate::exec::{self, CommandLine, Output};

/// Environment flag read by the project's CMake files to add test targets
pub const BUILD_TESTS_ENV: &str = "EUGENE_BUILD_TESTS";

/// Options parsed from the `build` sub-argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildOptions {
    /// Build test targets too
    pub tests: bool,
    /// Build documentation after the project
    pub docs: bool,
}

/// ninja invocation for the build directory
pub fn ninja(build_dir: &str, jobs: usize) -> CommandLine {
    CommandLine::new("ninja")
        .arg(format!("-C{}", build_dir))
        .arg(format!("-j{}", jobs))
}

/// Configure, then build. The build's own exit status is not inspected.
pub fn execute(session: &mut Session, options: BuildOptions) -> Result<()> {
    config::execute(session)?;

    if options.tests {
        session.runner.set_env(BUILD_TESTS_ENV, "1");
    }

    let suffix = if options.tests { " and tests" } else { "" };
    session
        .palette
        .print_style(&format!("Building project{}", suffix));

    let build = &session.config.build;
    let command = ninja(&build.dir, build.jobs);
    exec::run_unchecked(&mut *session.runner, &command, Output::Inherit);

    if options.docs {
        return Err(EugeneError::unsupported("Building doc").into());
    }
    Ok(())
}
