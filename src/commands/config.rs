//! Config command implementation
//!
//! Installs dependencies with conan and generates build files with cmake,
//! trying each toolchain candidate in order until one succeeds.

use std::fs;
use std::io;

use anyhow::{Context, Result};

use crate::config::Toolchain;
use crate::dispatch::Session;
use crate::error::EugeneError;
use crate::exec::{self, CommandLine};
use crate::utils::terminal::print_warning;

/// Configure the project, failing only when every candidate fails
pub fn execute(session: &mut Session) -> Result<()> {
    prepare_build_dir(session)?;

    let toolchains = session.config.toolchains.clone();
    for toolchain in &toolchains {
        if configure_with(session, toolchain) {
            return Ok(());
        }
    }

    Err(EugeneError::ConfigurationFailed {
        attempts: toolchains.len(),
    }
    .into())
}

fn prepare_build_dir(session: &mut Session) -> Result<()> {
    let build_dir = session.build_dir();
    match fs::create_dir(&build_dir) {
        Ok(()) => println!("INFO: Created '{}/' directory", session.config.build.dir),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => session.palette.print_style(
            &format!("INFO: '{}/' directory already exists", session.config.build.dir),
        ),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to create {}", build_dir.display()));
        }
    }
    Ok(())
}

/// conan install for the build directory
pub fn conan_install(build_dir: &str) -> CommandLine {
    CommandLine::new("conan")
        .args(["install", ".", "-if"])
        .arg(build_dir)
        .arg("--build=missing")
}

/// cmake generation pinned to a toolchain
pub fn cmake_generate(build_dir: &str, generator: &str, toolchain: &Toolchain) -> CommandLine {
    CommandLine::new("cmake")
        .arg("-S.")
        .arg(format!("-B{}", build_dir))
        .arg(format!("-G{}", generator))
        .arg(format!("-DCMAKE_C_COMPILER={}", toolchain.cc))
        .arg(format!("-DCMAKE_CXX_COMPILER={}", toolchain.cxx))
}

fn configure_with(session: &mut Session, toolchain: &Toolchain) -> bool {
    session.runner.set_env("CC", &toolchain.cc);
    session.runner.set_env("CXX", &toolchain.cxx);

    let build = &session.config.build;
    let steps = [
        conan_install(&build.dir),
        cmake_generate(&build.dir, &build.generator, toolchain),
    ];

    session.palette.print_style("Trying to configure project ...");
    let outcome = steps
        .iter()
        .try_for_each(|step| exec::run_checked(&mut *session.runner, step));

    match outcome {
        Ok(()) => {
            session.palette.print_style("Configuration successful!");
            true
        }
        Err(e) => {
            print_warning(&format!("{:#}", e));
            session.palette.print_style("Configuration failed :(");
            false
        }
    }
}
