//! Eugene.toml configuration parsing
//!
//! The file is optional. Every field has a default, so an empty or missing
//! file gives the stock layout:
//!
//! ```toml
//! [build]
//! dir = "build"
//! generator = "Ninja"
//! jobs = 4
//! log_file = "build.log"
//!
//! [[toolchains]]
//! cc = "gcc-11"
//! cxx = "g++-11"
//!
//! [[toolchains]]
//! cc = "gcc"
//! cxx = "g++"
//!
//! [lint]
//! format_dirs = ["src/core", "src/eugene-api"]
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::EugeneError;

/// Configuration file name, looked up in the project directory
pub const CONFIG_FILE: &str = "Eugene.toml";

/// Root configuration from Eugene.toml
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct EugeneConfig {
    /// Build directory and runner settings
    pub build: BuildConfig,

    /// Compiler pairs tried in order when configuring
    pub toolchains: Vec<Toolchain>,

    /// Formatter settings
    pub lint: LintConfig,
}

/// Build configuration from [build] section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Build directory, relative to the project root
    pub dir: String,

    /// CMake generator
    pub generator: String,

    /// Parallel jobs passed to ninja
    pub jobs: usize,

    /// Build log removed by clean
    pub log_file: String,
}

/// A (C compiler, C++ compiler) candidate pair
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Toolchain {
    pub cc: String,
    pub cxx: String,
}

/// Lint configuration from [lint] section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Directories handed to clang-format-all
    pub format_dirs: Vec<String>,
}

impl Default for EugeneConfig {
    fn default() -> Self {
        Self {
            build: BuildConfig::default(),
            toolchains: vec![Toolchain::new("gcc-11", "g++-11"), Toolchain::new("gcc", "g++")],
            lint: LintConfig::default(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            dir: "build".to_string(),
            generator: "Ninja".to_string(),
            jobs: 4,
            log_file: "build.log".to_string(),
        }
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            format_dirs: vec!["src/core".to_string(), "src/eugene-api".to_string()],
        }
    }
}

impl Toolchain {
    pub fn new(cc: impl Into<String>, cxx: impl Into<String>) -> Self {
        Self {
            cc: cc.into(),
            cxx: cxx.into(),
        }
    }
}

impl EugeneConfig {
    /// Load Eugene.toml from `project_dir`, falling back to defaults when
    /// the file does not exist
    pub fn load_from_dir(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| EugeneError::invalid_config(e.message().to_string()))
            .context("Failed to parse Eugene.toml")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), EugeneError> {
        if self.toolchains.is_empty() {
            return Err(EugeneError::invalid_config(
                "at least one [[toolchains]] entry is required",
            ));
        }
        if self.build.jobs == 0 {
            return Err(EugeneError::invalid_config("build.jobs must be greater than 0"));
        }
        if self.build.dir.trim().is_empty() {
            return Err(EugeneError::invalid_config("build.dir must not be empty"));
        }
        Ok(())
    }
}
