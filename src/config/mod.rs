//! Project configuration

mod eugene_toml;

pub use eugene_toml::{EugeneConfig, Toolchain};
