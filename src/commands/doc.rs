//! Documentation command implementation

use anyhow::Result;

use crate::commands::build::{self, BuildOptions};
use crate::dispatch::Session;

/// Options parsed from the `doc` sub-argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocOptions {
    /// Upload the generated documentation
    pub upload: bool,
}

/// Build the project and its documentation, then optionally upload it
pub fn execute(session: &mut Session, options: DocOptions) -> Result<()> {
    build::execute(
        session,
        BuildOptions {
            tests: false,
            docs: true,
        },
    )?;

    if options.upload {
        println!("Uploading docs");
    }
    Ok(())
}
