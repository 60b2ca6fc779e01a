//! Registry of known commands
//!
//! The order matters: usage lists commands in this order and the fuzzy
//! matcher offers the first close enough name it meets.

/// A known top-level command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Name typed on the command line
    pub name: &'static str,
    /// Short description used by usage
    pub description: &'static str,
    /// Sub-flags, each as "flag: effect"
    pub subcommands: &'static [&'static str],
}

/// All known commands, in matching order
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "build",
        description: "build project only",
        subcommands: &["test: builds tests", "doc: builds doc"],
    },
    CommandSpec {
        name: "test",
        description: "build tests",
        subcommands: &["run: runs tests"],
    },
    CommandSpec {
        name: "lint",
        description: "run local linters",
        subcommands: &[],
    },
    CommandSpec {
        name: "doc",
        description: "build local documentation",
        subcommands: &["up: uploads to gh-pages"],
    },
    CommandSpec {
        name: "clean",
        description: "clean metadata",
        subcommands: &[
            "force: removes build artifacts without asking (default)",
            "kind: asks before removing each item",
        ],
    },
    CommandSpec {
        name: "config",
        description: "configure the project",
        subcommands: &[],
    },
    CommandSpec {
        name: "version",
        description: "print the version",
        subcommands: &[],
    },
];
