//! Command dispatch
//!
//! ```text
//! tokens → Invocation → Command::parse ─┬─ known   → commands::*::execute
//!                                       └─ unknown → usage → fuzzy::suggest ─┐
//!                         ▲                                                   │
//!                         └──────────────── corrected name ──────────────────┘
//! ```
//!
//! The loop runs at most twice: the retry gate allows one suggestion.
//! Resolution needs no configuration, so `version` and the usage path work
//! next to a broken `Eugene.toml`.

use std::path::PathBuf;

use anyhow::Result;

use crate::commands::{self, Command};
use crate::config::EugeneConfig;
use crate::error::EugeneError;
use crate::exec::Runner;
use crate::fuzzy::{self, RetryGate};
use crate::prompt::Prompter;
use crate::usage;
use crate::utils::terminal::Palette;

/// Command name and sub-arguments from the command line, lower-cased
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub sub_args: Vec<String>,
    pub arg_count: usize,
}

impl Invocation {
    /// Build from raw tokens; `None` when there is no command at all
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Option<Self> {
        let (command, rest) = tokens.split_first()?;
        let sub_args: Vec<String> = rest.iter().map(|t| t.as_ref().to_lowercase()).collect();
        Some(Self {
            command: command.as_ref().to_lowercase(),
            arg_count: sub_args.len(),
            sub_args,
        })
    }

    /// At most one sub-argument may follow the command
    pub fn check_arity(&self) -> Result<(), EugeneError> {
        if self.arg_count > 1 {
            return Err(EugeneError::TooManyArguments {
                count: self.arg_count,
            });
        }
        Ok(())
    }
}

/// Per-invocation state shared by every command
pub struct Session<'a> {
    pub runner: &'a mut dyn Runner,
    pub prompter: &'a mut dyn Prompter,
    pub config: EugeneConfig,
    pub project_dir: PathBuf,
    pub palette: Palette,
}

impl<'a> Session<'a> {
    pub fn new(
        runner: &'a mut dyn Runner,
        prompter: &'a mut dyn Prompter,
        config: EugeneConfig,
        project_dir: PathBuf,
    ) -> Self {
        Self {
            runner,
            prompter,
            config,
            project_dir,
            palette: Palette::new(),
        }
    }

    /// Absolute path of the build directory
    pub fn build_dir(&self) -> PathBuf {
        self.project_dir.join(&self.config.build.dir)
    }
}

/// Turn an invocation into a command.
///
/// An unknown name prints usage and, while the gate is open, offers the
/// closest known name. `None` means there is nothing to run.
pub fn resolve(
    invocation: &Invocation,
    prompter: &mut dyn Prompter,
    palette: &mut Palette,
    gate: &mut RetryGate,
) -> Result<Option<Command>> {
    invocation.check_arity()?;

    let mut name = invocation.command.clone();
    loop {
        if let Some(command) = Command::parse(&name, &invocation.sub_args)? {
            return Ok(Some(command));
        }
        usage::print_usage(palette);
        println!("\n");
        match fuzzy::suggest(&name, gate, prompter, palette)? {
            Some(corrected) => name = corrected.to_string(),
            None => return Ok(None),
        }
    }
}

/// Run a resolved command
pub fn execute(session: &mut Session, command: Command) -> Result<()> {
    match command {
        Command::Build(options) => commands::build::execute(session, options),
        Command::Config => commands::config::execute(session),
        Command::Test(options) => commands::test::execute(session, options),
        Command::Clean(options) => commands::clean::execute(session, options),
        Command::Lint => commands::lint::execute(session),
        Command::Doc(options) => commands::doc::execute(session, options),
        Command::Version => {
            commands::version::execute();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::build::BUILD_TESTS_ENV;
    use crate::commands::test_support::TestProject;
    use crate::exec::recording::RecordingRunner;
    use crate::prompt::scripted::ScriptedPrompter;
    use crate::registry::COMMANDS;

    fn dispatch(session: &mut Session, invocation: &Invocation) -> Result<()> {
        let mut gate = RetryGate::new();
        let resolved = resolve(
            invocation,
            &mut *session.prompter,
            &mut session.palette,
            &mut gate,
        )?;
        match resolved {
            Some(command) => execute(session, command),
            None => Ok(()),
        }
    }

    fn dispatch_tokens(
        project: &TestProject,
        runner: &mut RecordingRunner,
        prompter: &mut ScriptedPrompter,
        tokens: &[&str],
    ) -> Result<()> {
        let invocation = Invocation::from_tokens(tokens).unwrap();
        project.run_prompted(runner, prompter, |session| dispatch(session, &invocation))
    }

    #[test]
    fn test_invocation_lowercases() {
        let invocation = Invocation::from_tokens(&["BUILD", "Test"]).unwrap();
        assert_eq!(invocation.command, "build");
        assert_eq!(invocation.sub_args, ["test"]);
        assert_eq!(invocation.arg_count, 1);
        assert!(Invocation::from_tokens::<&str>(&[]).is_none());
    }

    #[test]
    fn test_too_many_arguments_before_anything_runs() {
        for name in ["build", "clean", "version", "biuld"] {
            let project = TestProject::new();
            let mut runner = RecordingRunner::new();
            let mut prompter = ScriptedPrompter::new(&["y"]);
            let err =
                dispatch_tokens(&project, &mut runner, &mut prompter, &[name, "test", "doc"])
                    .unwrap_err();

            assert!(matches!(
                err.downcast_ref::<EugeneError>(),
                Some(EugeneError::TooManyArguments { count: 2 })
            ));
            assert!(runner.commands.is_empty());
            assert!(prompter.asked.is_empty());
            assert!(!project.path().join("build").exists());
        }
    }

    #[test]
    fn test_known_commands_never_prompt_for_suggestions() {
        for spec in COMMANDS {
            let project = TestProject::new();
            let mut runner = RecordingRunner::new();
            let mut prompter = ScriptedPrompter::new(&[]);
            let _ = dispatch_tokens(&project, &mut runner, &mut prompter, &[spec.name]);
            assert!(
                prompter.asked.iter().all(|q| !q.contains("Proceed with")),
                "{} asked {:?}",
                spec.name,
                prompter.asked
            );
        }
    }

    #[test]
    fn test_build_test_scenario() {
        let project = TestProject::new();
        let mut runner = RecordingRunner::new();
        let mut prompter = ScriptedPrompter::new(&[]);
        dispatch_tokens(&project, &mut runner, &mut prompter, &["build", "test"]).unwrap();

        assert_eq!(runner.env_var(BUILD_TESTS_ENV), Some("1"));
        assert!(runner.commands[0].starts_with("conan"));
        assert!(runner.commands[1].starts_with("cmake"));
        assert_eq!(runner.commands[2], "ninja -Cbuild -j4");
        assert_eq!(runner.commands.len(), 3);
    }

    #[test]
    fn test_accepted_suggestion_redispatches_with_same_sub_args() {
        let project = TestProject::new();
        let mut runner = RecordingRunner::new();
        let mut prompter = ScriptedPrompter::new(&["y"]);
        dispatch_tokens(&project, &mut runner, &mut prompter, &["biuld", "test"]).unwrap();

        assert_eq!(prompter.asked.len(), 1);
        assert_eq!(runner.env_var(BUILD_TESTS_ENV), Some("1"));
        assert_eq!(runner.runs_of("ninja"), 1);
    }

    #[test]
    fn test_accepted_suggestion_without_sub_args() {
        let project = TestProject::new();
        let mut runner = RecordingRunner::new();
        let mut prompter = ScriptedPrompter::new(&["Y"]);
        dispatch_tokens(&project, &mut runner, &mut prompter, &["cleen"]).unwrap();
        assert_eq!(runner.commands, ["rm -rf build", "rm -f build.log"]);
    }

    #[test]
    fn test_declined_suggestion_does_nothing() {
        let project = TestProject::new();
        let mut runner = RecordingRunner::new();
        let mut prompter = ScriptedPrompter::new(&["n"]);
        dispatch_tokens(&project, &mut runner, &mut prompter, &["biuld"]).unwrap();
        assert!(runner.commands.is_empty());
    }

    #[test]
    fn test_unknown_without_candidate() {
        let project = TestProject::new();
        let mut runner = RecordingRunner::new();
        let mut prompter = ScriptedPrompter::new(&[]);
        dispatch_tokens(&project, &mut runner, &mut prompter, &["xyz"]).unwrap();
        assert!(prompter.asked.is_empty());
        assert!(runner.commands.is_empty());
    }

    #[test]
    fn test_gate_already_closed_gives_no_suggestion() {
        let mut prompter = ScriptedPrompter::new(&["y"]);
        let mut gate = RetryGate::new();
        gate.take();
        let invocation = Invocation::from_tokens(&["biuld"]).unwrap();
        let resolved =
            resolve(&invocation, &mut prompter, &mut Palette::new(), &mut gate).unwrap();
        assert_eq!(resolved, None);
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn test_hyphenated_token_is_an_unknown_command() {
        let mut prompter = ScriptedPrompter::new(&["y"]);
        let invocation = Invocation::from_tokens(&["-x"]).unwrap();
        let resolved =
            resolve(&invocation, &mut prompter, &mut Palette::new(), &mut RetryGate::new())
                .unwrap();
        assert_eq!(resolved, None);
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn test_dashed_sub_flag_matches_by_substring() {
        let project = TestProject::new();
        let mut runner = RecordingRunner::new();
        let mut prompter = ScriptedPrompter::new(&["n", "n"]);
        dispatch_tokens(&project, &mut runner, &mut prompter, &["clean", "--Force"]).unwrap();
        assert!(prompter.asked.is_empty());
        assert_eq!(runner.commands, ["rm -rf build", "rm -f build.log"]);
    }

    #[test]
    fn test_version_spawns_nothing() {
        let project = TestProject::new();
        let mut runner = RecordingRunner::new();
        let mut prompter = ScriptedPrompter::new(&[]);
        dispatch_tokens(&project, &mut runner, &mut prompter, &["version"]).unwrap();
        assert!(runner.commands.is_empty());
        assert!(runner.env.is_empty());
    }

    #[test]
    fn test_clean_without_argument_matches_force() {
        let mut results = Vec::new();
        for tokens in [&["clean"][..], &["clean", "force"][..]] {
            let project = TestProject::new();
            let mut runner = RecordingRunner::new();
            let mut prompter = ScriptedPrompter::new(&["n", "n"]);
            dispatch_tokens(&project, &mut runner, &mut prompter, tokens).unwrap();
            results.push((runner.commands, prompter.asked));
        }
        assert_eq!(results[0], results[1]);
        assert!(results[0].1.is_empty());
    }

    #[test]
    fn test_clean_other_word_does_not_ask() {
        let project = TestProject::new();
        let mut runner = RecordingRunner::new();
        let mut prompter = ScriptedPrompter::new(&["n", "n"]);
        dispatch_tokens(&project, &mut runner, &mut prompter, &["mrproper", "everything"]).unwrap();
        assert!(prompter.asked.is_empty());
        assert_eq!(runner.commands.len(), 2);
    }

    #[test]
    fn test_doc_surfaces_unsupported() {
        let project = TestProject::new();
        let mut runner = RecordingRunner::new();
        let mut prompter = ScriptedPrompter::new(&[]);
        let err = dispatch_tokens(&project, &mut runner, &mut prompter, &["doc", "up"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EugeneError>(),
            Some(EugeneError::Unsupported { .. })
        ));
    }
}
