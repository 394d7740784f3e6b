//! The run itself: build once, echo the arguments, then solve each selected input set.
//!
//! Collaborator results are recorded but never acted on. A failed build or a
//! solver that can't be spawned does not stop the remaining steps.

use tracing::{debug, info, warn};

use crate::config::{CommandSpec, Config};
use crate::expand;
use crate::filter;
use crate::invoke::{Invoker, Status, render};

/// What one collaborator call came back with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Exited(Status),
    SpawnFailed(String),
}

/// One collaborator call made during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// `None` for the build step, the input-set letter otherwise
    pub letter: Option<char>,
    pub program: String,
    pub args: Vec<String>,
    pub outcome: Outcome,
}

/// Everything a run did, in order. The build step is always first.
#[derive(Debug, Default)]
pub struct Summary {
    pub invocations: Vec<Invocation>,
}

impl Summary {
    /// Letters the solver was invoked for, in invocation order.
    pub fn solved(&self) -> Vec<char> {
        self.invocations.iter().filter_map(|i| i.letter).collect()
    }

    /// Calls that did not exit cleanly.
    pub fn unsuccessful(&self) -> usize {
        self.invocations
            .iter()
            .filter(|i| !matches!(i.outcome, Outcome::Exited(s) if s.success()))
            .count()
    }
}

pub struct Runner<'a, I: Invoker> {
    config: &'a Config,
    invoker: I,
    echo_args: bool,
}

impl<'a, I: Invoker> Runner<'a, I> {
    pub fn new(config: &'a Config, invoker: I) -> Self {
        Self {
            config,
            invoker,
            echo_args: true,
        }
    }

    /// Whether to print the argument list to stdout (on by default).
    pub fn echo_args(mut self, echo: bool) -> Self {
        self.echo_args = echo;
        self
    }

    pub fn into_invoker(self) -> I {
        self.invoker
    }

    /// Build, then invoke the solver for every letter selected by `args[1]`.
    pub fn run(&mut self, args: &[String]) -> Summary {
        let config = self.config;
        let mut summary = Summary::default();

        info!("building: {}", render(&config.build.program, &config.build.args));
        let build = self.call(None, &config.build, Vec::new());
        summary.invocations.push(build);

        if self.echo_args {
            println!("{args:?}");
        }

        for letter in filter::selected(args) {
            let inputs = match expand::expand(&config.data_dir, letter, &config.extension) {
                Ok(inputs) => inputs,
                Err(e) => {
                    warn!("could not expand inputs for '{letter}': {e:#}");
                    vec![expand::pattern(&config.data_dir, letter, &config.extension)]
                }
            };
            info!("solving '{letter}' ({} input(s))", inputs.len());

            let solve = self.call(Some(letter), &config.solver, inputs);
            summary.invocations.push(solve);
        }

        summary
    }

    fn call(
        &mut self,
        letter: Option<char>,
        spec: &CommandSpec,
        inputs: Vec<String>,
    ) -> Invocation {
        let mut args = spec.args.clone();
        args.extend(inputs);

        let outcome = match self.invoker.invoke(&spec.program, &args) {
            Ok(status) => {
                debug!("{} finished with {status}", spec.program);
                Outcome::Exited(status)
            }
            Err(e) => {
                warn!("failed to run {}: {e}", spec.program);
                Outcome::SpawnFailed(e.to_string())
            }
        };

        Invocation {
            letter,
            program: spec.program.clone(),
            args,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoke::Recorder;
    use std::path::Path;
    use tempfile::TempDir;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn config_with_data(dir: &Path) -> Config {
        Config {
            data_dir: dir.to_path_buf(),
            ..Config::default()
        }
    }

    fn run(config: &Config, argv: &[String]) -> (Summary, Recorder) {
        let mut runner = Runner::new(config, Recorder::default()).echo_args(false);
        let summary = runner.run(argv);
        (summary, runner.into_invoker())
    }

    fn solver_args_joined(recorder: &Recorder) -> Vec<String> {
        recorder
            .calls
            .iter()
            .filter(|(program, _)| program == "./solve")
            .map(|(_, args)| args.join(" "))
            .collect()
    }

    #[test]
    fn empty_args_build_once_and_solve_all() {
        let dir = TempDir::new().unwrap();
        let config = config_with_data(dir.path());
        let (summary, recorder) = run(&config, &[]);

        assert_eq!(recorder.calls[0], ("make".to_string(), Vec::new()));
        assert_eq!(recorder.calls.iter().filter(|(p, _)| p == "make").count(), 1);
        assert_eq!(summary.solved(), vec!['a', 'b', 'c', 'd', 'e']);
        let expected: Vec<String> = filter::IDENTIFIERS
            .into_iter()
            .map(|letter| expand::pattern(dir.path(), letter, ".in"))
            .collect();
        assert_eq!(solver_args_joined(&recorder), expected);
    }

    #[test]
    fn filter_selects_matching_letters_in_order() {
        let dir = TempDir::new().unwrap();
        let config = config_with_data(dir.path());
        let (summary, _) = run(&config, &args(&["prog", "eca"]));
        assert_eq!(summary.solved(), vec!['a', 'c', 'e']);
    }

    #[test]
    fn empty_filter_solves_all() {
        let dir = TempDir::new().unwrap();
        let config = config_with_data(dir.path());
        let (summary, recorder) = run(&config, &args(&["prog", ""]));
        assert_eq!(summary.solved(), vec!['a', 'b', 'c', 'd', 'e']);
        assert_eq!(recorder.calls.len(), 6);
    }

    #[test]
    fn filter_without_letters_still_builds() {
        let dir = TempDir::new().unwrap();
        let config = config_with_data(dir.path());
        let (summary, recorder) = run(&config, &args(&["prog", "xyz"]));
        assert!(summary.solved().is_empty());
        assert_eq!(recorder.calls, vec![("make".to_string(), Vec::new())]);
    }

    #[test]
    fn arguments_after_the_filter_are_ignored() {
        let dir = TempDir::new().unwrap();
        let config = config_with_data(dir.path());
        let (summary, _) = run(&config, &args(&["prog", "b", "acde"]));
        assert_eq!(summary.solved(), vec!['b']);
    }

    #[test]
    fn solver_receives_expanded_inputs() {
        let dir = TempDir::new().unwrap();
        for name in ["b_small.in", "b_big.in", "b_notes.txt"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }
        let config = config_with_data(dir.path());

        let (_, recorder) = run(&config, &args(&["prog", "b"]));
        let (_, solver_args) = &recorder.calls[1];
        assert_eq!(
            solver_args,
            &vec![
                dir.path().join("b_big.in").to_string_lossy().into_owned(),
                dir.path().join("b_small.in").to_string_lossy().into_owned(),
            ]
        );
    }

    #[test]
    fn configured_args_come_before_inputs() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            build: CommandSpec {
                program: "cargo".into(),
                args: args(&["build", "--release"]),
            },
            solver: CommandSpec {
                program: "./solve".into(),
                args: args(&["--seed", "7"]),
            },
            ..Config::default()
        };

        let (_, recorder) = run(&config, &args(&["prog", "d"]));
        let pattern = expand::pattern(dir.path(), 'd', ".in");
        assert_eq!(
            recorder.calls,
            vec![
                ("cargo".to_string(), args(&["build", "--release"])),
                ("./solve".to_string(), args(&["--seed", "7", pattern.as_str()])),
            ]
        );
    }

    #[test]
    fn failed_build_does_not_stop_the_run() {
        let dir = TempDir::new().unwrap();
        let config = config_with_data(dir.path());
        let mut recorder = Recorder::default();
        recorder.fail_program = Some("make".to_string());

        let mut runner = Runner::new(&config, recorder).echo_args(false);
        let summary = runner.run(&args(&["prog", "ab"]));

        assert!(matches!(
            summary.invocations[0].outcome,
            Outcome::SpawnFailed(_)
        ));
        assert_eq!(summary.solved(), vec!['a', 'b']);
        assert_eq!(summary.unsuccessful(), 1);
    }

    #[test]
    fn missing_solver_is_recorded_for_every_letter() {
        let dir = TempDir::new().unwrap();
        let config = config_with_data(dir.path());
        let mut recorder = Recorder::default();
        recorder.fail_program = Some("./solve".to_string());

        let mut runner = Runner::new(&config, recorder).echo_args(false);
        let summary = runner.run(&args(&["prog", "ace"]));

        assert_eq!(summary.solved(), vec!['a', 'c', 'e']);
        assert_eq!(summary.unsuccessful(), 3);
        assert_eq!(summary.invocations[0].outcome, Outcome::Exited(Status::SUCCESS));
    }
}
