//! External program invocation behind the `Invoker` trait: real processes or a dry-run preview.

use console::style;
use std::io;
use std::process::Command;

/// How an invoked program finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    /// Exit code, or `None` when terminated by a signal
    pub code: Option<i32>,
}

impl Status {
    pub const SUCCESS: Status = Status { code: Some(0) };

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Runs an external program to completion.
pub trait Invoker {
    fn invoke(&mut self, program: &str, args: &[String]) -> io::Result<Status>;
}

/// Spawns real processes with inherited stdio and waits for each.
#[derive(Debug, Default)]
pub struct Process;

impl Invoker for Process {
    fn invoke(&mut self, program: &str, args: &[String]) -> io::Result<Status> {
        let status = Command::new(program).args(args).status()?;
        Ok(Status {
            code: status.code(),
        })
    }
}

/// Prints each command instead of running it.
#[derive(Debug, Default)]
pub struct DryRun {
    quiet: bool,
}

impl DryRun {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Invoker for DryRun {
    fn invoke(&mut self, program: &str, args: &[String]) -> io::Result<Status> {
        if !self.quiet {
            println!(
                "  {} {}",
                style("would run").yellow(),
                render(program, args)
            );
        }
        Ok(Status::SUCCESS)
    }
}

/// Render a command line for display.
pub fn render(program: &str, args: &[String]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

/// Test double that records every call and replays scripted results.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub calls: Vec<(String, Vec<String>)>,
    pub fail_program: Option<String>,
}

#[cfg(test)]
impl Invoker for Recorder {
    fn invoke(&mut self, program: &str, args: &[String]) -> io::Result<Status> {
        self.calls.push((program.to_string(), args.to_vec()));
        if self.fail_program.as_deref() == Some(program) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such program"));
        }
        Ok(Status::SUCCESS)
    }
}
