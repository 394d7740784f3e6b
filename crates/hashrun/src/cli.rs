//! CLI argument parsing with clap. Defines the `Cli` struct.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hashrun",
    version,
    about = "Build a contest solver and run it over lettered input sets",
    after_help = "Examples:\n  hashrun\n  hashrun ace\n  hashrun b --dry-run\n  hashrun --config hashrun.toml -v"
)]
pub struct Cli {
    /// Only run input sets whose letter appears in this string
    #[arg(allow_hyphen_values = true)]
    pub filter: Option<String>,

    /// Further arguments, echoed but otherwise ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,

    /// Path to config file (default: ./hashrun.toml, then ~/.config/hashrun/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Detailed output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// The argument list the runner sees: program name, the filter if one was given,
    /// then any further positionals. Flags are left out, so `args[1]` is the filter.
    pub fn invocation_args(&self, program: &str) -> Vec<String> {
        let mut args = vec![program.to_string()];
        args.extend(self.filter.clone());
        args.extend(self.rest.iter().cloned());
        args
    }
}
