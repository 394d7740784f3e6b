//! hashrun — build a contest solver and run it over lettered input sets.
//! Re-exports all modules and wires the CLI, config and runner together.

pub mod cli;
pub mod config;
pub mod expand;
pub mod filter;
pub mod invoke;
pub mod logging;
pub mod runner;

use anyhow::Result;
use console::style;
use tracing::debug;

use cli::Cli;
use config::Config;
use invoke::{DryRun, Process};
use runner::{Outcome, Runner, Summary};

/// Run the CLI with parsed arguments. `program` is the name the binary was invoked as.
///
/// Collaborator failures never turn into an error here; only config problems do.
pub fn run(cli: Cli, program: &str) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    config.validate()?;

    let args = cli.invocation_args(program);

    let summary = if cli.dry_run {
        if !cli.quiet {
            println!(
                "{}",
                style("[dry-run] Nothing will be built or solved").yellow().bold()
            );
        }
        Runner::new(&config, DryRun::new(cli.quiet))
            .echo_args(!cli.quiet)
            .run(&args)
    } else {
        Runner::new(&config, Process)
            .echo_args(!cli.quiet)
            .run(&args)
    };

    if cli.verbose {
        report(&summary);
    }

    Ok(())
}

/// Log every invocation and how it ended.
fn report(summary: &Summary) {
    for inv in &summary.invocations {
        let label = match inv.letter {
            Some(letter) => format!("solve '{letter}'"),
            None => "build".to_string(),
        };
        match &inv.outcome {
            Outcome::Exited(status) => debug!("{label}: {status}"),
            Outcome::SpawnFailed(e) => debug!("{label}: not started ({e})"),
        }
    }
    debug!(
        "{} invocation(s), {} unsuccessful",
        summary.invocations.len(),
        summary.unsuccessful()
    );
}
