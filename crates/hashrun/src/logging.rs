//! Tracing subscriber setup. Logs go to stderr so stdout stays with the collaborators.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for the given verbosity.
fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "hashrun=warn"
    } else if verbose {
        "hashrun=debug"
    } else {
        "hashrun=info"
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the flags when set.
pub fn init(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
