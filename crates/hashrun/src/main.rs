//! Thin binary entry point — parses CLI args and delegates to `hashrun::run()`.

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = hashrun::cli::Cli::parse();
    hashrun::logging::init(cli.verbose, cli.quiet);

    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "hashrun".to_string());

    match hashrun::run(cli, &program) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
