//! pwd-verdict - classify a password from the command line
//!
//! Reads the password from `--password` or the first line of stdin and prints
//! its strength with suggestions for unmet criteria.

use std::process::ExitCode;

use clap::Parser;
use pwd_verdict::cli::{exit_status, run, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(&cli, std::io::stdin().lock(), std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(exit_status(&e))
        }
    }
}

fn init_logging() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
