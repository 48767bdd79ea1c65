//! Localecheck CLI entry point.

use clap::Parser;
use localecheck::cli::{self, Cli, EXIT_ERROR};
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr; results stay on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("localecheck=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = match cli::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}
