//! # rupiah: Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse arguments (clap)                                             │
//! │  2. Initialize tracing (stderr)                                        │
//! │  3. Load config (file → env → validate)                                │
//! │  4. Run the command, print the result on stdout                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

use clap::Parser;
use rupiah_cli::{load_config, run, Cli, CliResult};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn execute(cli: &Cli) -> CliResult<String> {
    let config = load_config(cli)?;
    debug!(?config, "Effective configuration");

    run(cli, &config)
}

/// Initializes the tracing subscriber for logging.
///
/// `RUST_LOG` wins when set; otherwise `-v` switches everything to debug.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn,rupiah_cli=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
