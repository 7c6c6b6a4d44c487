//! # rupiah-cli: Command-Line Front End
//!
//! Wires parsed arguments and loaded config to the pure functions in
//! `rupiah-core`.
//!
//! ## Module Structure
//! ```text
//! rupiah-cli/src/
//! ├── main.rs      # Entry point, tracing setup, exit codes
//! ├── lib.rs       # run(): command dispatch (this file)
//! ├── cli.rs       # clap argument definitions
//! ├── config.rs    # rupiah.toml + RUPIAH_* env overrides
//! ├── commands.rs  # One handler per subcommand
//! └── error.rs     # CliError, ConfigError
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Command};
pub use config::RupiahConfig;
pub use error::{CliError, CliResult, ConfigError};

/// Loads the config a command runs with.
///
/// `config --write` may target a file that does not exist yet; it starts
/// from the defaults (plus environment) instead of failing.
pub fn load_config(cli: &Cli) -> CliResult<RupiahConfig> {
    let creating = matches!(cli.command, Command::Config { write: true })
        && cli.config.as_ref().is_some_and(|path| !path.exists());

    if creating {
        RupiahConfig::load(None)
    } else {
        RupiahConfig::load(cli.config.clone())
    }
}

/// Runs one command and returns what should be printed.
pub fn run(cli: &Cli, config: &RupiahConfig) -> CliResult<String> {
    let json = cli.json;

    match &cli.command {
        Command::Tax { amount, tax } => commands::tax(amount, tax, config, json),
        Command::Format { amount } => commands::format(amount, json),
        Command::Words { amount } => commands::words(amount, json),
        Command::Parse { text } => commands::parse(text, json),
        Command::Phone { number, country } => {
            commands::phone(number, country.as_deref(), config, json)
        }
        Command::Invoice { items, tax } => commands::invoice(items, tax, config, json),
        Command::Config { write } => {
            commands::show_config(config, cli.config.clone(), *write, json)
        }
    }
}
