//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};
use rupiah_core::TaxMode;

#[derive(Parser, Debug)]
#[command(
    name = "rupiah",
    version,
    about = "Indonesian money helpers: PPN, Rupiah formatting, terbilang, phone numbers"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (defaults to the platform config dir)")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split an amount into base price, PPN and taxed price
    Tax {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[command(flatten)]
        tax: TaxArgs,
    },

    /// Render an amount as "Rp 1.500.000"
    Format {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Spell an amount out in Indonesian words
    Words {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Read a number out of user-typed text
    Parse {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Normalize a phone number to E.164
    Phone {
        number: String,
        #[arg(long, help = "Country calling code (overrides config)")]
        country: Option<String>,
    },

    /// Total an invoice from NAME=PRICE[xQTY] items
    Invoice {
        #[arg(required = true, value_name = "NAME=PRICE[xQTY]")]
        items: Vec<String>,
        #[command(flatten)]
        tax: TaxArgs,
    },

    /// Show the effective configuration
    Config {
        #[arg(long, help = "Write it to the config file")]
        write: bool,
    },
}

/// Flags shared by commands that apply PPN.
#[derive(Args, Debug, Clone, Default)]
#[command(group(ArgGroup::new("mode").args(["inclusive", "exclusive"])))]
pub struct TaxArgs {
    #[arg(long, help = "Amounts already include tax")]
    pub inclusive: bool,

    #[arg(long, help = "Tax is added on top of amounts")]
    pub exclusive: bool,

    #[arg(long, value_name = "PCT", help = "Tax rate in percent (overrides config)")]
    pub rate: Option<f64>,
}

impl TaxArgs {
    /// Mode chosen on the command line, if any.
    pub fn mode(&self) -> Option<TaxMode> {
        match (self.inclusive, self.exclusive) {
            (true, _) => Some(TaxMode::Inclusive),
            (_, true) => Some(TaxMode::Exclusive),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tax_command() {
        let cli = Cli::try_parse_from(["rupiah", "--json", "tax", "111000", "--inclusive"]).unwrap();
        assert!(cli.json);

        match cli.command {
            Command::Tax { amount, tax } => {
                assert_eq!(amount, "111000");
                assert_eq!(tax.mode(), Some(TaxMode::Inclusive));
                assert_eq!(tax.rate, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_negative_amount_is_not_a_flag() {
        let cli = Cli::try_parse_from(["rupiah", "format", "-1500"]).unwrap();
        assert!(matches!(cli.command, Command::Format { ref amount } if amount == "-1500"));
    }

    #[test]
    fn test_mode_flags_conflict() {
        let result = Cli::try_parse_from(["rupiah", "tax", "1000", "--inclusive", "--exclusive"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invoice_requires_items() {
        assert!(Cli::try_parse_from(["rupiah", "invoice"]).is_err());

        let cli =
            Cli::try_parse_from(["rupiah", "invoice", "Laptop=5000000", "Mouse=150000x2"]).unwrap();
        match cli.command {
            Command::Invoice { items, tax } => {
                assert_eq!(items.len(), 2);
                assert_eq!(tax.mode(), None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
