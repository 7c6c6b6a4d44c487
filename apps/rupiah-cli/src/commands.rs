//! # Command Handlers
//!
//! Each handler turns arguments plus config into the text printed on stdout.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Rp 1.500.000" ──► read_amount ──► rupiah-core ──► render              │
//! │                     (parse_rupiah,                  ├─ text lines       │
//! │                      warn on junk)                  └─ JSON (--json)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rupiah_core::validation::validate_country_code;
use rupiah_core::{
    format_rupiah, parse_rupiah, terbilang, to_e164_with_country, try_compute_tax, try_terbilang,
    Amount, CoreError, Invoice, TaxMode, TaxRate,
};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::cli::TaxArgs;
use crate::config::RupiahConfig;
use crate::error::{CliError, CliResult};

// =============================================================================
// Helpers
// =============================================================================

/// Parses user-typed money, warning when text with no digits reads as zero.
fn read_input(text: &str) -> Amount {
    let amount = parse_rupiah(text);

    if amount.is_zero() && !text.trim().is_empty() && !text.chars().any(|c| c.is_ascii_digit())
    {
        warn!(input = %text, "Input has no digits, reading it as zero");
    }

    amount
}

fn read_amount(text: &str) -> f64 {
    read_input(text).as_f64()
}

/// Rate and mode for a command: flags win over config.
fn resolve_tax(args: &TaxArgs, config: &RupiahConfig) -> (TaxRate, TaxMode) {
    let rate = args
        .rate
        .map(TaxRate::from_percentage)
        .unwrap_or_else(|| config.tax.tax_rate());
    let mode = args.mode().unwrap_or(config.tax.mode);

    debug!(%rate, %mode, "Resolved tax settings");
    (rate, mode)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

// =============================================================================
// Commands
// =============================================================================

/// `rupiah tax <amount>`
pub fn tax(amount: &str, args: &TaxArgs, config: &RupiahConfig, json: bool) -> CliResult<String> {
    let (rate, mode) = resolve_tax(args, config);
    let result = try_compute_tax(read_amount(amount), mode, rate)?;

    if json {
        return to_json(&result);
    }

    Ok(format!(
        "Base price : {}\nPPN {:<6} : {}\nTotal      : {}",
        format_rupiah(result.base_price()),
        rate.to_string(),
        format_rupiah(result.tax()),
        format_rupiah(result.taxed_price()),
    ))
}

/// `rupiah format <amount>`
pub fn format(amount: &str, json: bool) -> CliResult<String> {
    let value = read_amount(amount);
    let formatted = format_rupiah(value);

    if json {
        return to_json(&json!({ "amount": value, "formatted": formatted }));
    }
    Ok(formatted)
}

/// `rupiah words <amount>`
pub fn words(amount: &str, json: bool) -> CliResult<String> {
    let value = read_amount(amount);
    let words = try_terbilang(value)?;

    if json {
        return to_json(&json!({ "amount": value, "words": words }));
    }
    Ok(words)
}

/// `rupiah parse <text>`
pub fn parse(text: &str, json: bool) -> CliResult<String> {
    let amount = read_input(text);

    if json {
        return to_json(&json!({ "input": text, "amount": amount }));
    }
    Ok(amount.to_string())
}

/// `rupiah phone <number>`
pub fn phone(
    number: &str,
    country: Option<&str>,
    config: &RupiahConfig,
    json: bool,
) -> CliResult<String> {
    let country_code = country
        .map(|c| c.trim().trim_start_matches('+'))
        .unwrap_or(config.phone.country_code.as_str());
    validate_country_code(country_code).map_err(CoreError::from)?;

    let e164 = to_e164_with_country(number, country_code);
    if e164.is_empty() {
        warn!(input = %number, "Phone number has no digits");
    }

    if json {
        return to_json(&json!({ "input": number, "e164": e164 }));
    }
    Ok(e164)
}

/// `rupiah invoice NAME=PRICE[xQTY]...`
pub fn invoice(
    items: &[String],
    args: &TaxArgs,
    config: &RupiahConfig,
    json: bool,
) -> CliResult<String> {
    let (rate, mode) = resolve_tax(args, config);
    let mut invoice = Invoice::new(rate, mode)?;

    for item in items {
        let (name, price, quantity) = parse_item(item)?;
        invoice.add_line(name, price, quantity)?;
    }

    let summary = invoice.summary();
    if json {
        return to_json(&summary);
    }

    let mut out = String::new();
    for line in &summary.lines {
        out.push_str(&format!(
            "{:<20} x{:<4} {:>18}  (PPN {})\n",
            line.name,
            line.quantity,
            format_rupiah(line.tax.taxed_price()),
            format_rupiah(line.tax.tax()),
        ));
    }
    out.push_str(&format!("Subtotal   : {}\n", format_rupiah(summary.subtotal)));
    out.push_str(&format!("PPN {:<6} : {}\n", rate.to_string(), format_rupiah(summary.tax)));
    out.push_str(&format!("Total      : {}\n", format_rupiah(summary.total)));
    out.push_str(&format!("Terbilang  : {}", terbilang(summary.total)));
    Ok(out)
}

/// `rupiah config [--write]`
pub fn show_config(
    config: &RupiahConfig,
    path: Option<std::path::PathBuf>,
    write: bool,
    json: bool,
) -> CliResult<String> {
    if write {
        let saved = config.save(path)?;
        return Ok(format!("Config written to {}", saved.display()));
    }

    if json {
        return to_json(config);
    }
    config.to_toml()
}

/// Splits `NAME=PRICE[xQTY]` into its parts. Quantity defaults to 1.
fn parse_item(item: &str) -> CliResult<(String, f64, i64)> {
    let invalid = |reason: &str| CliError::InvalidArgument {
        value: item.to_string(),
        reason: reason.to_string(),
    };

    let (name, rest) = item
        .split_once('=')
        .ok_or_else(|| invalid("expected NAME=PRICE[xQTY]"))?;

    let (price, quantity) = match rest.rsplit_once(|c: char| c == 'x' || c == 'X' || c == '*') {
        Some((price, qty)) => {
            let qty = qty
                .trim()
                .parse::<i64>()
                .map_err(|_| invalid("quantity must be a whole number"))?;
            (price, qty)
        }
        None => (rest, 1),
    };

    Ok((name.trim().to_string(), read_amount(price), quantity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rupiah_core::ValidationError;

    fn exclusive() -> TaxArgs {
        TaxArgs {
            exclusive: true,
            ..TaxArgs::default()
        }
    }

    #[test]
    fn test_tax_inclusive_from_config() {
        let out = tax("Rp 111.000", &TaxArgs::default(), &RupiahConfig::default(), false).unwrap();
        assert_eq!(
            out,
            "Base price : Rp 100.000\nPPN 11%    : Rp 11.000\nTotal      : Rp 111.000"
        );
    }

    #[test]
    fn test_tax_flags_override_config() {
        let args = TaxArgs {
            rate: Some(10.0),
            ..exclusive()
        };
        let out = tax("200000", &args, &RupiahConfig::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["basePrice"], 200_000.0);
        assert_eq!(value["tax"], 20_000.0);
        assert_eq!(value["taxedPrice"], 220_000.0);
    }

    #[test]
    fn test_tax_rejects_negative_amount() {
        let err = tax("-1000", &exclusive(), &RupiahConfig::default(), false).unwrap_err();
        assert!(matches!(err, CliError::Core(CoreError::Validation(_))));
    }

    #[test]
    fn test_format_and_words() {
        assert_eq!(format("1500000", false).unwrap(), "Rp 1.500.000");
        assert_eq!(format("-1500", false).unwrap(), "Rp -1.500");
        assert_eq!(words("Rp 1.500", false).unwrap(), "Seribu Lima Ratus Rupiah");
    }

    #[test]
    fn test_words_out_of_range() {
        let err = words("1000000000000000", false).unwrap_err();
        assert!(matches!(err, CliError::Core(CoreError::OutOfRange { .. })));
    }

    #[test]
    fn test_parse_outputs() {
        assert_eq!(parse("Rp 1.500.000", false).unwrap(), "1500000");
        assert_eq!(parse("abc", false).unwrap(), "0");

        let out = parse("(Rp 50.000)", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["amount"], -50_000);
    }

    #[test]
    fn test_phone_uses_config_country() {
        let mut config = RupiahConfig::default();
        assert_eq!(phone("0812-3456-7890", None, &config, false).unwrap(), "+6281234567890");

        config.phone.country_code = "65".to_string();
        assert_eq!(phone("091234567", None, &config, false).unwrap(), "+6591234567");
        assert_eq!(phone("091234567", Some("+62"), &config, false).unwrap(), "+6291234567");
    }

    #[test]
    fn test_phone_rejects_bad_country() {
        let err = phone("0812", Some("abc"), &RupiahConfig::default(), false).unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(CoreError::Validation(ValidationError::InvalidFormat { .. }))
        ));
    }

    #[test]
    fn test_parse_item() {
        assert_eq!(parse_item("Laptop=5000000").unwrap(), ("Laptop".to_string(), 5_000_000.0, 1));
        assert_eq!(parse_item("Mouse=Rp 150.000x2").unwrap(), ("Mouse".to_string(), 150_000.0, 2));
        assert_eq!(parse_item("Cable=25000*3").unwrap(), ("Cable".to_string(), 25_000.0, 3));

        assert!(parse_item("Laptop").is_err());
        assert!(parse_item("Mouse=150000xtwo").is_err());
    }

    #[test]
    fn test_invoice_text() {
        let items = vec!["Product A=100000".to_string(), "Product B=250000".to_string()];
        let out = invoice(&items, &exclusive(), &RupiahConfig::default(), false).unwrap();

        assert!(out.contains("Subtotal   : Rp 350.000"));
        assert!(out.contains("PPN 11%    : Rp 38.500"));
        assert!(out.contains("Total      : Rp 388.500"));
        assert!(out.ends_with(
            "Terbilang  : Tiga Ratus Delapan Puluh Delapan Ribu Lima Ratus Rupiah"
        ));
    }

    #[test]
    fn test_invoice_json() {
        let items = vec!["Mouse=150000x2".to_string()];
        let out = invoice(&items, &exclusive(), &RupiahConfig::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["subtotal"], 300_000.0);
        assert_eq!(value["tax"], 33_000.0);
        assert_eq!(value["lines"][0]["quantity"], 2);
    }

    #[test]
    fn test_invoice_rejects_zero_quantity() {
        let items = vec!["Freebie=1000x0".to_string()];
        let err = invoice(&items, &exclusive(), &RupiahConfig::default(), false).unwrap_err();
        assert!(matches!(err, CliError::Core(CoreError::InvalidInvoiceLine { .. })));
    }

    #[test]
    fn test_config_show_and_write() {
        let config = RupiahConfig::default();
        assert!(show_config(&config, None, false, false).unwrap().contains("[tax]"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rupiah.toml");
        let out = show_config(&config, Some(path.clone()), true, false).unwrap();

        assert!(out.starts_with("Config written to"));
        assert!(path.exists());
    }
}
