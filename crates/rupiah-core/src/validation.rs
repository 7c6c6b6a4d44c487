//! # Validation Module
//!
//! Opt-in precondition checks.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Lenient operations (compute_tax, format_rupiah, terbilang, ...)       │
//! │  └── No checks: NaN / negative values propagate arithmetically         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Strict variants (try_compute_tax, try_terbilang, Invoice)             │
//! │  └── THIS MODULE: reject before computing                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Caller configuration (tax rate, country code from config files)       │
//! │  └── THIS MODULE: reject at load time                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rupiah_core::validation::{validate_amount, validate_country_code};
//!
//! assert!(validate_amount("total", 111_000.0).is_ok());
//! assert!(validate_country_code("62").is_ok());
//! assert!(validate_country_code("+62").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::TaxRate;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest calling code in the ITU-T E.164 plan.
pub const MAX_COUNTRY_CODE_DIGITS: usize = 3;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a money amount.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must be non-negative (zero is allowed)
pub fn validate_amount(field: &str, amount: f64) -> ValidationResult<()> {
    if !amount.is_finite() {
        return Err(ValidationError::MustBeFinite {
            field: field.to_string(),
        });
    }

    if amount < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a tax rate.
///
/// ## Rules
/// - Must be finite
/// - Must be between 0% and 100%
///
/// ## Example
/// ```rust
/// use rupiah_core::types::TaxRate;
/// use rupiah_core::validation::validate_tax_rate;
///
/// assert!(validate_tax_rate(TaxRate::PPN).is_ok());
/// assert!(validate_tax_rate(TaxRate::from_percentage(120.0)).is_err());
/// ```
pub fn validate_tax_rate(rate: TaxRate) -> ValidationResult<()> {
    let pct = rate.percentage();

    if !pct.is_finite() {
        return Err(ValidationError::MustBeFinite {
            field: "tax_rate".to_string(),
        });
    }

    if !(0.0..=100.0).contains(&pct) {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0.0,
            max: 100.0,
        });
    }

    Ok(())
}

/// Validates a quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a country calling code (without the leading `+`).
///
/// ## Rules
/// - Must not be empty
/// - 1 to 3 ASCII digits
pub fn validate_country_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "country_code".to_string(),
        });
    }

    if code.len() > MAX_COUNTRY_CODE_DIGITS || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "country_code".to_string(),
            reason: format!("must be 1-{} digits without '+'", MAX_COUNTRY_CODE_DIGITS),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
