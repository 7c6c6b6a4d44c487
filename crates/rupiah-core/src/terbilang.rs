//! # Terbilang Module
//!
//! Spells an amount out in Indonesian words, the way it is written on
//! receipts, invoices and cheques.
//!
//! ## Magnitude Decomposition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  n                         words                                        │
//! │  ─────────────────────     ───────────────────────────────────────────  │
//! │  0 – 11                    lookup ("", Satu, Dua, ... Sepuluh, Sebelas) │
//! │  12 – 19                   words(n − 10) + " Belas"                     │
//! │  20 – 99                   words(n / 10) + " Puluh" [+ words(n % 10)]   │
//! │  100 – 199                 "Seratus" [+ words(n − 100)]                 │
//! │  200 – 999                 words(n / 100) + " Ratus" [+ rest]           │
//! │  1.000 – 1.999             "Seribu" [+ words(n − 1000)]                 │
//! │  2.000 – 999.999           words(n / 10³) + " Ribu" [+ rest]            │
//! │  10⁶ – 10⁹−1               words(n / 10⁶) + " Juta" [+ rest]            │
//! │  10⁹ – 10¹²−1              words(n / 10⁹) + " Miliar" [+ rest]          │
//! │  10¹² – 10¹⁵−1             words(n / 10¹²) + " Triliun" [+ rest]        │
//! │  ≥ 10¹⁵                    not representable (empty)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every branch recurses on a strictly smaller number, so the 0–11 lookup
//! always terminates the recursion. A zero remainder is dropped entirely,
//! never spelled as "Nol".
//!
//! ## Example
//! ```rust
//! use rupiah_core::terbilang::terbilang;
//!
//! assert_eq!(terbilang(150_000.0), "Seratus Lima Puluh Ribu Rupiah");
//! assert_eq!(terbilang(0.0), "Rupiah");
//! ```

use crate::error::{CoreError, CoreResult};
use crate::validation::validate_amount;

/// First amount that can no longer be spelled (one quadrillion).
pub const TERBILANG_LIMIT: u64 = 1_000_000_000_000_000;

/// Currency word appended by [`terbilang`].
pub const CURRENCY_WORD: &str = "Rupiah";

const ANGKA: [&str; 12] = [
    "", "Satu", "Dua", "Tiga", "Empat", "Lima", "Enam", "Tujuh", "Delapan", "Sembilan",
    "Sepuluh", "Sebelas",
];

const RIBU: u64 = 1_000;
const JUTA: u64 = 1_000_000;
const MILIAR: u64 = 1_000_000_000;
const TRILIUN: u64 = 1_000_000_000_000;

/// Spells out an amount followed by `"Rupiah"`.
///
/// ## Rules
/// - Only the integer part is converted (`1500.75` reads as `1500`)
/// - Zero gives just `"Rupiah"`
/// - Negative, non-finite, or ≥ 10¹⁵ amounts cannot be spelled and also give
///   just `"Rupiah"`; use [`try_terbilang`] to get an error instead
///
/// ## Example
/// ```rust
/// use rupiah_core::terbilang::terbilang;
///
/// assert_eq!(terbilang(25.0), "Dua Puluh Lima Rupiah");
/// assert_eq!(terbilang(1500.0), "Seribu Lima Ratus Rupiah");
/// assert_eq!(terbilang(1_000_000.0), "Satu Juta Rupiah");
/// ```
pub fn terbilang(amount: f64) -> String {
    let words = if amount.is_finite() && amount >= 0.0 {
        // Truncation is exact below 2^53; the limit check rejects the rest
        spell_out(amount.trunc() as u64).unwrap_or_default()
    } else {
        String::new()
    };

    with_currency(&words)
}

/// Strict variant of [`terbilang`].
///
/// ## Errors
/// - `ValidationError` for negative or non-finite amounts
/// - `CoreError::OutOfRange` for amounts of 10¹⁵ and above
pub fn try_terbilang(amount: f64) -> CoreResult<String> {
    validate_amount("amount", amount)?;

    let n = amount.trunc();
    if n >= TERBILANG_LIMIT as f64 {
        return Err(CoreError::OutOfRange {
            value: amount,
            limit: TERBILANG_LIMIT,
        });
    }

    Ok(terbilang(amount))
}

/// Spells out a whole number without the currency word.
///
/// Returns `None` at or above [`TERBILANG_LIMIT`]. Zero spells as the empty
/// string.
///
/// ## Example
/// ```rust
/// use rupiah_core::terbilang::spell_out;
///
/// assert_eq!(spell_out(111).as_deref(), Some("Seratus Sebelas"));
/// assert_eq!(spell_out(0).as_deref(), Some(""));
/// assert_eq!(spell_out(1_000_000_000_000_000), None);
/// ```
pub fn spell_out(n: u64) -> Option<String> {
    if n >= TERBILANG_LIMIT {
        return None;
    }

    Some(spell(n))
}

fn with_currency(words: &str) -> String {
    let words = words.trim();
    if words.is_empty() {
        CURRENCY_WORD.to_string()
    } else {
        format!("{} {}", words, CURRENCY_WORD)
    }
}

fn spell(n: u64) -> String {
    match n {
        0..=11 => ANGKA[n as usize].to_string(),
        12..=19 => format!("{} Belas", spell(n - 10)),
        20..=99 => join(format!("{} Puluh", spell(n / 10)), n % 10),
        100..=199 => join("Seratus".to_string(), n - 100),
        200..=999 => join(format!("{} Ratus", spell(n / 100)), n % 100),
        1_000..=1_999 => join("Seribu".to_string(), n - RIBU),
        2_000..=999_999 => join(format!("{} Ribu", spell(n / RIBU)), n % RIBU),
        1_000_000..=999_999_999 => join(format!("{} Juta", spell(n / JUTA)), n % JUTA),
        1_000_000_000..=999_999_999_999 => {
            join(format!("{} Miliar", spell(n / MILIAR)), n % MILIAR)
        }
        1_000_000_000_000..=999_999_999_999_999 => {
            join(format!("{} Triliun", spell(n / TRILIUN)), n % TRILIUN)
        }
        _ => String::new(),
    }
}

/// Appends the remainder's words, or nothing when the remainder is zero.
fn join(head: String, rest: u64) -> String {
    if rest == 0 {
        head
    } else {
        format!("{} {}", head, spell(rest))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers() {
        assert_eq!(terbilang(0.0), "Rupiah");
        assert_eq!(terbilang(1.0), "Satu Rupiah");
        assert_eq!(terbilang(10.0), "Sepuluh Rupiah");
        assert_eq!(terbilang(11.0), "Sebelas Rupiah");
        assert_eq!(terbilang(12.0), "Dua Belas Rupiah");
        assert_eq!(terbilang(19.0), "Sembilan Belas Rupiah");
    }

    #[test]
    fn test_tens_and_hundreds() {
        assert_eq!(terbilang(20.0), "Dua Puluh Rupiah");
        assert_eq!(terbilang(25.0), "Dua Puluh Lima Rupiah");
        assert_eq!(terbilang(99.0), "Sembilan Puluh Sembilan Rupiah");
        assert_eq!(terbilang(100.0), "Seratus Rupiah");
        assert_eq!(terbilang(110.0), "Seratus Sepuluh Rupiah");
        assert_eq!(terbilang(111.0), "Seratus Sebelas Rupiah");
        assert_eq!(terbilang(115.0), "Seratus Lima Belas Rupiah");
        assert_eq!(terbilang(200.0), "Dua Ratus Rupiah");
        assert_eq!(terbilang(305.0), "Tiga Ratus Lima Rupiah");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(terbilang(1_000.0), "Seribu Rupiah");
        assert_eq!(terbilang(1_001.0), "Seribu Satu Rupiah");
        assert_eq!(terbilang(1_500.0), "Seribu Lima Ratus Rupiah");
        assert_eq!(terbilang(2_000.0), "Dua Ribu Rupiah");
        assert_eq!(terbilang(11_000.0), "Sebelas Ribu Rupiah");
        assert_eq!(terbilang(12_000.0), "Dua Belas Ribu Rupiah");
        assert_eq!(terbilang(25_000.0), "Dua Puluh Lima Ribu Rupiah");
        assert_eq!(terbilang(100_000.0), "Seratus Ribu Rupiah");
        assert_eq!(terbilang(150_000.0), "Seratus Lima Puluh Ribu Rupiah");
        assert_eq!(
            terbilang(555_000.0),
            "Lima Ratus Lima Puluh Lima Ribu Rupiah"
        );
    }

    #[test]
    fn test_large_magnitudes() {
        assert_eq!(terbilang(1_000_000.0), "Satu Juta Rupiah");
        assert_eq!(terbilang(1_000_001.0), "Satu Juta Satu Rupiah");
        assert_eq!(
            terbilang(1_665_000.0),
            "Satu Juta Enam Ratus Enam Puluh Lima Ribu Rupiah"
        );
        assert_eq!(terbilang(1_000_000_000.0), "Satu Miliar Rupiah");
        assert_eq!(
            terbilang(1_500_000_000.0),
            "Satu Miliar Lima Ratus Juta Rupiah"
        );
        assert_eq!(terbilang(1_000_000_000_000.0), "Satu Triliun Rupiah");
        assert_eq!(
            terbilang(2_000_000_000_003.0),
            "Dua Triliun Tiga Rupiah"
        );
    }

    #[test]
    fn test_largest_spellable_amount() {
        let nine = "Sembilan Ratus Sembilan Puluh Sembilan";
        let expected = format!(
            "{nine} Triliun {nine} Miliar {nine} Juta {nine} Ribu {nine} Rupiah"
        );
        assert_eq!(terbilang(999_999_999_999_999.0), expected);
    }

    #[test]
    fn test_fraction_is_truncated() {
        assert_eq!(terbilang(1_500.75), "Seribu Lima Ratus Rupiah");
        assert_eq!(terbilang(0.99), "Rupiah");
    }

    #[test]
    fn test_unspellable_amounts_degrade() {
        assert_eq!(terbilang(1e15), "Rupiah");
        assert_eq!(terbilang(-25.0), "Rupiah");
        assert_eq!(terbilang(f64::NAN), "Rupiah");
        assert_eq!(terbilang(f64::INFINITY), "Rupiah");
    }

    #[test]
    fn test_spell_out() {
        assert_eq!(spell_out(0).as_deref(), Some(""));
        assert_eq!(spell_out(21).as_deref(), Some("Dua Puluh Satu"));
        assert!(spell_out(TERBILANG_LIMIT - 1).is_some());
        assert_eq!(spell_out(TERBILANG_LIMIT), None);
        assert_eq!(spell_out(u64::MAX), None);
    }

    #[test]
    fn test_no_double_spaces() {
        for n in [0_u64, 10, 100, 1_000, 10_000, 100_000, 1_000_000, 101_010_101] {
            let words = spell(n);
            assert!(!words.contains("  "), "double space in {:?}", words);
            assert_eq!(words, words.trim());
        }
    }

    #[test]
    fn test_try_terbilang() {
        assert_eq!(try_terbilang(25.0).unwrap(), "Dua Puluh Lima Rupiah");
        assert!(matches!(
            try_terbilang(1e15),
            Err(CoreError::OutOfRange { .. })
        ));
        assert!(matches!(
            try_terbilang(-1.0),
            Err(CoreError::Validation(_))
        ));
        assert!(try_terbilang(f64::NAN).is_err());
    }
}
