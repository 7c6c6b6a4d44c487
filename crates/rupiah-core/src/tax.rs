//! # Tax Module
//!
//! PPN (Pajak Pertambahan Nilai) calculation from one known value.
//!
//! ## Two Directions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  EXCLUSIVE (price before tax is known)                                  │
//! │    base  = total                                                        │
//! │    tax   = round(total × rate / 100)          ← rounded                 │
//! │    taxed = base + tax                                                   │
//! │                                                                         │
//! │  INCLUSIVE (shelf price with tax is known)                              │
//! │    taxed = total                                                        │
//! │    base  = round(total / (1 + rate / 100))    ← rounded                 │
//! │    tax   = taxed − base                                                 │
//! │                                                                         │
//! │  Only the derived value is rounded. The given total is never touched.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::CoreResult;
use crate::types::{TaxMode, TaxRate, TaxResult};
use crate::validation::{validate_amount, validate_tax_rate};

/// Computes base price, tax and taxed price from one known total.
///
/// No validation: negative totals and NaN propagate arithmetically.
///
/// ## Example
/// ```rust
/// use rupiah_core::tax::compute_tax;
/// use rupiah_core::types::TaxRate;
///
/// let tax = compute_tax(111_000.0, true, TaxRate::PPN);
/// assert_eq!(tax.base_price(), 100_000.0);
/// assert_eq!(tax.tax(), 11_000.0);
/// assert_eq!(tax.taxed_price(), 111_000.0);
/// ```
pub fn compute_tax(total: f64, included_tax: bool, rate: TaxRate) -> TaxResult {
    compute_with_mode(total, TaxMode::from(included_tax), rate)
}

/// [`compute_tax`] at the standard 11% PPN rate.
///
/// ## Example
/// ```rust
/// use rupiah_core::tax::ppn;
///
/// let tax = ppn(100_000.0, false);
/// assert_eq!(tax.taxed_price(), 111_000.0);
/// ```
#[inline]
pub fn ppn(total: f64, included_tax: bool) -> TaxResult {
    compute_tax(total, included_tax, TaxRate::PPN)
}

/// Same as [`compute_tax`], taking a [`TaxMode`] instead of a flag.
pub fn compute_with_mode(total: f64, mode: TaxMode, rate: TaxRate) -> TaxResult {
    match mode {
        TaxMode::Inclusive => {
            let base_price = rate.base_from_inclusive(total);
            TaxResult::new(base_price, total - base_price, total)
        }
        TaxMode::Exclusive => {
            let tax = rate.tax_on(total);
            TaxResult::new(total, tax, total + tax)
        }
    }
}

/// Strict variant of [`compute_tax`].
///
/// ## Rejects
/// - NaN, infinite or negative totals
/// - Rates outside 0%..=100%
///
/// Nothing is clamped: invalid input is an error, valid input gives exactly
/// what [`compute_tax`] gives.
pub fn try_compute_tax(total: f64, mode: TaxMode, rate: TaxRate) -> CoreResult<TaxResult> {
    validate_amount("total", total)?;
    validate_tax_rate(rate)?;

    Ok(compute_with_mode(total, mode, rate))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_inclusive_price() {
        let tax = compute_tax(111_000.0, true, TaxRate::PPN);
        assert_eq!(tax.base_price(), 100_000.0);
        assert_eq!(tax.tax(), 11_000.0);
        assert_eq!(tax.taxed_price(), 111_000.0);
    }

    #[test]
    fn test_exclusive_price() {
        let tax = compute_tax(100_000.0, false, TaxRate::PPN);
        assert_eq!(tax.base_price(), 100_000.0);
        assert_eq!(tax.tax(), 11_000.0);
        assert_eq!(tax.taxed_price(), 111_000.0);
    }

    #[test]
    fn test_decimal_base_only_tax_is_rounded() {
        // 100500.50 × 11% = 11055.055 → 11055
        let tax = ppn(100_500.5, false);
        assert_eq!(tax.base_price(), 100_500.5);
        assert_eq!(tax.tax(), 11_055.0);
        assert_eq!(tax.taxed_price(), 111_555.5);
    }

    #[test]
    fn test_inclusive_with_other_totals() {
        let tax = ppn(222_000.0, true);
        assert_eq!(tax.base_price(), 200_000.0);
        assert_eq!(tax.tax(), 22_000.0);

        let tax = ppn(555_000.0, true);
        assert_eq!(tax.base_price(), 500_000.0);
        assert_eq!(tax.tax(), 55_000.0);
    }

    #[test]
    fn test_custom_rate() {
        let tax = compute_tax(100_000.0, false, TaxRate::from_percentage(12.0));
        assert_eq!(tax.tax(), 12_000.0);
        assert_eq!(tax.taxed_price(), 112_000.0);

        let tax = compute_tax(100_000.0, false, TaxRate::zero());
        assert_eq!(tax.tax(), 0.0);
        assert_eq!(tax.taxed_price(), 100_000.0);
    }

    #[test]
    fn test_taxed_price_is_sum_of_parts() {
        for total in [0.0, 1.0, 999.0, 12_345.0, 1_000_001.0, 987_654_321.0] {
            for included in [true, false] {
                let tax = ppn(total, included);
                assert_eq!(tax.taxed_price(), tax.base_price() + tax.tax());
            }
        }
    }

    #[test]
    fn test_round_trip_exclusive_then_inclusive() {
        for base in [0.0, 1.0, 7.0, 99.0, 1_234.0, 50_000.0, 123_457.0, 9_999_999.0] {
            let forward = ppn(base, false);
            let back = ppn(forward.taxed_price(), true);
            assert_eq!(back.taxed_price(), forward.taxed_price());
            assert!((back.base_price() - base).abs() <= 1.0);
        }
    }

    #[test]
    fn test_negative_total_propagates() {
        let tax = ppn(-100_000.0, false);
        assert_eq!(tax.base_price(), -100_000.0);
        assert_eq!(tax.tax(), -11_000.0);
        assert_eq!(tax.taxed_price(), -111_000.0);
    }

    #[test]
    fn test_nan_propagates() {
        let tax = ppn(f64::NAN, true);
        assert!(tax.base_price().is_nan());
        assert!(tax.tax().is_nan());
        assert!(tax.taxed_price().is_nan());
    }

    #[test]
    fn test_try_compute_tax() {
        let ok = try_compute_tax(111_000.0, TaxMode::Inclusive, TaxRate::PPN).unwrap();
        assert_eq!(ok, ppn(111_000.0, true));

        assert!(matches!(
            try_compute_tax(-1.0, TaxMode::Exclusive, TaxRate::PPN),
            Err(CoreError::Validation(_))
        ));
        assert!(try_compute_tax(f64::NAN, TaxMode::Exclusive, TaxRate::PPN).is_err());
        assert!(
            try_compute_tax(1_000.0, TaxMode::Exclusive, TaxRate::from_percentage(101.0)).is_err()
        );
    }
}
