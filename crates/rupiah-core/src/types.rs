//! # Domain Types
//!
//! Core value types shared by the tax calculator and its callers.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    TaxRate      │   │    TaxMode      │   │     TaxResult       │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  percent (f64)  │   │  Exclusive      │   │  base_price         │   │
//! │  │  PPN = 11%      │   │  Inclusive      │   │  tax                │   │
//! │  └─────────────────┘   └─────────────────┘   │  taxed_price        │   │
//! │                                              └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::money::round_rupiah;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented as a percentage.
///
/// ## Why a Percentage?
/// Indonesian PPN is published as a whole percentage (11%), and callers pass
/// rates the same way. Basis points are still accepted through
/// [`TaxRate::from_bps`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(f64);

impl TaxRate {
    /// Indonesian PPN (Pajak Pertambahan Nilai) at 11%.
    pub const PPN: TaxRate = TaxRate(11.0);

    /// Creates a tax rate from a percentage (11.0 = 11%).
    #[inline]
    pub const fn from_percentage(pct: f64) -> Self {
        TaxRate(pct)
    }

    /// Creates a tax rate from basis points (1100 = 11%).
    #[inline]
    pub fn from_bps(bps: u32) -> Self {
        TaxRate(bps as f64 / 100.0)
    }

    /// Returns the rate as a percentage.
    #[inline]
    pub const fn percentage(&self) -> f64 {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0.0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Tax owed on a price that does not include tax yet.
    ///
    /// ## Example
    /// ```rust
    /// use rupiah_core::types::TaxRate;
    ///
    /// assert_eq!(TaxRate::PPN.tax_on(100_000.0), 11_000.0);
    /// assert_eq!(TaxRate::PPN.tax_on(100_500.5), 11_055.0); // rounded
    /// ```
    pub fn tax_on(&self, base_price: f64) -> f64 {
        round_rupiah(base_price * (self.0 / 100.0))
    }

    /// Extracts the price before tax from a tax-inclusive total.
    ///
    /// Formula: `base = total / (1 + rate / 100)`, rounded to whole rupiah.
    ///
    /// ## Example
    /// ```rust
    /// use rupiah_core::types::TaxRate;
    ///
    /// assert_eq!(TaxRate::PPN.base_from_inclusive(111_000.0), 100_000.0);
    /// ```
    pub fn base_from_inclusive(&self, total: f64) -> f64 {
        round_rupiah(total / (1.0 + (self.0 / 100.0)))
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::PPN
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Tax Mode
// =============================================================================

/// Whether a given total already includes tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum TaxMode {
    /// Tax is added on top of the price.
    /// Display: Rp 100.000 + Rp 11.000 PPN = Rp 111.000
    Exclusive,

    /// Tax is included in the displayed price (the usual shelf price).
    /// Display: Rp 111.000 (includes Rp 11.000 PPN)
    Inclusive,
}

impl TaxMode {
    /// Checks if this mode treats the input total as tax-inclusive.
    #[inline]
    pub const fn is_inclusive(&self) -> bool {
        matches!(self, TaxMode::Inclusive)
    }
}

/// Shelf prices in Indonesia are quoted with PPN included.
impl Default for TaxMode {
    fn default() -> Self {
        TaxMode::Inclusive
    }
}

/// `true` means the total already includes tax.
impl From<bool> for TaxMode {
    fn from(included_tax: bool) -> Self {
        if included_tax {
            TaxMode::Inclusive
        } else {
            TaxMode::Exclusive
        }
    }
}

impl fmt::Display for TaxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxMode::Exclusive => write!(f, "exclusive"),
            TaxMode::Inclusive => write!(f, "inclusive"),
        }
    }
}

impl FromStr for TaxMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exclusive" | "excluded" | "exclude" => Ok(TaxMode::Exclusive),
            "inclusive" | "included" | "include" => Ok(TaxMode::Inclusive),
            other => Err(format!("Unknown tax mode: {}", other)),
        }
    }
}

// =============================================================================
// Tax Result
// =============================================================================

/// The outcome of a PPN calculation.
///
/// ## Invariants
/// - `taxed_price == base_price + tax` (exactly, for finite inputs)
/// - Exclusive mode: `tax == round(base_price * rate / 100)`
/// - Immutable: only the tax calculator builds one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxResult {
    base_price: f64,
    tax: f64,
    taxed_price: f64,
}

impl TaxResult {
    #[inline]
    pub(crate) const fn new(base_price: f64, tax: f64, taxed_price: f64) -> Self {
        TaxResult {
            base_price,
            tax,
            taxed_price,
        }
    }

    /// Price before tax.
    #[inline]
    pub const fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Tax amount.
    #[inline]
    pub const fn tax(&self) -> f64 {
        self.tax
    }

    /// Price including tax.
    #[inline]
    pub const fn taxed_price(&self) -> f64 {
        self.taxed_price
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
