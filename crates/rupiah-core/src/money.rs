//! # Money Module
//!
//! Provides the [`Amount`] value returned by the Rupiah parser and the single
//! rounding rule used by tax calculation and formatting.
//!
//! ## Why Two Representations?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHAT A RUPIAH STRING CAN HOLD                                          │
//! │                                                                         │
//! │  "Rp 1.000.000"  ──► whole rupiah, no decimal separator                 │
//! │                      Amount::Int(1000000)                               │
//! │                                                                         │
//! │  "Rp 1.500,75"   ──► decimal comma present                              │
//! │                      Amount::Float(1500.75)                             │
//! │                                                                         │
//! │  The caller can tell which one it got, and still ask for an f64        │
//! │  with `as_f64()` when it just wants to do arithmetic.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding
//! IDR has no minor unit in everyday use, so every derived money value is
//! rounded to whole rupiah with **round half away from zero**:
//! `0.5 → 1`, `2.5 → 3`, `-2.5 → -3`.
//!
//! ## Usage
//! ```rust
//! use rupiah_core::money::{round_rupiah, Amount};
//!
//! assert_eq!(round_rupiah(1500.75), 1501.0);
//! assert_eq!(round_rupiah(2.5), 3.0);
//!
//! let amount = Amount::from(-50_000_i64);
//! assert!(amount.is_integer());
//! assert_eq!(amount.as_f64(), -50_000.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;
use ts_rs::TS;

// =============================================================================
// Rounding
// =============================================================================

/// Rounds a money value to whole rupiah, half away from zero.
///
/// NaN and infinities pass through unchanged.
///
/// ## Example
/// ```rust
/// use rupiah_core::money::round_rupiah;
///
/// assert_eq!(round_rupiah(0.5), 1.0);
/// assert_eq!(round_rupiah(-0.5), -1.0);
/// assert_eq!(round_rupiah(11055.055), 11055.0);
/// ```
#[inline]
pub fn round_rupiah(value: f64) -> f64 {
    value.round()
}

// =============================================================================
// Amount Type
// =============================================================================

/// A numeric amount that is either a whole number or a decimal.
///
/// ## Design Decisions
/// - **Int(i64)**: no decimal separator was present in the source text
/// - **Float(f64)**: a decimal separator was present (even `"1.500,00"`)
/// - **Untagged serde**: serializes as a plain JSON number
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Customer form: "Rp 1.500.000"                                          │
/// │        │                                                                │
/// │        ▼                                                                │
/// │  parse_rupiah() ──► Amount::Int(1500000)                                │
/// │        │                                                                │
/// │        ▼                                                                │
/// │  amount.as_f64() ──► compute_tax() ──► format_rupiah() / terbilang()   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Amount {
    /// Whole number.
    Int(i64),
    /// Number with a fractional part.
    Float(f64),
}

impl Amount {
    /// Zero amount.
    #[inline]
    pub const fn zero() -> Self {
        Amount::Int(0)
    }

    /// Returns the value as `f64` for arithmetic.
    ///
    /// ## Example
    /// ```rust
    /// use rupiah_core::money::Amount;
    ///
    /// assert_eq!(Amount::Int(1500).as_f64(), 1500.0);
    /// assert_eq!(Amount::Float(1500.75).as_f64(), 1500.75);
    /// ```
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Amount::Int(n) => n as f64,
            Amount::Float(f) => f,
        }
    }

    /// Checks if this is the whole-number variant.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Amount::Int(_))
    }

    /// Checks if the value is zero (either variant).
    #[inline]
    pub fn is_zero(&self) -> bool {
        match *self {
            Amount::Int(n) => n == 0,
            Amount::Float(f) => f == 0.0,
        }
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        match *self {
            Amount::Int(n) => n < 0,
            Amount::Float(f) => f < 0.0,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Default amount is zero.
impl Default for Amount {
    fn default() -> Self {
        Amount::zero()
    }
}

/// Plain number display (`1500`, `1500.75`, `-50000`).
///
/// ## Note
/// This is not a currency rendering. Use `format_rupiah` for that.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Int(n) => write!(f, "{}", n),
            Amount::Float(x) => write!(f, "{}", x),
        }
    }
}

impl Neg for Amount {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        match self {
            // i64::MIN has no positive counterpart
            Amount::Int(n) => n
                .checked_neg()
                .map(Amount::Int)
                .unwrap_or(Amount::Float(-(n as f64))),
            Amount::Float(f) => Amount::Float(-f),
        }
    }
}

impl From<i64> for Amount {
    #[inline]
    fn from(n: i64) -> Self {
        Amount::Int(n)
    }
}

impl From<i32> for Amount {
    #[inline]
    fn from(n: i32) -> Self {
        Amount::Int(n as i64)
    }
}

impl From<u32> for Amount {
    #[inline]
    fn from(n: u32) -> Self {
        Amount::Int(n as i64)
    }
}

impl From<f64> for Amount {
    #[inline]
    fn from(f: f64) -> Self {
        Amount::Float(f)
    }
}

impl From<Amount> for f64 {
    #[inline]
    fn from(amount: Amount) -> Self {
        amount.as_f64()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
