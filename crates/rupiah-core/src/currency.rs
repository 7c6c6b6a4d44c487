//! # Currency Module
//!
//! Rupiah display formatting and its inverse, the Indonesian-convention parser.
//!
//! ## Indonesian Number Convention
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   Rp 1.500.000,75                                                       │
//! │   ── ─ ─── ─── ──                                                       │
//! │   │  │  │   │   └── decimal part (after COMMA)                          │
//! │   │  └──┴───┴────── thousands groups (separated by DOT)                 │
//! │   └──────────────── currency prefix                                     │
//! │                                                                         │
//! │   format_rupiah:  1500000.75    ──► "Rp 1.500.001"   (no decimals)      │
//! │   parse_rupiah:   "Rp 1.500,75" ──► Amount::Float(1500.75)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Parse-or-Zero
//! The parser never fails. Anything it cannot read as a number becomes `0`.

use crate::money::{round_rupiah, Amount};

/// Display prefix for every formatted amount.
pub const RUPIAH_PREFIX: &str = "Rp ";

// =============================================================================
// Formatting
// =============================================================================

/// Formats an amount as Indonesian Rupiah.
///
/// ## Rules
/// - Rounded to whole rupiah (half away from zero), no decimal separator
/// - Thousands grouped with `.`
/// - Sign kept before the digits: `"Rp -50.000"`
/// - Non-finite input is rendered as-is: `"Rp NaN"`, `"Rp inf"`
///
/// ## Example
/// ```rust
/// use rupiah_core::currency::format_rupiah;
///
/// assert_eq!(format_rupiah(1_000_000.0), "Rp 1.000.000");
/// assert_eq!(format_rupiah(1500.75), "Rp 1.501");
/// assert_eq!(format_rupiah(-50_000.0), "Rp -50.000");
/// ```
pub fn format_rupiah(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{}{}", RUPIAH_PREFIX, amount);
    }

    let rounded = round_rupiah(amount);
    // `{:.0}` never switches to exponent notation, even past i64::MAX
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };

    format!("{}{}{}", RUPIAH_PREFIX, sign, group_thousands(&digits))
}

/// Inserts `.` between every group of three digits, counting from the right.
///
/// ## Example
/// ```rust
/// use rupiah_core::currency::group_thousands;
///
/// assert_eq!(group_thousands("1500000"), "1.500.000");
/// assert_eq!(group_thousands("999"), "999");
/// ```
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    grouped
}

// =============================================================================
// Parsing
// =============================================================================

/// Input accepted by [`parse_rupiah`]: text, or an already-numeric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawAmount<'a> {
    /// Text to parse, e.g. `"Rp 1.500,75"`.
    Text(&'a str),
    /// Already a number; returned unchanged.
    Number(Amount),
}

impl<'a> From<&'a str> for RawAmount<'a> {
    fn from(s: &'a str) -> Self {
        RawAmount::Text(s)
    }
}

impl<'a> From<&'a String> for RawAmount<'a> {
    fn from(s: &'a String) -> Self {
        RawAmount::Text(s.as_str())
    }
}

impl From<Amount> for RawAmount<'_> {
    fn from(amount: Amount) -> Self {
        RawAmount::Number(amount)
    }
}

impl From<i64> for RawAmount<'_> {
    fn from(n: i64) -> Self {
        RawAmount::Number(Amount::Int(n))
    }
}

impl From<i32> for RawAmount<'_> {
    fn from(n: i32) -> Self {
        RawAmount::Number(Amount::from(n))
    }
}

impl From<f64> for RawAmount<'_> {
    fn from(f: f64) -> Self {
        RawAmount::Number(Amount::Float(f))
    }
}

/// Parses an Indonesian-formatted currency string back into a number.
///
/// ## Algorithm
/// 1. Numbers are returned unchanged
/// 2. Trim; empty → `0`
/// 3. Negative when the text contains `-`, or contains both `(` and `)`
/// 4. Keep only digits, `.` and `,`
/// 5. Drop `.` (thousands), turn `,` into the decimal point
/// 6. Not a number → `0`; decimal point present → `Float`, else `Int`
///
/// Integer strings too long for `i64` come back as `Float`.
///
/// ## Example
/// ```rust
/// use rupiah_core::currency::parse_rupiah;
/// use rupiah_core::money::Amount;
///
/// assert_eq!(parse_rupiah("Rp 1.000.000"), Amount::Int(1_000_000));
/// assert_eq!(parse_rupiah("1.500,75"), Amount::Float(1500.75));
/// assert_eq!(parse_rupiah("(Rp 50.000)"), Amount::Int(-50_000));
/// assert_eq!(parse_rupiah(""), Amount::Int(0));
/// assert_eq!(parse_rupiah(150_000_i64), Amount::Int(150_000));
/// ```
pub fn parse_rupiah<'a>(value: impl Into<RawAmount<'a>>) -> Amount {
    let text = match value.into() {
        RawAmount::Number(amount) => return amount,
        RawAmount::Text(text) => text.trim(),
    };

    if text.is_empty() {
        return Amount::zero();
    }

    let negative = text.contains('-') || (text.contains('(') && text.contains(')'));

    let normalized: String = text
        .chars()
        .filter_map(|c| match c {
            '0'..='9' => Some(c),
            ',' => Some('.'),
            // thousands dots, "Rp", spaces, signs, parentheses
            _ => None,
        })
        .collect();

    let Some(amount) = read_number(&normalized) else {
        return Amount::zero();
    };

    if negative {
        -amount
    } else {
        amount
    }
}

/// [`parse_rupiah`] straight to `f64`.
#[inline]
pub fn parse_rupiah_f64<'a>(value: impl Into<RawAmount<'a>>) -> f64 {
    parse_rupiah(value).as_f64()
}

/// Reads a string of digits with at most one `.` as a number.
fn read_number(s: &str) -> Option<Amount> {
    if !s.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    if s.contains('.') {
        // More than one decimal comma is not a number
        return s.parse::<f64>().ok().map(Amount::Float);
    }

    match s.parse::<i64>() {
        Ok(n) => Some(Amount::Int(n)),
        Err(_) => s.parse::<f64>().ok().map(Amount::Float),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
