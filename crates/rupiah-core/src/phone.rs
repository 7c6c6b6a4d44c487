//! # Phone Module
//!
//! Normalizes loosely written phone numbers to E.164 (`+<country><subscriber>`).
//!
//! ## Decision Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "0812-3456-7890"                                                       │
//! │        │  keep digits and '+'                                           │
//! │        ▼                                                                │
//! │  "081234567890"                                                         │
//! │        │                                                                │
//! │        ├── starts with '+'?            → return as-is                   │
//! │        ├── starts with '0'?            → '0' becomes country code       │
//! │        ├── starts with country code?   → keep                           │
//! │        └── otherwise (local number)    → prepend country code           │
//! │        ▼                                                                │
//! │  "+6281234567890"                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No length or region validation is done: the output is only as meaningful
//! as the input.

/// Indonesian country calling code.
pub const DEFAULT_COUNTRY_CODE: &str = "62";

/// Normalizes an Indonesian phone number to E.164.
///
/// ## Example
/// ```rust
/// use rupiah_core::phone::to_e164;
///
/// assert_eq!(to_e164("081234567890"), "+6281234567890");
/// assert_eq!(to_e164("0812-3456-7890"), "+6281234567890");
/// assert_eq!(to_e164("+6281234567890"), "+6281234567890");
/// assert_eq!(to_e164(""), "");
/// ```
#[inline]
pub fn to_e164(phone: &str) -> String {
    to_e164_with_country(phone, DEFAULT_COUNTRY_CODE)
}

/// Normalizes a phone number to E.164 for the given country code (no `+`).
///
/// Input with no digits gives `""`. A lone `"0"` is a trunk prefix with no
/// subscriber number and still becomes the bare `"+<country_code>"`; it is
/// not treated as empty input.
///
/// ## Example
/// ```rust
/// use rupiah_core::phone::to_e164_with_country;
///
/// assert_eq!(to_e164_with_country("081234567890", "1"), "+181234567890");
/// assert_eq!(to_e164_with_country("0812345678", "44"), "+44812345678");
/// assert_eq!(to_e164_with_country("0", "62"), "+62");
/// ```
pub fn to_e164_with_country(phone: &str, country_code: &str) -> String {
    let cleaned: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if cleaned.is_empty() {
        return String::new();
    }

    if cleaned.starts_with('+') {
        return cleaned;
    }

    let digits = cleaned.replace('+', "");

    let national = if let Some(subscriber) = digits.strip_prefix('0') {
        format!("{}{}", country_code, subscriber)
    } else if digits.starts_with(country_code) {
        digits
    } else {
        format!("{}{}", country_code, digits)
    };

    format!("+{}", national)
}

// =============================================================================
// Unit Tests
// =============================================================================
