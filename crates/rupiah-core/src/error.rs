//! # Error Types
//!
//! Domain-specific error types for rupiah-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         rupiah-core Errors                              │
//! │                                                                         │
//! │  ┌───────────────────────────┐     ┌───────────────────────────────┐   │
//! │  │        CoreError          │     │       ValidationError         │   │
//! │  │  ───────────────────────  │     │  ───────────────────────────  │   │
//! │  │  OutOfRange (terbilang)   │◄────│  Required                     │   │
//! │  │  InvalidInvoiceLine       │from │  MustBeFinite                 │   │
//! │  │  Validation(..)           │     │  MustBeNonNegative            │   │
//! │  └───────────────────────────┘     │  MustBePositive               │   │
//! │                                    │  OutOfRange / InvalidFormat   │   │
//! │                                    └───────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## When Errors Happen At All
//! The lenient operations (`compute_tax`, `format_rupiah`, `terbilang`,
//! `parse_rupiah`, `to_e164`) never fail: they propagate or degrade.
//! Only the strict `try_*` variants and the invoice builder return these.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Value is beyond what an operation can represent.
    ///
    /// ## When This Occurs
    /// - `try_terbilang` on an amount of one quadrillion (10^15) or more
    #[error("Value {value} is out of range (must be below {limit})")]
    OutOfRange { value: f64, limit: u64 },

    /// An invoice line cannot be priced.
    #[error("Invalid invoice line '{name}': {reason}")]
    InvalidInvoiceLine { name: String, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used by the strict variants and by configuration validation in callers.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    MustBeFinite { field: String },

    /// Value must not be below zero.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Invalid format (e.g., country code with letters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
