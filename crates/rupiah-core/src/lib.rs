//! # rupiah-core: Pure Indonesian Money & Text Utilities
//!
//! This crate is the **heart** of the Rupiah toolkit. It contains all logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rupiah Toolkit Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Callers (rupiah-cli, web handlers, ...)            │   │
//! │  │    config ──► parse input ──► compute ──► render / persist      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rupiah-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │    tax    │  │ currency  │  │ terbilang │  │   phone   │  │   │
//! │  │   │  PPN 11%  │  │ Rp format │  │  words    │  │  E.164    │  │   │
//! │  │   │ TaxResult │  │ Rp parse  │  │  Rupiah   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                 │   │
//! │  │   │   money   │  │  invoice  │  │ validation│                 │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`tax`] - PPN calculation (inclusive / exclusive)
//! - [`currency`] - `"Rp 1.000.000"` formatting and parsing
//! - [`terbilang`] - number to Indonesian words
//! - [`phone`] - E.164 phone normalization
//! - [`money`] - `Amount` value and the rounding rule
//! - [`invoice`] - multi-line invoice totals
//! - [`types`] - `TaxRate`, `TaxMode`, `TaxResult`
//! - [`error`] - Domain error types
//! - [`validation`] - Precondition checks for strict variants
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Files, environment, network and logging live in callers
//! 3. **Degrade, Don't Fail**: lenient operations never error; strict `try_*` ones do
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use rupiah_core::{format_rupiah, parse_rupiah, ppn, terbilang, to_e164};
//!
//! // Customer form input
//! let amount = parse_rupiah("Rp 1.500.000").as_f64();
//! let phone = to_e164("0812-3456-7890");
//!
//! // Price excludes tax
//! let tax = ppn(amount, false);
//!
//! assert_eq!(phone, "+6281234567890");
//! assert_eq!(format_rupiah(tax.taxed_price()), "Rp 1.665.000");
//! assert_eq!(
//!     terbilang(tax.taxed_price()),
//!     "Satu Juta Enam Ratus Enam Puluh Lima Ribu Rupiah"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod currency;
pub mod error;
pub mod invoice;
pub mod money;
pub mod phone;
pub mod tax;
pub mod terbilang;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use rupiah_core::format_rupiah` instead of
// `use rupiah_core::currency::format_rupiah`

pub use currency::{format_rupiah, parse_rupiah, parse_rupiah_f64};
pub use error::{CoreError, CoreResult, ValidationError};
pub use invoice::{Invoice, InvoiceSummary};
pub use money::Amount;
pub use phone::{to_e164, to_e164_with_country, DEFAULT_COUNTRY_CODE};
pub use tax::{compute_tax, ppn, try_compute_tax};
pub use terbilang::{spell_out, terbilang, try_terbilang};
pub use types::*;
