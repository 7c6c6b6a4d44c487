//! # Invoice Module
//!
//! Prices several lines with PPN and sums them.
//!
//! ## Invoice Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_line("Laptop", 5.000.000, 1) ──┐                                   │
//! │  add_line("Mouse",    150.000, 2) ──┼──► lines                          │
//! │                                     │                                   │
//! │  summary()                          ▼                                   │
//! │    for each line: compute_with_mode(unit_price × qty, mode, rate)      │
//! │    subtotal = Σ base_price                                              │
//! │    tax      = Σ tax                                                     │
//! │    total    = Σ taxed_price                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tax is rounded per line, not on the invoice total, so the summary always
//! equals the sum of what each line shows.

use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::tax::compute_with_mode;
use crate::types::{TaxMode, TaxRate, TaxResult};
use crate::validation::{validate_amount, validate_quantity, validate_tax_rate};

/// One priced item on an invoice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    /// Item name as printed.
    pub name: String,

    /// Price of one unit, in the invoice's tax mode.
    pub unit_price: f64,

    /// Number of units (> 0).
    pub quantity: i64,
}

impl InvoiceLine {
    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// A line with its tax breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineTotal {
    pub name: String,
    pub quantity: i64,
    pub tax: TaxResult,
}

/// Totals for a whole invoice.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    pub lines: Vec<InvoiceLineTotal>,
    /// Sum of base prices.
    pub subtotal: f64,
    /// Sum of per-line tax.
    pub tax: f64,
    /// Sum of taxed prices.
    pub total: f64,
}

/// An invoice under construction.
///
/// ## Invariants
/// - Every line has a non-empty name, a finite non-negative unit price and a
///   positive quantity (checked in [`Invoice::add_line`])
/// - All lines share one rate and one tax mode
#[derive(Debug, Clone)]
pub struct Invoice {
    rate: TaxRate,
    mode: TaxMode,
    lines: Vec<InvoiceLine>,
}

impl Invoice {
    /// Creates an empty invoice.
    pub fn new(rate: TaxRate, mode: TaxMode) -> CoreResult<Self> {
        validate_tax_rate(rate)?;

        Ok(Invoice {
            rate,
            mode,
            lines: Vec::new(),
        })
    }

    /// Empty invoice at 11% PPN with the given mode.
    pub fn ppn(mode: TaxMode) -> Self {
        Invoice {
            rate: TaxRate::PPN,
            mode,
            lines: Vec::new(),
        }
    }

    /// Adds a line to the invoice.
    ///
    /// ## Errors
    /// - `ValidationError::Required` if the name is blank
    /// - `CoreError::InvalidInvoiceLine` for a bad price or quantity
    pub fn add_line(
        &mut self,
        name: impl Into<String>,
        unit_price: f64,
        quantity: i64,
    ) -> CoreResult<&mut Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "name".to_string(),
            }
            .into());
        }

        let check =
            validate_amount("unit price", unit_price).and_then(|_| validate_quantity(quantity));
        if let Err(err) = check {
            return Err(CoreError::InvalidInvoiceLine {
                name,
                reason: err.to_string(),
            });
        }

        self.lines.push(InvoiceLine {
            name,
            unit_price,
            quantity,
        });
        Ok(self)
    }

    /// Returns the lines added so far.
    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    /// Returns the tax rate.
    pub fn rate(&self) -> TaxRate {
        self.rate
    }

    /// Returns the tax mode.
    pub fn mode(&self) -> TaxMode {
        self.mode
    }

    /// Checks if the invoice has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Prices every line and sums the results.
    pub fn summary(&self) -> InvoiceSummary {
        let lines: Vec<InvoiceLineTotal> = self
            .lines
            .iter()
            .map(|line| InvoiceLineTotal {
                name: line.name.clone(),
                quantity: line.quantity,
                tax: compute_with_mode(line.line_total(), self.mode, self.rate),
            })
            .collect();

        let (subtotal, tax, total) = lines.iter().fold((0.0, 0.0, 0.0), |acc, line| {
            (
                acc.0 + line.tax.base_price(),
                acc.1 + line.tax.tax(),
                acc.2 + line.tax.taxed_price(),
            )
        });

        InvoiceSummary {
            lines,
            subtotal,
            tax,
            total,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
