//! Income tax calculation.
//!
//! [`TaxCalculator`] validates the request, applies the personal deduction and
//! capped allowances, then accumulates tax band by band.

pub mod calculator;
pub mod config;

pub use calculator::{TaxCalculator, ValidationError, compute_tax};
pub use config::{ConfigError, TaxCalculatorConfig};
