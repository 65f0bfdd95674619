pub mod calculations;
pub mod models;

pub use calculations::{ConfigError, TaxCalculator, TaxCalculatorConfig, ValidationError, compute_tax};
pub use models::*;
