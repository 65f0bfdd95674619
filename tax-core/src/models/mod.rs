mod allowance;
mod calculation;
mod tax_bracket;

pub use allowance::{Allowance, AllowanceKind};
pub use calculation::{TaxCalculation, TaxCalculationInput};
pub use tax_bracket::{TaxBracket, TaxLevel};
