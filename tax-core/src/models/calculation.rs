use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Allowance, TaxLevel};

/// Everything a caller supplies for a single calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxCalculationInput {
    pub total_income: Decimal,

    /// Tax already withheld at source. Must lie within `[0, total_income]`.
    pub withholding: Decimal,

    #[serde(default)]
    pub allowances: Vec<Allowance>,
}

/// Result of a tax calculation.
///
/// `tax_levels` always holds one entry per band of the schedule, in ascending
/// order, with unreached bands reported as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxCalculation {
    /// Income after the personal deduction and capped allowances. May be negative.
    pub taxable_income: Decimal,

    /// Capped k-receipt deduction that was applied.
    pub k_receipt_deduction: Decimal,

    /// Capped donation deduction that was applied.
    pub donation_deduction: Decimal,

    /// Sum of the per-band tax before withholding is offset.
    pub total_tax: Decimal,

    pub withholding: Decimal,

    /// Tax still owed after withholding. Negative values are a refund.
    pub net_tax: Decimal,

    pub tax_levels: Vec<TaxLevel>,
}

impl TaxCalculation {
    pub fn is_refund(&self) -> bool {
        self.net_tax < Decimal::ZERO
    }
}
