//! Progressive personal income tax calculation.
//!
//! The calculator turns total income, withholding and a list of allowances
//! into the tax owed per band and the net amount still due.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Withholding must lie within `[0, total income]` |
//! | 2    | Taxable income = total income - personal deduction (60,000) |
//! | 3    | K-receipt deduction, capped at 50,000 |
//! | 4    | Donation deduction, capped at 100,000 |
//! | 5    | Taxable income = Step 2 - Step 3 - Step 4 (no floor) |
//! | 6    | Marginal tax per band of the schedule |
//! | 7    | Total tax = sum of Step 6 |
//! | 8    | Net tax = Step 7 - withholding (negative means refund) |
//!
//! Allowances with an unrecognized type are skipped. When the same type
//! appears more than once, the last entry replaces the earlier ones.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::Allowance;
//! use tax_core::calculations::TaxCalculator;
//!
//! let calculator = TaxCalculator::default();
//! let result = calculator
//!     .compute_tax(
//!         dec!(1200000),
//!         dec!(20000),
//!         &[Allowance::donation(dec!(50000))],
//!     )
//!     .unwrap();
//!
//! assert_eq!(result.taxable_income, dec!(1090000));
//! assert_eq!(result.tax_levels[1].tax, dec!(35000));
//! assert_eq!(result.tax_levels[2].tax, dec!(75000));
//! assert_eq!(result.tax_levels[3].tax, dec!(18000));
//! assert_eq!(result.total_tax, dec!(128000));
//! assert_eq!(result.net_tax, dec!(108000));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::calculations::config::{ConfigError, TaxCalculatorConfig};
use crate::{Allowance, AllowanceKind, TaxBracket, TaxCalculation, TaxCalculationInput, TaxLevel};

/// Reasons a calculation request is rejected before any tax is computed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Withholding was negative or larger than total income.
    #[error("withholding must be between 0 and total income {total_income}, got {withholding}")]
    WithholdingOutOfRange {
        withholding: Decimal,
        total_income: Decimal,
    },

    /// A k-receipt allowance carried a negative amount.
    #[error("k-receipt amount must not be negative, got {0}")]
    NegativeKReceipt(Decimal),

    /// A donation allowance carried a negative amount.
    #[error("donation amount must not be negative, got {0}")]
    NegativeDonation(Decimal),
}

/// Capped deductions collected from the allowance list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct AllowanceDeductions {
    k_receipt: Decimal,
    donation: Decimal,
}

/// Calculator for personal income tax.
///
/// Holds the deduction constants and the bracket schedule. It carries no
/// mutable state, so one instance can serve any number of callers.
#[derive(Debug, Clone)]
pub struct TaxCalculator {
    config: TaxCalculatorConfig,
    schedule: &'static [TaxBracket],
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self {
            config: TaxCalculatorConfig::default(),
            schedule: TaxBracket::standard_schedule(),
        }
    }
}

impl TaxCalculator {
    /// Creates a calculator bound to the given deduction constants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any configured amount is negative.
    pub fn new(config: TaxCalculatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            schedule: TaxBracket::standard_schedule(),
        })
    }

    pub fn config(&self) -> &TaxCalculatorConfig {
        &self.config
    }

    /// Runs [`compute_tax`](Self::compute_tax) on a bundled input.
    pub fn calculate(
        &self,
        input: &TaxCalculationInput,
    ) -> Result<TaxCalculation, ValidationError> {
        self.compute_tax(input.total_income, input.withholding, &input.allowances)
    }

    /// Computes net tax and the per-band breakdown.
    ///
    /// All inputs are validated before any tax is computed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if:
    /// - withholding is negative or exceeds total income
    /// - a k-receipt or donation allowance has a negative amount
    pub fn compute_tax(
        &self,
        total_income: Decimal,
        withholding: Decimal,
        allowances: &[Allowance],
    ) -> Result<TaxCalculation, ValidationError> {
        debug!(
            total_income = %total_income,
            withholding = %withholding,
            allowances = allowances.len(),
            "computing income tax"
        );

        self.validate_withholding(total_income, withholding)
            .and_then(|()| self.allowance_deductions(allowances))
            .inspect_err(|error| warn!(%error, "rejected tax calculation input"))
            .map(|deductions| self.settle(total_income, withholding, deductions))
    }

    /// Applies deductions and the schedule to already validated input.
    fn settle(
        &self,
        total_income: Decimal,
        withholding: Decimal,
        deductions: AllowanceDeductions,
    ) -> TaxCalculation {
        let taxable_income = self.taxable_income(total_income, deductions);
        let tax_levels = self.tax_levels(taxable_income);
        let total_tax = self.total_tax(&tax_levels);
        let net_tax = total_tax - withholding;

        if net_tax < Decimal::ZERO {
            info!(net_tax = %net_tax, "withholding exceeds tax due; refund owed");
        }
        debug!(
            taxable_income = %taxable_income,
            total_tax = %total_tax,
            net_tax = %net_tax,
            "income tax computed"
        );

        TaxCalculation {
            taxable_income,
            k_receipt_deduction: deductions.k_receipt,
            donation_deduction: deductions.donation,
            total_tax,
            withholding,
            net_tax,
            tax_levels,
        }
    }

    fn validate_withholding(
        &self,
        total_income: Decimal,
        withholding: Decimal,
    ) -> Result<(), ValidationError> {
        if withholding < Decimal::ZERO || withholding > total_income {
            return Err(ValidationError::WithholdingOutOfRange {
                withholding,
                total_income,
            });
        }
        Ok(())
    }

    /// Scans the allowances once, capping each recognized amount.
    ///
    /// A repeated type overwrites the earlier deduction rather than adding to it.
    fn allowance_deductions(
        &self,
        allowances: &[Allowance],
    ) -> Result<AllowanceDeductions, ValidationError> {
        let mut k_receipt: Option<Decimal> = None;
        let mut donation: Option<Decimal> = None;

        for allowance in allowances {
            let Some(kind) = allowance.kind() else {
                debug!(
                    allowance_type = %allowance.allowance_type,
                    "skipping unrecognized allowance type"
                );
                continue;
            };

            let (slot, cap) = match kind {
                AllowanceKind::KReceipt => {
                    if allowance.amount < Decimal::ZERO {
                        return Err(ValidationError::NegativeKReceipt(allowance.amount));
                    }
                    (&mut k_receipt, self.config.k_receipt_cap)
                }
                AllowanceKind::Donation => {
                    if allowance.amount < Decimal::ZERO {
                        return Err(ValidationError::NegativeDonation(allowance.amount));
                    }
                    (&mut donation, self.config.donation_cap)
                }
            };

            if let Some(previous) = slot.replace(allowance.amount.min(cap)) {
                warn!(
                    kind = %kind,
                    previous = %previous,
                    amount = %allowance.amount,
                    "duplicate allowance replaces earlier entry"
                );
            }
        }

        Ok(AllowanceDeductions {
            k_receipt: k_receipt.unwrap_or_default(),
            donation: donation.unwrap_or_default(),
        })
    }

    fn taxable_income(
        &self,
        total_income: Decimal,
        deductions: AllowanceDeductions,
    ) -> Decimal {
        total_income - self.config.personal_deduction - deductions.k_receipt - deductions.donation
    }

    /// One entry per band, zero for bands the income does not reach.
    fn tax_levels(
        &self,
        taxable_income: Decimal,
    ) -> Vec<TaxLevel> {
        self.schedule
            .iter()
            .map(|bracket| TaxLevel {
                level: bracket.label.to_string(),
                tax: bracket.tax_on(taxable_income),
            })
            .collect()
    }

    fn total_tax(
        &self,
        tax_levels: &[TaxLevel],
    ) -> Decimal {
        tax_levels.iter().map(|level| level.tax).sum()
    }
}

/// Computes tax with the standard deduction constants.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::compute_tax;
///
/// let result = compute_tax(dec!(500000), dec!(0), &[]).unwrap();
///
/// assert_eq!(result.taxable_income, dec!(440000));
/// assert_eq!(result.net_tax, dec!(29000));
/// ```
pub fn compute_tax(
    total_income: Decimal,
    withholding: Decimal,
    allowances: &[Allowance],
) -> Result<TaxCalculation, ValidationError> {
    TaxCalculator::default().compute_tax(total_income, withholding, allowances)
}
