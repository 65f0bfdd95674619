//! Deduction constants bound into a [`TaxCalculator`](super::TaxCalculator).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a calculator is built from an invalid configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The personal deduction must be non-negative.
    #[error("personal deduction must be non-negative, got {0}")]
    NegativePersonalDeduction(Decimal),

    /// The k-receipt cap must be non-negative.
    #[error("k-receipt cap must be non-negative, got {0}")]
    NegativeKReceiptCap(Decimal),

    /// The donation cap must be non-negative.
    #[error("donation cap must be non-negative, got {0}")]
    NegativeDonationCap(Decimal),
}

/// Fixed amounts applied before the bracket schedule.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::TaxCalculatorConfig;
///
/// let config = TaxCalculatorConfig::default();
///
/// assert_eq!(config.personal_deduction, dec!(60000));
/// assert_eq!(config.k_receipt_cap, dec!(50000));
/// assert_eq!(config.donation_cap, dec!(100000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculatorConfig {
    /// Deducted from total income for every taxpayer.
    pub personal_deduction: Decimal,

    /// Largest k-receipt amount that reduces taxable income.
    pub k_receipt_cap: Decimal,

    /// Largest donation amount that reduces taxable income.
    pub donation_cap: Decimal,
}

impl Default for TaxCalculatorConfig {
    fn default() -> Self {
        Self {
            personal_deduction: dec!(60000),
            k_receipt_cap: dec!(50000),
            donation_cap: dec!(100000),
        }
    }
}

impl TaxCalculatorConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for the first negative amount found.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tax_core::calculations::{ConfigError, TaxCalculatorConfig};
    ///
    /// let invalid = TaxCalculatorConfig {
    ///     donation_cap: dec!(-1),
    ///     ..TaxCalculatorConfig::default()
    /// };
    ///
    /// assert_eq!(invalid.validate(), Err(ConfigError::NegativeDonationCap(dec!(-1))));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.personal_deduction < Decimal::ZERO {
            return Err(ConfigError::NegativePersonalDeduction(
                self.personal_deduction,
            ));
        }
        if self.k_receipt_cap < Decimal::ZERO {
            return Err(ConfigError::NegativeKReceiptCap(self.k_receipt_cap));
        }
        if self.donation_cap < Decimal::ZERO {
            return Err(ConfigError::NegativeDonationCap(self.donation_cap));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn validate_accepts_default_config() {
        assert_eq!(TaxCalculatorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validate_accepts_zero_amounts() {
        let config = TaxCalculatorConfig {
            personal_deduction: dec!(0),
            k_receipt_cap: dec!(0),
            donation_cap: dec!(0),
        };

        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_negative_personal_deduction() {
        let config = TaxCalculatorConfig {
            personal_deduction: dec!(-60000),
            ..TaxCalculatorConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativePersonalDeduction(dec!(-60000)))
        );
    }

    #[test]
    fn validate_rejects_negative_k_receipt_cap() {
        let config = TaxCalculatorConfig {
            k_receipt_cap: dec!(-0.01),
            ..TaxCalculatorConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeKReceiptCap(dec!(-0.01)))
        );
    }

    #[test]
    fn validate_rejects_negative_donation_cap() {
        let config = TaxCalculatorConfig {
            donation_cap: dec!(-5),
            ..TaxCalculatorConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeDonationCap(dec!(-5)))
        );
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = TaxCalculatorConfig::default();

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TaxCalculatorConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
    }
}
