use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One band of the progressive schedule.
///
/// `min_income` is exclusive and `max_income` inclusive, so a taxable income of
/// exactly 150,000 sits wholly in the first band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxBracket {
    pub label: &'static str,
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
}

static STANDARD_SCHEDULE: [TaxBracket; 5] = [
    TaxBracket {
        label: "0-150,000",
        min_income: dec!(0),
        max_income: Some(dec!(150000)),
        tax_rate: dec!(0),
    },
    TaxBracket {
        label: "150,001-500,000",
        min_income: dec!(150000),
        max_income: Some(dec!(500000)),
        tax_rate: dec!(0.10),
    },
    TaxBracket {
        label: "500,001-1,000,000",
        min_income: dec!(500000),
        max_income: Some(dec!(1000000)),
        tax_rate: dec!(0.15),
    },
    TaxBracket {
        label: "1,000,001-2,000,000",
        min_income: dec!(1000000),
        max_income: Some(dec!(2000000)),
        tax_rate: dec!(0.20),
    },
    TaxBracket {
        label: "2,000,001 and above",
        min_income: dec!(2000000),
        max_income: None,
        tax_rate: dec!(0.35),
    },
];

impl TaxBracket {
    /// The five bands in ascending order.
    pub fn standard_schedule() -> &'static [TaxBracket] {
        &STANDARD_SCHEDULE
    }

    /// Tax owed on the slice of `taxable_income` that falls inside this band.
    ///
    /// Income at or below `min_income` (including negative income) owes nothing here.
    pub fn tax_on(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        if taxable_income <= self.min_income {
            return Decimal::ZERO;
        }

        let upper = match self.max_income {
            Some(max) => taxable_income.min(max),
            None => taxable_income,
        };

        (upper - self.min_income) * self.tax_rate
    }
}

/// Tax attributed to a single band in a calculation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLevel {
    pub level: String,
    pub tax: Decimal,
}
