use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Deduction categories the calculator recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AllowanceKind {
    KReceipt,
    Donation,
}

impl AllowanceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KReceipt => "k-receipt",
            Self::Donation => "donation",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "k-receipt" => Some(Self::KReceipt),
            "donation" => Some(Self::Donation),
            _ => None,
        }
    }
}

impl std::fmt::Display for AllowanceKind {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named deduction claimed against taxable income.
///
/// The type is kept as the raw tag so that unrecognized categories can be
/// carried through and skipped instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allowance {
    #[serde(rename = "allowanceType")]
    pub allowance_type: String,
    pub amount: Decimal,
}

impl Allowance {
    pub fn new(
        allowance_type: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            allowance_type: allowance_type.into(),
            amount,
        }
    }

    pub fn k_receipt(amount: Decimal) -> Self {
        Self::new(AllowanceKind::KReceipt.as_str(), amount)
    }

    pub fn donation(amount: Decimal) -> Self {
        Self::new(AllowanceKind::Donation.as_str(), amount)
    }

    /// Returns the recognized category, or `None` for tags the calculator ignores.
    pub fn kind(&self) -> Option<AllowanceKind> {
        AllowanceKind::parse(&self.allowance_type)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_recognizes_known_tags() {
        assert_eq!(AllowanceKind::parse("k-receipt"), Some(AllowanceKind::KReceipt));
        assert_eq!(AllowanceKind::parse("donation"), Some(AllowanceKind::Donation));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(AllowanceKind::parse("Donation"), None);
        assert_eq!(AllowanceKind::parse("K-RECEIPT"), None);
    }

    #[test]
    fn parse_rejects_unknown_tags() {
        assert_eq!(AllowanceKind::parse("life-insurance"), None);
        assert_eq!(AllowanceKind::parse(""), None);
    }

    #[test]
    fn constructors_use_wire_tags() {
        assert_eq!(Allowance::k_receipt(dec!(1)).allowance_type, "k-receipt");
        assert_eq!(Allowance::donation(dec!(1)).allowance_type, "donation");
    }

    #[test]
    fn kind_maps_tag_to_category() {
        assert_eq!(
            Allowance::donation(dec!(500)).kind(),
            Some(AllowanceKind::Donation)
        );
        assert_eq!(Allowance::new("pension", dec!(500)).kind(), None);
    }

    #[test]
    fn serializes_with_allowance_type_field() {
        let json = serde_json::to_value(Allowance::k_receipt(dec!(200))).unwrap();

        assert_eq!(json["allowanceType"], "k-receipt");
        assert!(json.get("allowance_type").is_none());
    }

    #[test]
    fn deserializes_unknown_tags_without_error() {
        let allowance: Allowance =
            serde_json::from_str(r#"{"allowanceType":"pension","amount":"1000"}"#).unwrap();

        assert_eq!(allowance.amount, dec!(1000));
        assert_eq!(allowance.kind(), None);
    }
}
