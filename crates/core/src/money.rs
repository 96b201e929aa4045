//! Currency amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A non-negative price in a single, implicit currency.
///
/// Exact decimal arithmetic; there is no rounding beyond what `Decimal` itself
/// performs. Deserialisation goes through [`Price::new`], so a negative amount
/// is rejected there as well.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_zero() {
            return Ok(Self::ZERO);
        }
        if amount.is_sign_negative() {
            return Err(DomainError::validation(format!(
                "price cannot be negative (got {amount})"
            )));
        }
        Ok(Self(amount))
    }

    pub fn amount(self) -> Decimal {
        self.0
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(value: Price) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn assert_value_object<T: ValueObject>(_: &T) {}

    #[test]
    fn price_compares_by_value() {
        let a = Price::new(dec!(10.00)).unwrap();
        let b = Price::new(dec!(10)).unwrap();
        assert_value_object(&a);
        assert_eq!(a, b);
        assert!(Price::new(dec!(9.99)).unwrap() < a);
    }

    #[test]
    fn accepts_zero_and_positive_amounts() {
        assert_eq!(Price::new(dec!(0)).unwrap(), Price::ZERO);
        assert_eq!(Price::new(dec!(250.00)).unwrap().amount(), dec!(250));
    }

    #[test]
    fn negative_zero_is_zero() {
        let neg_zero = -dec!(0.00);
        assert_eq!(Price::new(neg_zero).unwrap().amount(), Decimal::ZERO);
    }

    #[test]
    fn rejects_negative_amount() {
        let err = Price::new(dec!(-0.01)).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("negative")),
            _ => panic!("Expected Validation error for negative price"),
        }
    }

    #[test]
    fn deserialisation_runs_validation() {
        let ok: Price = serde_json::from_str("\"19.99\"").unwrap();
        assert_eq!(ok.amount(), dec!(19.99));

        let err = serde_json::from_str::<Price>("\"-1\"");
        assert!(err.is_err());
    }
}
