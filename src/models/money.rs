//! Monetary amounts.

use serde::{Deserialize, Serialize};

/// An amount of money in a specific currency.
///
/// Both fields are required and always serialized. `amount` is in the
/// smallest denomination of the currency (cents for USD), so `$5.00` is
/// `Money::new(500, "USD")`. Negative amounts represent money moving toward
/// the account holder (refunds, adjustments).
///
/// # Examples
///
/// ```
/// use commerce_models::{JsonBody, Money};
///
/// let money = Money::new(500, "USD");
/// assert_eq!(money.to_body()?.to_string(), r#"{"amount":500,"currency":"USD"}"#);
/// # Ok::<(), commerce_models::ModelError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the smallest currency denomination.
    pub amount: i64,
    /// Currency code (ISO 4217).
    pub currency: String,
}

impl Money {
    /// Creates a new amount.
    #[must_use]
    pub fn new<S: Into<String>>(amount: i64, currency: S) -> Self {
        Self { amount, currency: currency.into() }
    }
}

#[cfg(test)]
mod tests {
    use crate::JsonBody;

    use super::*;

    #[test]
    fn test_money_wire_shape() {
        let money = Money::new(500, "USD");
        let body = money.to_body().unwrap();
        assert_eq!(body.to_string(), r#"{"amount":500,"currency":"USD"}"#);
    }

    #[test]
    fn test_money_negative_amount() {
        let money = Money::new(-250, "EUR");
        let body = money.to_body().unwrap();
        assert_eq!(body["amount"], serde_json::json!(-250));
    }

    #[test]
    fn test_money_decode() {
        let money = Money::from_body(serde_json::json!({"amount": 1999, "currency": "GBP"}))
            .unwrap();
        assert_eq!(money, Money::new(1999, "GBP"));
    }

    #[test]
    fn test_money_required_fields_always_present() {
        let money = Money::new(0, "JPY");
        let body = money.to_body().unwrap();
        assert!(body.get("amount").is_some());
        assert!(body.get("currency").is_some());
    }
}
