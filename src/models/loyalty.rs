//! Loyalty program entities.

use serde::{Deserialize, Serialize};

use crate::{Field, models::errors::ApiError};

/// A merchant's loyalty program definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyProgram {
    /// Server-assigned program identifier.
    pub id: String,
    /// `ACTIVE` or `INACTIVE`.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub status: Field<String>,
    /// Name of one point, singular form.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub terminology_one: Field<String>,
    /// Name of the points, plural form.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub terminology_other: Field<String>,
    /// Locations where the program applies.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub location_ids: Field<Vec<String>>,
}

impl LoyaltyProgram {
    /// Creates a program record with the required id.
    #[must_use]
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            status: Field::Unset,
            terminology_one: Field::Unset,
            terminology_other: Field::Unset,
            location_ids: Field::Unset,
        }
    }
}

/// A buyer's balance in a loyalty program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyAccount {
    /// Program the account belongs to.
    pub program_id: String,
    /// Server-assigned account identifier.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    /// Current point balance.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub balance: Field<i64>,
    /// Lifetime points earned.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub lifetime_points: Field<i64>,
    /// Customer the account belongs to.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub customer_id: Field<String>,
}

impl LoyaltyAccount {
    /// Creates an account record in the given program.
    #[must_use]
    pub fn new<S: Into<String>>(program_id: S) -> Self {
        Self {
            program_id: program_id.into(),
            id: Field::Unset,
            balance: Field::Unset,
            lifetime_points: Field::Unset,
            customer_id: Field::Unset,
        }
    }
}

/// Points granted by an accumulate call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoyaltyEventPoints {
    /// Points to add; computed from the order when omitted.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub points: Field<i64>,
    /// Order the points derive from.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub order_id: Field<String>,
}

/// Request body for adding points to a loyalty account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccumulateLoyaltyPointsRequest {
    /// Points to accumulate, by explicit value or by order.
    pub accumulate_points: LoyaltyEventPoints,
    /// Key that makes the call retry-safe.
    pub idempotency_key: String,
    /// Location where the purchase happened.
    pub location_id: String,
}

impl AccumulateLoyaltyPointsRequest {
    /// Creates a request with the required points, key, and location.
    #[must_use]
    pub fn new<S: Into<String>>(
        accumulate_points: LoyaltyEventPoints,
        idempotency_key: S,
        location_id: S,
    ) -> Self {
        Self {
            accumulate_points,
            idempotency_key: idempotency_key.into(),
            location_id: location_id.into(),
        }
    }
}

/// Response body for an accumulate-points call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccumulateLoyaltyPointsResponse {
    /// Errors, if the call failed.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub errors: Field<Vec<ApiError>>,
    /// Points granted.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub points: Field<i64>,
}

#[cfg(test)]
mod tests {
    use crate::JsonBody;

    use super::*;

    #[test]
    fn test_accumulate_request_nested_required_model() {
        let mut points = LoyaltyEventPoints::default();
        points.order_id.set("order-1".to_owned());

        let request = AccumulateLoyaltyPointsRequest::new(points, "key-1", "L1");
        let body = request.to_body().unwrap();

        assert_eq!(body["accumulate_points"]["order_id"], "order-1");
        assert!(body["accumulate_points"].get("points").is_none());
        assert_eq!(body["idempotency_key"], "key-1");
        assert_eq!(body["location_id"], "L1");
    }

    #[test]
    fn test_accumulate_request_empty_points_becomes_marker() {
        let request =
            AccumulateLoyaltyPointsRequest::new(LoyaltyEventPoints::default(), "key-2", "L1");
        let body = request.to_body().unwrap();
        // A nested all-unset model collapses to the empty-array marker.
        assert_eq!(body["accumulate_points"], serde_json::json!([]));
    }

    #[test]
    fn test_loyalty_account_decode() {
        let body = serde_json::json!({
            "program_id": "prog-1",
            "id": "acct-1",
            "balance": 120,
            "lifetime_points": 450
        });
        let account = LoyaltyAccount::from_body(body).unwrap();
        assert_eq!(account.balance.get(), Some(&120));
        assert!(account.customer_id.is_unset());
    }

    #[test]
    fn test_program_terminology() {
        let mut program = LoyaltyProgram::new("prog-1");
        program.terminology_one.set("Star".to_owned());
        program.terminology_other.set("Stars".to_owned());

        let body = program.to_body().unwrap();
        assert_eq!(body["terminology_one"], "Star");
        assert_eq!(body["terminology_other"], "Stars");
    }
}
