//! Customer entities and their create/update requests.
//!
//! Update requests are where the tri-state matters most on the write path:
//! leaving `nickname` unset means "do not touch it", while
//! `request.nickname.set_null()` asks the server to clear the stored value.
//! Note the body encoder's null post-filter currently collapses the second
//! case into the first on the wire; see
//! [`JsonBody`](crate::JsonBody) for the full story.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Field, models::common::Address};

/// A customer profile stored with the merchant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Server-assigned customer identifier.
    pub id: String,
    /// Given name.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub given_name: Field<String>,
    /// Family name.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub family_name: Field<String>,
    /// Nickname shown in seller-facing UIs.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub nickname: Field<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub email_address: Field<String>,
    /// Phone number in E.164 format.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone_number: Field<String>,
    /// Postal address.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub address: Field<Address>,
    /// Seller-supplied note about the customer.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub note: Field<String>,
    /// Creation timestamp, set by the server.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
    /// Last update timestamp, set by the server.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub updated_at: Field<DateTime<Utc>>,
}

impl Customer {
    /// Creates a customer record with the required id.
    #[must_use]
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            given_name: Field::Unset,
            family_name: Field::Unset,
            nickname: Field::Unset,
            email_address: Field::Unset,
            phone_number: Field::Unset,
            address: Field::Unset,
            note: Field::Unset,
            created_at: Field::Unset,
            updated_at: Field::Unset,
        }
    }
}

/// Request body for creating a customer. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    /// Key that makes the call retry-safe.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub idempotency_key: Field<String>,
    /// Given name.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub given_name: Field<String>,
    /// Family name.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub family_name: Field<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub email_address: Field<String>,
    /// Phone number in E.164 format.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone_number: Field<String>,
    /// Postal address.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub address: Field<Address>,
    /// Seller-supplied note.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub note: Field<String>,
}

/// Request body for a sparse customer update.
///
/// Unset fields are left untouched by the server. `nickname`, `note` and
/// `phone_number` support explicit clearing via
/// [`set_null`](crate::Field::set_null).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateCustomerRequest {
    /// New given name.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub given_name: Field<String>,
    /// New family name.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub family_name: Field<String>,
    /// New nickname; null clears the stored value.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub nickname: Field<String>,
    /// New email address.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub email_address: Field<String>,
    /// New phone number; null clears the stored value.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone_number: Field<String>,
    /// New postal address.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub address: Field<Address>,
    /// New note; null clears the stored value.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub note: Field<String>,
}

#[cfg(test)]
mod tests {
    use crate::JsonBody;

    use super::*;

    #[test]
    fn test_update_request_untouched_fields_omitted() {
        let mut request = UpdateCustomerRequest::default();
        request.given_name.set("Ada".to_owned());

        let body = request.to_body().unwrap();
        assert_eq!(body.to_string(), r#"{"given_name":"Ada"}"#);
    }

    #[test]
    fn test_update_request_explicit_null_is_filtered_from_wire() {
        let mut request = UpdateCustomerRequest::default();
        request.nickname.set_null();

        // Tracked in memory but removed from the body by the null
        // post-filter, so the request collapses to the empty marker.
        assert!(request.nickname.is_null());
        assert_eq!(request.to_body().unwrap(), serde_json::json!([]));
    }

    #[test]
    fn test_update_request_mixed_set_and_null() {
        let mut request = UpdateCustomerRequest::default();
        request.note.set_null();
        request.family_name.set("Lovelace".to_owned());

        let body = request.to_body().unwrap();
        assert_eq!(body.to_string(), r#"{"family_name":"Lovelace"}"#);
    }

    #[test]
    fn test_customer_with_nested_address() {
        let mut address = Address::default();
        address.locality.set("Seattle".to_owned());

        let mut customer = Customer::new("cust-1");
        customer.address.set(address);

        let body = customer.to_body().unwrap();
        assert_eq!(body["id"], "cust-1");
        assert_eq!(body["address"]["locality"], "Seattle");
        assert!(body["address"].get("country").is_none());
    }

    #[test]
    fn test_customer_decode_with_explicit_null() {
        let body = serde_json::json!({
            "id": "cust-2",
            "nickname": null,
            "given_name": "Grace"
        });
        let customer = Customer::from_body(body).unwrap();
        assert!(customer.nickname.is_null());
        assert!(customer.family_name.is_unset());
        assert_eq!(customer.given_name.get(), Some(&"Grace".to_owned()));
    }

    #[test]
    fn test_create_request_all_unset_markers() {
        let request = CreateCustomerRequest::default();
        assert_eq!(request.to_body().unwrap(), serde_json::json!([]));
        assert_eq!(request.to_body_with(true).unwrap(), serde_json::json!({}));
    }
}
