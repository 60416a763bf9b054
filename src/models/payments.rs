//! Payment entities: payments, refunds, and their request/response shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Field, models::errors::ApiError, models::money::Money};

/// An extra party that receives part of a payment.
///
/// Location and amount are required; the rest are optional.
///
/// # Examples
///
/// ```
/// use commerce_models::{AdditionalRecipient, JsonBody, Money};
///
/// let recipient = AdditionalRecipient::new("L1", Money::new(100, "USD"));
/// let body = recipient.to_body()?;
/// assert_eq!(body["location_id"], "L1");
/// assert!(body.get("description").is_none());
/// # Ok::<(), commerce_models::ModelError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalRecipient {
    /// Location receiving the funds.
    pub location_id: String,
    /// Amount routed to this recipient.
    pub amount_money: Money,
    /// Reason for the split, shown in reporting.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    /// Receivable created for this recipient.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub receivable_id: Field<String>,
}

impl AdditionalRecipient {
    /// Creates a recipient with the required location and amount.
    #[must_use]
    pub fn new<S: Into<String>>(location_id: S, amount_money: Money) -> Self {
        Self {
            location_id: location_id.into(),
            amount_money,
            description: Field::Unset,
            receivable_id: Field::Unset,
        }
    }
}

/// A payment taken by the merchant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Server-assigned payment identifier.
    pub id: String,
    /// Amount charged.
    pub amount_money: Money,
    /// `APPROVED`, `COMPLETED`, `CANCELED`, or `FAILED`.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub status: Field<String>,
    /// Source of funds, e.g. `CARD` or `CASH`.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub source_type: Field<String>,
    /// Order the payment applies to.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub order_id: Field<String>,
    /// Tip portion of the amount.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tip_money: Field<Money>,
    /// Processing fees deducted by the platform.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub processing_fee_money: Field<Money>,
    /// Extra parties receiving part of this payment.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub additional_recipients: Field<Vec<AdditionalRecipient>>,
    /// Creation timestamp, set by the server.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
}

impl Payment {
    /// Creates a payment record with the required id and amount.
    #[must_use]
    pub fn new<S: Into<String>>(id: S, amount_money: Money) -> Self {
        Self {
            id: id.into(),
            amount_money,
            status: Field::Unset,
            source_type: Field::Unset,
            order_id: Field::Unset,
            tip_money: Field::Unset,
            processing_fee_money: Field::Unset,
            additional_recipients: Field::Unset,
            created_at: Field::Unset,
        }
    }
}

/// Request body for creating a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    /// Payment token or card id supplied by the client.
    pub source_id: String,
    /// Key that makes the call retry-safe; one payment per key.
    pub idempotency_key: String,
    /// Amount to charge.
    pub amount_money: Money,
    /// Tip to add on top of the amount.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tip_money: Field<Money>,
    /// Order to attach the payment to.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub order_id: Field<String>,
    /// Customer making the payment.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub customer_id: Field<String>,
    /// If false, authorize only and capture later. Defaults to true.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub autocomplete: Field<bool>,
    /// Free-form note attached to the payment.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub note: Field<String>,
}

impl CreatePaymentRequest {
    /// Creates a request with the required source, key, and amount.
    #[must_use]
    pub fn new<S: Into<String>>(source_id: S, idempotency_key: S, amount_money: Money) -> Self {
        Self {
            source_id: source_id.into(),
            idempotency_key: idempotency_key.into(),
            amount_money,
            tip_money: Field::Unset,
            order_id: Field::Unset,
            customer_id: Field::Unset,
            autocomplete: Field::Unset,
            note: Field::Unset,
        }
    }

    /// Creates a request with a freshly generated idempotency key (UUID v4).
    #[must_use]
    pub fn with_generated_key<S: Into<String>>(source_id: S, amount_money: Money) -> Self {
        Self::new(source_id.into(), uuid::Uuid::new_v4().to_string(), amount_money)
    }
}

/// Response body for a create-payment call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreatePaymentResponse {
    /// Errors, if the call failed.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub errors: Field<Vec<ApiError>>,
    /// The created payment on success.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment: Field<Payment>,
}

/// Request body for refunding a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundPaymentRequest {
    /// Key that makes the call retry-safe.
    pub idempotency_key: String,
    /// Amount to refund; may be less than the original charge.
    pub amount_money: Money,
    /// Payment being refunded.
    pub payment_id: String,
    /// Reason shown to the buyer.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub reason: Field<String>,
}

impl RefundPaymentRequest {
    /// Creates a refund request with the required key, amount, and payment.
    #[must_use]
    pub fn new<S: Into<String>>(idempotency_key: S, amount_money: Money, payment_id: S) -> Self {
        Self {
            idempotency_key: idempotency_key.into(),
            amount_money,
            payment_id: payment_id.into(),
            reason: Field::Unset,
        }
    }
}

/// A refund issued against a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRefund {
    /// Server-assigned refund identifier.
    pub id: String,
    /// Amount refunded.
    pub amount_money: Money,
    /// `PENDING`, `COMPLETED`, `REJECTED`, or `FAILED`.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub status: Field<String>,
    /// Payment the refund applies to.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub payment_id: Field<String>,
    /// Reason supplied when the refund was created.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub reason: Field<String>,
    /// Creation timestamp, set by the server.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
}

impl PaymentRefund {
    /// Creates a refund record with the required id and amount.
    #[must_use]
    pub fn new<S: Into<String>>(id: S, amount_money: Money) -> Self {
        Self {
            id: id.into(),
            amount_money,
            status: Field::Unset,
            payment_id: Field::Unset,
            reason: Field::Unset,
            created_at: Field::Unset,
        }
    }
}
