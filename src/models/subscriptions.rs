//! Subscription entities and request shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Field, models::money::Money};

/// Lifecycle state of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    /// Scheduled to start in the future.
    Pending,
    /// Billing normally.
    Active,
    /// Canceled; remains active until the end of the paid period.
    Canceled,
    /// Deactivated by the platform, e.g. repeated payment failure.
    Deactivated,
    /// Paused at the subscriber's request.
    Paused,
}

/// A recurring billing agreement between a customer and a merchant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Server-assigned subscription identifier.
    pub id: String,
    /// Location that bills the subscription.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub location_id: Field<String>,
    /// Subscription plan variation being billed.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub plan_variation_id: Field<String>,
    /// Customer being billed.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub customer_id: Field<String>,
    /// Lifecycle state.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub status: Field<SubscriptionStatus>,
    /// Price override replacing the plan's amount.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub price_override_money: Field<Money>,
    /// First day of the current billing period (RFC 3339 date-time).
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub start_date: Field<String>,
    /// When the subscription was canceled, if it was.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub canceled_date: Field<String>,
    /// Creation timestamp, set by the server.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
}

impl Subscription {
    /// Creates a subscription record with the required id.
    #[must_use]
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            location_id: Field::Unset,
            plan_variation_id: Field::Unset,
            customer_id: Field::Unset,
            status: Field::Unset,
            price_override_money: Field::Unset,
            start_date: Field::Unset,
            canceled_date: Field::Unset,
            created_at: Field::Unset,
        }
    }
}

/// Request body for starting a subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSubscriptionRequest {
    /// Location that will bill the subscription.
    pub location_id: String,
    /// Plan variation to subscribe to.
    pub plan_variation_id: String,
    /// Customer to bill.
    pub customer_id: String,
    /// Key that makes the call retry-safe.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub idempotency_key: Field<String>,
    /// First billing date; defaults to today.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub start_date: Field<String>,
    /// Price override replacing the plan's amount.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub price_override_money: Field<Money>,
}

impl CreateSubscriptionRequest {
    /// Creates a request with the required location, plan, and customer.
    #[must_use]
    pub fn new<S: Into<String>>(location_id: S, plan_variation_id: S, customer_id: S) -> Self {
        Self {
            location_id: location_id.into(),
            plan_variation_id: plan_variation_id.into(),
            customer_id: customer_id.into(),
            idempotency_key: Field::Unset,
            start_date: Field::Unset,
            price_override_money: Field::Unset,
        }
    }

    /// Creates a request with a freshly generated idempotency key (UUID v4).
    #[must_use]
    pub fn with_generated_key<S: Into<String>>(
        location_id: S,
        plan_variation_id: S,
        customer_id: S,
    ) -> Self {
        let mut request = Self::new(location_id, plan_variation_id, customer_id);
        request.idempotency_key.set(uuid::Uuid::new_v4().to_string());
        request
    }
}

/// Request body for a sparse subscription update.
///
/// `price_override_money` supports explicit clearing via
/// [`set_null`](crate::Field::set_null) to revert to the plan's price.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateSubscriptionRequest {
    /// New price override; null reverts to the plan's amount.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub price_override_money: Field<Money>,
    /// New plan variation to move the subscription to.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub plan_variation_id: Field<String>,
}
