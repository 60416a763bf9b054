//! Order entities and the order search request family.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    Field,
    models::common::TimeRange,
    models::errors::ApiError,
    models::money::Money,
};

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    /// Order is open and can still be modified.
    Open,
    /// Order has been completed.
    Completed,
    /// Order was canceled before completion.
    Canceled,
}

/// One line of an order.
///
/// Only `quantity` is required; the API accepts quantity as a string to
/// allow fractional amounts (e.g. `"1.5"` kilograms).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// Quantity purchased, as a decimal string.
    pub quantity: String,
    /// Display name of the line.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    /// Catalog object backing this line, if any.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub catalog_object_id: Field<String>,
    /// Price per unit.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub base_price_money: Field<Money>,
    /// Total for the line including modifiers and taxes.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub total_money: Field<Money>,
    /// Buyer-visible note.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub note: Field<String>,
}

impl OrderLineItem {
    /// Creates a line item with the required quantity.
    #[must_use]
    pub fn new<S: Into<String>>(quantity: S) -> Self {
        Self {
            quantity: quantity.into(),
            name: Field::Unset,
            catalog_object_id: Field::Unset,
            base_price_money: Field::Unset,
            total_money: Field::Unset,
            note: Field::Unset,
        }
    }
}

/// An order placed at a merchant location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Location the order belongs to.
    pub location_id: String,
    /// Server-assigned order identifier.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    /// Merchant-supplied reference.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub reference_id: Field<String>,
    /// Current lifecycle state.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub state: Field<OrderState>,
    /// Lines on the order.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub line_items: Field<Vec<OrderLineItem>>,
    /// Total of the order including taxes.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub total_money: Field<Money>,
    /// Creation timestamp, set by the server.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
    /// Last update timestamp, set by the server.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub updated_at: Field<DateTime<Utc>>,
    /// Arbitrary merchant-defined metadata.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<serde_json::Value>,
}

impl Order {
    /// Creates an order at the given location.
    #[must_use]
    pub fn new<S: Into<String>>(location_id: S) -> Self {
        Self {
            location_id: location_id.into(),
            id: Field::Unset,
            reference_id: Field::Unset,
            state: Field::Unset,
            line_items: Field::Unset,
            total_money: Field::Unset,
            created_at: Field::Unset,
            updated_at: Field::Unset,
            metadata: Field::Unset,
        }
    }
}

/// Filter on order creation or update time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchOrdersDateTimeFilter {
    /// Match orders created inside this window.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<TimeRange>,
    /// Match orders updated inside this window.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub updated_at: Field<TimeRange>,
}

/// Filter criteria for an order search.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchOrdersFilter {
    /// Restrict to orders in any of these states.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub states: Field<Vec<OrderState>>,
    /// Restrict by creation/update time.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub date_time_filter: Field<SearchOrdersDateTimeFilter>,
}

/// Query wrapper combining filter and (future) sort criteria.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchOrdersQuery {
    /// Filter criteria.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub filter: Field<SearchOrdersFilter>,
}

/// Request body for searching orders across locations.
///
/// All fields are optional; an empty request returns all orders for the
/// authorized merchant, page by page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchOrdersRequest {
    /// Locations to search. At least one is required by the server.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub location_ids: Field<Vec<String>>,
    /// Opaque pagination cursor from a previous response.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub cursor: Field<String>,
    /// Query criteria.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub query: Field<SearchOrdersQuery>,
    /// Maximum results per page.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub limit: Field<i32>,
}

/// Response body for an order search.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchOrdersResponse {
    /// Errors, if the call failed.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub errors: Field<Vec<ApiError>>,
    /// Matching orders for this page.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub orders: Field<Vec<Order>>,
    /// Cursor for the next page; absent on the last page.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub cursor: Field<String>,
}

#[cfg(test)]
mod tests {
    use crate::JsonBody;

    use super::*;

    #[test]
    fn test_order_state_wire_names() {
        assert_eq!(serde_json::to_value(OrderState::Open).unwrap(), "OPEN");
        assert_eq!(serde_json::to_value(OrderState::Completed).unwrap(), "COMPLETED");
        assert_eq!(serde_json::to_value(OrderState::Canceled).unwrap(), "CANCELED");
    }

    #[test]
    fn test_order_minimal_body() {
        let order = Order::new("L1");
        let body = order.to_body().unwrap();
        assert_eq!(body.to_string(), r#"{"location_id":"L1"}"#);
    }

    #[test]
    fn test_order_with_line_items() {
        let mut line = OrderLineItem::new("2");
        line.name.set("Coffee".to_owned());
        line.base_price_money.set(Money::new(300, "USD"));

        let mut order = Order::new("L1");
        order.line_items.set(vec![line]);
        order.state.set(OrderState::Open);

        let body = order.to_body().unwrap();
        assert_eq!(body["state"], "OPEN");
        assert_eq!(body["line_items"][0]["quantity"], "2");
        assert_eq!(body["line_items"][0]["base_price_money"]["amount"], 300);
        assert!(body["line_items"][0].get("note").is_none());
    }

    #[test]
    fn test_search_request_empty_is_array_marker() {
        let request = SearchOrdersRequest::default();
        assert_eq!(request.to_body().unwrap(), serde_json::json!([]));
    }

    #[test]
    fn test_search_request_nested_filter() {
        let mut filter = SearchOrdersFilter::default();
        filter.states.set(vec![OrderState::Open, OrderState::Completed]);

        let mut query = SearchOrdersQuery::default();
        query.filter.set(filter);

        let mut request = SearchOrdersRequest::default();
        request.location_ids.set(vec!["L1".to_owned(), "L2".to_owned()]);
        request.query.set(query);
        request.limit.set(50);

        let body = request.to_body().unwrap();
        assert_eq!(body["location_ids"], serde_json::json!(["L1", "L2"]));
        assert_eq!(body["query"]["filter"]["states"], serde_json::json!(["OPEN", "COMPLETED"]));
        assert_eq!(body["limit"], 50);
        assert!(body.get("cursor").is_none());
    }

    #[test]
    fn test_date_time_filter_window() {
        use chrono::TimeZone;

        let mut window = TimeRange::default();
        window.start_at.set(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        window.end_at.set(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());

        let mut filter = SearchOrdersDateTimeFilter::default();
        filter.created_at.set(window);

        let body = filter.to_body().unwrap();
        assert_eq!(body["created_at"]["start_at"], "2024-01-01T00:00:00Z");
        assert!(body.get("updated_at").is_none());
    }

    #[test]
    fn test_search_response_decode() {
        let body = serde_json::json!({
            "orders": [{"location_id": "L1", "id": "order-1", "state": "COMPLETED"}],
            "cursor": "abc"
        });
        let response = SearchOrdersResponse::from_body(body).unwrap();
        let orders = response.orders.get().unwrap();
        assert_eq!(orders[0].id.get(), Some(&"order-1".to_owned()));
        assert_eq!(orders[0].state.get(), Some(&OrderState::Completed));
        assert_eq!(response.cursor.get(), Some(&"abc".to_owned()));
        assert!(response.errors.is_unset());
    }

    #[test]
    fn test_serialize_is_idempotent() {
        let mut order = Order::new("L9");
        order.reference_id.set("ref-1".to_owned());
        let first = order.to_body().unwrap();
        let second = order.to_body().unwrap();
        assert_eq!(first, second);
    }
}
