//! Integration tests for the wire body convention.
//!
//! Exercises the encode/decode path end to end across model families:
//! unset omission, explicit-null filtering, empty markers, nesting, and
//! declaration-order output.

use commerce_models::{
    AdditionalRecipient, CreateInvoiceRequest, CreatePaymentRequest, Customer, Invoice,
    InvoiceRecipient, JsonBody, Money, Order, OrderLineItem, OrderState, SearchOrdersFilter,
    SearchOrdersQuery, SearchOrdersRequest, SearchOrdersResponse, UpdateCustomerRequest,
};
use serde_json::json;

#[test]
fn test_money_matches_documented_wire_shape() {
    let money = Money::new(500, "USD");
    assert_eq!(money.to_body().unwrap().to_string(), r#"{"amount":500,"currency":"USD"}"#);
}

#[test]
fn test_additional_recipient_omits_untouched_description() {
    let recipient = AdditionalRecipient::new("L1", Money::new(100, "USD"));
    let body = recipient.to_body().unwrap();

    assert_eq!(body["location_id"], "L1");
    assert_eq!(body["amount_money"], json!({"amount": 100, "currency": "USD"}));
    assert!(body.get("description").is_none());
}

#[test]
fn test_unset_fields_never_emitted_across_nesting() {
    let mut line = OrderLineItem::new("1");
    line.base_price_money.set(Money::new(750, "USD"));

    let mut order = Order::new("L1");
    order.line_items.set(vec![line]);

    let body = order.to_body().unwrap();
    assert!(body.get("reference_id").is_none());
    assert!(body.get("metadata").is_none());
    assert!(body["line_items"][0].get("note").is_none());
    assert!(body["line_items"][0].get("catalog_object_id").is_none());
}

#[test]
fn test_explicit_null_is_lossy_on_the_wire() {
    let mut request = UpdateCustomerRequest::default();
    request.nickname.set_null();
    request.given_name.set("Ada".to_owned());

    // In memory the tri-state is preserved.
    assert!(request.nickname.is_null());
    assert!(!request.nickname.is_unset());

    // On the wire the null post-filter removes the cleared field, making it
    // indistinguishable from never-set.
    let body = request.to_body().unwrap();
    assert_eq!(body.to_string(), r#"{"given_name":"Ada"}"#);
}

#[test]
fn test_required_fields_always_present() {
    let request = CreatePaymentRequest::new("src-1", "key-1", Money::new(0, "JPY"));
    let body = request.to_body().unwrap();
    for key in ["source_id", "idempotency_key", "amount_money"] {
        assert!(body.get(key).is_some(), "missing required key {key}");
    }
}

#[test]
fn test_encode_is_idempotent() {
    let mut order = Order::new("L1");
    order.state.set(OrderState::Open);
    order.total_money.set(Money::new(1234, "USD"));

    let first = order.to_body().unwrap();
    let second = order.to_body().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_empty_model_markers() {
    let request = SearchOrdersRequest::default();
    assert_eq!(request.to_body().unwrap(), json!([]));
    assert_eq!(request.to_body_with(true).unwrap(), json!({}));
}

#[test]
fn test_nested_required_model_serializes_recursively() {
    let mut invoice = Invoice::new("L1");
    invoice.primary_recipient.set(InvoiceRecipient::new("cust-1"));

    let request = CreateInvoiceRequest::new(invoice);
    let body = request.to_body().unwrap();

    assert_eq!(body["invoice"]["location_id"], "L1");
    assert_eq!(body["invoice"]["primary_recipient"]["customer_id"], "cust-1");
}

#[test]
fn test_field_order_is_declaration_order() {
    let mut request = SearchOrdersRequest::default();
    request.limit.set(10);
    request.cursor.set("page-2".to_owned());
    request.location_ids.set(vec!["L1".to_owned()]);

    let body = request.to_body().unwrap();
    let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["location_ids", "cursor", "limit"]);
}

#[test]
fn test_search_round_trip_through_wire_body() {
    let mut filter = SearchOrdersFilter::default();
    filter.states.set(vec![OrderState::Open]);
    let mut query = SearchOrdersQuery::default();
    query.filter.set(filter);
    let mut request = SearchOrdersRequest::default();
    request.query.set(query);
    request.location_ids.set(vec!["L1".to_owned()]);

    let body = request.to_body().unwrap();
    let decoded = SearchOrdersRequest::from_body(body).unwrap();
    assert_eq!(decoded, request);
}

#[test]
fn test_decode_distinguishes_null_from_absent() {
    let body = json!({
        "id": "cust-1",
        "nickname": null
    });
    let customer = Customer::from_body(body).unwrap();
    assert!(customer.nickname.is_null());
    assert!(customer.note.is_unset());
}

#[test]
fn test_decode_response_with_cursor_pagination() {
    let body = json!({
        "orders": [
            {"location_id": "L1", "id": "o1", "state": "OPEN"},
            {"location_id": "L1", "id": "o2", "state": "COMPLETED"}
        ],
        "cursor": "next-page"
    });
    let response = SearchOrdersResponse::from_body(body).unwrap();
    let orders = response.orders.get().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[1].state.get(), Some(&OrderState::Completed));
    assert_eq!(response.cursor.get(), Some(&"next-page".to_owned()));
}

#[test]
fn test_from_body_slice_rejects_invalid_json() {
    let result = Money::from_body_slice(b"{not json");
    assert!(result.is_err());
}
