//! Commerce Models: typed data models for a payments/commerce REST API.
//!
//! This crate is the data-model layer of an API client: one Rust type per
//! request/response shape or entity (money amounts, catalog items, orders,
//! payments, customers, invoices, subscriptions, loyalty, disputes), with
//! JSON encoding that follows the API's wire conventions exactly. The
//! transport layer (HTTP, auth, retries, pagination iteration) lives
//! elsewhere; this crate only builds and decodes bodies.
//!
//! # The tri-state optional convention
//!
//! The API distinguishes a field that was never set from one explicitly set
//! to null. [`Field`] captures that:
//!
//! ```text
//! ┌────────────────┐   serde draft    ┌─────────────────┐
//! │  Model struct  │ ───────────────► │  draft JSON      │
//! │  required: T   │  unset skipped   │  nulls possible  │
//! │  optional:     │                  └────────┬────────┘
//! │   Field<T>     │                           │ null post-filter
//! └────────────────┘                           ▼
//!                                     ┌─────────────────┐
//!                                     │  wire body       │
//!                                     │  no nulls,       │
//!                                     │  [] / {} markers │
//!                                     └─────────────────┘
//! ```
//!
//! Required fields are plain struct fields supplied at construction and
//! always serialized. Optional fields are [`Field<T>`] tri-states skipped
//! when unset. [`JsonBody::to_body`] applies the API's null post-filter and
//! empty-object markers; see that trait's docs for the (deliberately
//! replicated) treatment of explicit nulls.
//!
//! # Quick Start
//!
//! ## 1. Build a request body
//!
//! ```
//! use commerce_models::{CreatePaymentRequest, JsonBody, Money};
//!
//! let mut request = CreatePaymentRequest::with_generated_key(
//!     "cnon:card-nonce-ok",
//!     Money::new(2500, "USD"),
//! );
//! request.note.set("Latte, extra shot".to_owned());
//!
//! let body = request.to_body()?;
//! assert_eq!(body["amount_money"]["amount"], 2500);
//! assert!(body.get("order_id").is_none()); // never set, never sent
//! # Ok::<(), commerce_models::ModelError>(())
//! ```
//!
//! ## 2. Decode a response body
//!
//! ```
//! use commerce_models::{CreatePaymentResponse, JsonBody};
//!
//! let raw = br#"{"payment":{"id":"pay-1","amount_money":{"amount":2500,"currency":"USD"},"status":"COMPLETED"}}"#;
//! let response = CreatePaymentResponse::from_body_slice(raw)?;
//!
//! let payment = response.payment.get().expect("payment present on success");
//! assert_eq!(payment.id, "pay-1");
//! assert!(payment.order_id.is_unset()); // key absent, not null
//! # Ok::<(), commerce_models::ModelError>(())
//! ```
//!
//! ## 3. Sparse updates with explicit clearing
//!
//! ```
//! use commerce_models::UpdateCustomerRequest;
//!
//! let mut request = UpdateCustomerRequest::default();
//! request.given_name.set("Ada".to_owned());
//! request.nickname.set_null(); // ask the server to clear it
//!
//! assert!(request.nickname.is_null());
//! assert!(request.note.is_unset());
//! ```
//!
//! # Module Organization
//!
//! - [`field`]: the [`Field`] tri-state optional wrapper
//! - [`body`]: the [`JsonBody`] encode/decode convention
//! - [`models`]: one module per entity family (money, catalog, orders, ...)
//! - [`error`]: [`ModelError`] and the crate [`Result`] alias

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod body;
pub mod error;
pub mod field;
pub mod models;

pub use body::JsonBody;
pub use error::{ModelError, Result};
pub use field::Field;
pub use models::{
    AccumulateLoyaltyPointsRequest, AccumulateLoyaltyPointsResponse, AdditionalRecipient, Address,
    ApiError, CatalogItem, CatalogItemVariation, CatalogObject, CreateCustomerRequest,
    CreateInvoiceRequest, CreatePaymentRequest, CreatePaymentResponse, CreateSubscriptionRequest,
    Customer, Dispute, DisputeEvidence, DisputeState, Invoice, InvoiceRecipient, InvoiceStatus,
    ListCatalogResponse, ListDisputesResponse, ListInvoicesResponse, LoyaltyAccount,
    LoyaltyEventPoints, LoyaltyProgram, Money, Order, OrderLineItem, OrderState, Payment,
    PaymentRefund, RefundPaymentRequest, SearchOrdersDateTimeFilter, SearchOrdersFilter,
    SearchOrdersQuery, SearchOrdersRequest, SearchOrdersResponse, Subscription,
    SubscriptionStatus, TimeRange, UpdateCustomerRequest, UpdateSubscriptionRequest,
};
