//! Data models for the commerce API.
//!
//! One type per request/response shape or entity. Every model follows the
//! same convention: required fields are plain typed struct fields supplied to
//! `new` and always serialized; optional fields are
//! [`Field<T>`](crate::Field) tri-states, skipped when unset. Field
//! declaration order is wire order, and wire names are snake_case.
//!
//! Models are plain value holders: no validation, no I/O, no identity beyond
//! their fields. Encode them with [`JsonBody`](crate::JsonBody).

pub mod catalog;
pub mod common;
pub mod customers;
pub mod disputes;
pub mod errors;
pub mod invoices;
pub mod loyalty;
pub mod money;
pub mod orders;
pub mod payments;
pub mod subscriptions;

pub use catalog::{CatalogItem, CatalogItemVariation, CatalogObject, ListCatalogResponse};
pub use common::{Address, TimeRange};
pub use customers::{CreateCustomerRequest, Customer, UpdateCustomerRequest};
pub use disputes::{Dispute, DisputeEvidence, DisputeState, ListDisputesResponse};
pub use errors::ApiError;
pub use invoices::{
    CreateInvoiceRequest, Invoice, InvoiceRecipient, InvoiceStatus, ListInvoicesResponse,
};
pub use loyalty::{
    AccumulateLoyaltyPointsRequest, AccumulateLoyaltyPointsResponse, LoyaltyAccount,
    LoyaltyEventPoints, LoyaltyProgram,
};
pub use money::Money;
pub use orders::{
    Order, OrderLineItem, OrderState, SearchOrdersDateTimeFilter, SearchOrdersFilter,
    SearchOrdersQuery, SearchOrdersRequest, SearchOrdersResponse,
};
pub use payments::{
    AdditionalRecipient, CreatePaymentRequest, CreatePaymentResponse, Payment, PaymentRefund,
    RefundPaymentRequest,
};
pub use subscriptions::{
    CreateSubscriptionRequest, Subscription, SubscriptionStatus, UpdateSubscriptionRequest,
};
