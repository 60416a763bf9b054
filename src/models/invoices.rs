//! Invoice entities and request/response shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Field, models::errors::ApiError, models::money::Money};

/// Publication state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    /// Created but not yet sent to the buyer.
    Draft,
    /// Sent and awaiting payment.
    Unpaid,
    /// Paid in full.
    Paid,
    /// Partially paid.
    PartiallyPaid,
    /// Canceled by the seller.
    Canceled,
}

/// The customer an invoice is addressed to.
///
/// Only `customer_id` is supplied by the caller; the server fills in the
/// contact fields from the customer profile when the invoice is published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecipient {
    /// Customer to bill.
    pub customer_id: String,
    /// Given name, populated by the server.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub given_name: Field<String>,
    /// Family name, populated by the server.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub family_name: Field<String>,
    /// Email address, populated by the server.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub email_address: Field<String>,
}

impl InvoiceRecipient {
    /// Creates a recipient for the given customer.
    #[must_use]
    pub fn new<S: Into<String>>(customer_id: S) -> Self {
        Self {
            customer_id: customer_id.into(),
            given_name: Field::Unset,
            family_name: Field::Unset,
            email_address: Field::Unset,
        }
    }
}

/// An invoice for an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Location the invoice belongs to.
    pub location_id: String,
    /// Server-assigned invoice identifier.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    /// Order being billed.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub order_id: Field<String>,
    /// Who the invoice is addressed to.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub primary_recipient: Field<InvoiceRecipient>,
    /// Invoice number shown to the buyer.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub invoice_number: Field<String>,
    /// Title shown at the top of the invoice.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub title: Field<String>,
    /// Publication state.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub status: Field<InvoiceStatus>,
    /// Remaining balance.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub next_payment_amount_money: Field<Money>,
    /// Creation timestamp, set by the server.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
}

impl Invoice {
    /// Creates an invoice at the given location.
    #[must_use]
    pub fn new<S: Into<String>>(location_id: S) -> Self {
        Self {
            location_id: location_id.into(),
            id: Field::Unset,
            order_id: Field::Unset,
            primary_recipient: Field::Unset,
            invoice_number: Field::Unset,
            title: Field::Unset,
            status: Field::Unset,
            next_payment_amount_money: Field::Unset,
            created_at: Field::Unset,
        }
    }
}

/// Request body for creating a draft invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateInvoiceRequest {
    /// Draft invoice to create.
    pub invoice: Invoice,
    /// Key that makes the call retry-safe.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub idempotency_key: Field<String>,
}

impl CreateInvoiceRequest {
    /// Creates a request wrapping the given draft invoice.
    #[must_use]
    pub fn new(invoice: Invoice) -> Self {
        Self { invoice, idempotency_key: Field::Unset }
    }
}

/// Response body for a list-invoices call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListInvoicesResponse {
    /// Errors, if the call failed.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub errors: Field<Vec<ApiError>>,
    /// Invoices in this page.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub invoices: Field<Vec<Invoice>>,
    /// Cursor for the next page; absent on the last page.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub cursor: Field<String>,
}
