//! API-level errors carried as response data.

use serde::{Deserialize, Serialize};

use crate::Field;

/// One error returned by the API inside a response body.
///
/// API failures are data, not Rust errors: response models carry an
/// `errors` field holding zero or more of these. `category` groups errors
/// by cause (for example `INVALID_REQUEST_ERROR`, `PAYMENT_METHOD_ERROR`)
/// and `code` identifies the specific failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// High-level error category.
    pub category: String,
    /// Specific error code within the category.
    pub code: String,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub detail: Field<String>,
    /// Name of the request field the error applies to, if any.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub field: Field<String>,
}

impl ApiError {
    /// Creates a new error with the required category and code.
    #[must_use]
    pub fn new<S: Into<String>>(category: S, code: S) -> Self {
        Self {
            category: category.into(),
            code: code.into(),
            detail: Field::Unset,
            field: Field::Unset,
        }
    }
}
