//! Error types for the commerce model layer.
//!
//! This layer performs no validation: the only failures are serde encode and
//! decode errors at the JSON boundary. API-level errors returned by the
//! server are ordinary data, carried as [`ApiError`](crate::models::ApiError)
//! values on response models, never as Rust errors.
//!
//! # Examples
//!
//! ```
//! use commerce_models::{JsonBody, ModelError, Money};
//!
//! let result = Money::from_body_slice(b"not json");
//! assert!(matches!(result, Err(ModelError::Json(_))));
//! ```

use thiserror::Error;

/// Result type alias for model-layer operations.
///
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while encoding or decoding model bodies.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum ModelError {
    /// JSON encoding or decoding failed.
    ///
    /// On encode this indicates a serde failure, which for the model types
    /// in this crate should not occur in practice. On decode it means the
    /// response body was not valid JSON or did not match the model shape.
    #[error("JSON body error: {0}")]
    Json(#[from] serde_json::Error),

    /// A decoded body had an unexpected top-level shape.
    ///
    /// Returned when a caller requires a JSON object (for example, a
    /// response envelope) but the body held a scalar or array.
    #[error("unexpected body shape: {0}")]
    UnexpectedShape(String),
}
