//! JSON body encoding for API models.
//!
//! Request bodies sent to the API follow one convention for every model:
//!
//! 1. Serialize the model to a draft JSON value. Required fields always
//!    appear; unset optional fields are skipped; optional fields that were
//!    assigned appear, possibly as `null`.
//! 2. Post-filter the draft: every object entry whose value is exactly
//!    `null` is dropped. This also removes optional fields explicitly set to
//!    null, so the wire output treats "explicitly cleared" the same as
//!    "never set". The in-memory tri-state ([`Field`](crate::Field)) is not
//!    lossy; only the encoded body is. This matches the observed behavior of
//!    the server's reference clients and is deliberately replicated here.
//!    Nulls inside arrays are kept; the filter applies to object entries
//!    only.
//! 3. An object left with zero keys encodes as `[]` by default, or `{}` when
//!    requested. Historic consumers of the wire format distinguish the two
//!    empty shapes, so both are supported.
//!
//! # Examples
//!
//! ```
//! use commerce_models::{JsonBody, Money};
//!
//! let money = Money::new(500, "USD");
//! let body = money.to_body()?;
//! assert_eq!(body.to_string(), r#"{"amount":500,"currency":"USD"}"#);
//! # Ok::<(), commerce_models::ModelError>(())
//! ```

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::{ModelError, Result};

/// Encodes a model into the wire body convention described in the
/// [module docs](self).
///
/// Blanket-implemented for every serializable model in this crate. The trait
/// only requires [`Serialize`]; the decode helpers additionally require
/// [`DeserializeOwned`].
pub trait JsonBody: Serialize {
    /// Encodes the model, emitting `[]` for empty objects.
    ///
    /// Equivalent to [`to_body_with(false)`](Self::to_body_with).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Json`] if serde serialization fails.
    fn to_body(&self) -> Result<Value> {
        self.to_body_with(false)
    }

    /// Encodes the model, choosing the empty-object marker.
    ///
    /// With `empty_as_object` false an object that ends up with zero keys
    /// after the null post-filter encodes as `[]`; with true it encodes as
    /// `{}`. The marker applies recursively to nested models.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Json`] if serde serialization fails.
    fn to_body_with(&self, empty_as_object: bool) -> Result<Value> {
        let draft = serde_json::to_value(self)?;
        Ok(scrub(draft, empty_as_object))
    }

    /// Decodes a model from a wire body.
    ///
    /// Direct serde deserialization: a missing key becomes
    /// [`Field::Unset`](crate::Field::Unset), an explicit `null` becomes
    /// [`Field::Null`](crate::Field::Null). No validation beyond type shape
    /// is performed.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Json`] if the body does not match the model
    /// shape.
    fn from_body(body: Value) -> Result<Self>
    where
        Self: DeserializeOwned + Sized,
    {
        serde_json::from_value(body).map_err(|err| {
            tracing::debug!(error = %err, "failed to decode response body");
            ModelError::Json(err)
        })
    }

    /// Decodes a model from raw response bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Json`] if the bytes are not valid JSON or do
    /// not match the model shape.
    fn from_body_slice(body: &[u8]) -> Result<Self>
    where
        Self: DeserializeOwned + Sized,
    {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_body(value)
    }
}

impl<T: Serialize> JsonBody for T {}

/// Applies the null post-filter and empty markers to a draft value.
///
/// Recurses through objects and arrays. Object entries that are `null` after
/// recursion are dropped; an object left empty becomes `[]` (or `{}` when
/// `empty_as_object`). Array elements are kept verbatim apart from recursion,
/// including nulls.
fn scrub(value: Value, empty_as_object: bool) -> Value {
    match value {
        Value::Object(map) => {
            let filtered: serde_json::Map<String, Value> = map
                .into_iter()
                .map(|(k, v)| (k, scrub(v, empty_as_object)))
                .filter(|(_, v)| !v.is_null())
                .collect();
            if filtered.is_empty() && !empty_as_object {
                Value::Array(Vec::new())
            } else {
                Value::Object(filtered)
            }
        }
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|v| scrub(v, empty_as_object)).collect())
        }
        other => other,
    }
}
