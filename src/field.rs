//! Tri-state optional fields for API models.
//!
//! The remote API distinguishes three states for every optional field on a
//! request body:
//!
//! - **Unset**: the field was never touched and must not appear in the
//!   encoded body at all.
//! - **Null**: the field was explicitly assigned null (for example, to ask
//!   the server to clear a stored value).
//! - **Value**: the field holds a concrete value.
//!
//! A plain [`Option`] cannot represent this: `None` conflates "never set"
//! with "explicitly cleared". [`Field`] keeps the two apart.
//!
//! # Examples
//!
//! ```
//! use commerce_models::Field;
//!
//! let mut note: Field<String> = Field::Unset;
//! assert!(note.is_unset());
//!
//! note.set("gift wrap".to_owned());
//! assert_eq!(note.get(), Some(&"gift wrap".to_owned()));
//!
//! note.set_null();
//! assert!(note.is_null());
//! assert_eq!(note.get(), None);
//!
//! note.clear();
//! assert!(note.is_unset());
//! ```
//!
//! Model structs annotate optional fields with
//! `#[serde(default, skip_serializing_if = "Field::is_unset")]` so that a
//! missing wire key decodes to [`Field::Unset`] and an unset field is never
//! encoded.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One optional field on an API model, tracking unset vs null vs value.
///
/// The default state is [`Unset`](Self::Unset), which is also what a missing
/// JSON key deserializes to. A JSON `null` deserializes to
/// [`Null`](Self::Null).
///
/// Note that the body encoder's null post-filter (see
/// [`JsonBody`](crate::body::JsonBody)) removes explicit nulls from the final
/// wire output; the distinction is preserved in memory but not on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<T> {
    /// Never assigned. Absent from the encoded body.
    Unset,
    /// Explicitly assigned null.
    Null,
    /// Holds a concrete value.
    Value(T),
}

impl<T> Field<T> {
    /// Returns true if the field was never assigned.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns true if the field was explicitly assigned null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if the field holds a concrete value.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns the stored value, or `None` when unset or null.
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unset | Self::Null => None,
        }
    }

    /// Assigns a concrete value.
    pub fn set(&mut self, value: T) {
        *self = Self::Value(value);
    }

    /// Marks the field as explicitly cleared (assigned null).
    pub fn set_null(&mut self) {
        *self = Self::Null;
    }

    /// Resets the field to the unset state.
    pub fn clear(&mut self) {
        *self = Self::Unset;
    }

    /// Consumes the field, returning the stored value if any.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unset | Self::Null => None,
        }
    }

    /// Maps the stored value, preserving unset and null states.
    #[must_use]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Self::Value(v) => Field::Value(f(v)),
            Self::Unset => Field::Unset,
            Self::Null => Field::Null,
        }
    }
}

// Not derived: the derive would bound `T: Default`, and Unset is the
// default for every `T`.
impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// `Some(v)` becomes `Value(v)`; `None` becomes `Null` (explicit assignment,
/// not unset). Use [`Field::Unset`] directly for a never-assigned field.
impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::Null,
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Unset fields are skipped at the struct level; if one is
            // serialized directly anyway it encodes as null, exactly like an
            // explicit null, and the body post-filter removes both.
            Self::Unset | Self::Null => serializer.serialize_none(),
            Self::Value(v) => v.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Self::Value(v),
            None => Self::Null,
        })
    }
}
