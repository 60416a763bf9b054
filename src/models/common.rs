//! Shared building blocks used across model families.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Field;

/// A postal address.
///
/// Every field is optional on the wire; the API accepts whatever subset the
/// caller knows. Construct with [`Address::default`] and set the fields you
/// have.
///
/// # Examples
///
/// ```
/// use commerce_models::{Address, JsonBody};
///
/// let mut address = Address::default();
/// address.address_line_1.set("500 Electric Ave".to_owned());
/// address.locality.set("New York".to_owned());
/// address.country.set("US".to_owned());
///
/// let body = address.to_body()?;
/// assert!(body.get("address_line_2").is_none());
/// # Ok::<(), commerce_models::ModelError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    /// First line of the street address.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub address_line_1: Field<String>,
    /// Second line of the street address.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub address_line_2: Field<String>,
    /// City or town.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub locality: Field<String>,
    /// State, province, or prefecture.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub administrative_district_level_1: Field<String>,
    /// Postal or ZIP code.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub postal_code: Field<String>,
    /// Country code (ISO 3166-1 alpha-2).
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub country: Field<String>,
}

/// A half-open time window over RFC 3339 timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeRange {
    /// Inclusive start of the window.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub start_at: Field<DateTime<Utc>>,
    /// Exclusive end of the window.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub end_at: Field<DateTime<Utc>>,
}
