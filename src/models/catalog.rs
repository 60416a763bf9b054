//! Catalog entities: items, variations, and the polymorphic catalog object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Field, models::errors::ApiError, models::money::Money};

/// A polymorphic catalog entry.
///
/// The API models its catalog as one wrapper type whose `object_type`
/// selects which of the `*_data` fields is populated. Only the wrapper's
/// type and id are required; everything else, including the typed payload,
/// is optional on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogObject {
    /// Discriminator for the payload, e.g. `ITEM` or `ITEM_VARIATION`.
    #[serde(rename = "type")]
    pub object_type: String,
    /// Catalog object identifier. Client-generated ids start with `#`.
    pub id: String,
    /// Last modification timestamp, set by the server.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub updated_at: Field<DateTime<Utc>>,
    /// Server-assigned version for optimistic concurrency.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub version: Field<i64>,
    /// True if the object has been soft-deleted.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub is_deleted: Field<bool>,
    /// Payload when `object_type` is `ITEM`.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub item_data: Field<CatalogItem>,
    /// Payload when `object_type` is `ITEM_VARIATION`.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub item_variation_data: Field<CatalogItemVariation>,
    /// Arbitrary merchant-defined metadata, decoded as raw JSON.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub custom_attribute_values: Field<serde_json::Value>,
}

impl CatalogObject {
    /// Creates a new catalog object of the given type.
    #[must_use]
    pub fn new<S: Into<String>>(object_type: S, id: S) -> Self {
        Self {
            object_type: object_type.into(),
            id: id.into(),
            updated_at: Field::Unset,
            version: Field::Unset,
            is_deleted: Field::Unset,
            item_data: Field::Unset,
            item_variation_data: Field::Unset,
            custom_attribute_values: Field::Unset,
        }
    }
}

/// An item sold by the merchant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Item display name.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    /// Item description shown to buyers.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    /// Category the item belongs to.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub category_id: Field<String>,
    /// Purchasable variations of this item.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub variations: Field<Vec<CatalogObject>>,
}

/// A purchasable variation of a catalog item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogItemVariation {
    /// Id of the parent item.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub item_id: Field<String>,
    /// Variation display name, e.g. `Small`.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    /// `FIXED_PRICING` or `VARIABLE_PRICING`.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub pricing_type: Field<String>,
    /// Price when `pricing_type` is `FIXED_PRICING`.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub price_money: Field<Money>,
    /// Stock keeping unit.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub sku: Field<String>,
}

/// Response to a list-catalog call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListCatalogResponse {
    /// Errors, if the call failed.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub errors: Field<Vec<ApiError>>,
    /// Opaque cursor for the next page; absent on the last page.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub cursor: Field<String>,
    /// Catalog objects in this page.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub objects: Field<Vec<CatalogObject>>,
}
