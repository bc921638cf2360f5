//! Item resource implementation.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::rest::{ListParams, ListResponse, Resource, ResourceError, RestResource};

use super::find_first;

/// A catalogue item as returned by the API.
///
/// `price` is a fixed-point decimal sent as a string (e.g. `"9.99"`) and is
/// kept verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ItemRecord {
    pub id: u64,
    pub name: String,
    pub sku: String,
    pub price: String,
}

impl RestResource for ItemRecord {
    type Filters = ItemFilters;

    const NAME: &'static str = "item";
    const ENDPOINT: &'static str = "items";

    fn id(&self) -> u64 {
        self.id
    }
}

/// Payload for creating or replacing an item.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub sku: String,
    pub price: String,
}

/// Payload for a partial item update.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ItemChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

/// Query filters for listing items.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ItemFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Operations on `items/`.
///
/// Prices are accepted as anything printable (`9.99`, `"9.99"`, a decimal
/// type) and sent in their `Display` form.
#[derive(Debug)]
pub struct ItemsResource {
    inner: Resource<ItemRecord>,
}

impl ItemsResource {
    pub(crate) const fn new(inner: Resource<ItemRecord>) -> Self {
        Self { inner }
    }

    /// Returns the generic resource this wraps.
    #[must_use]
    pub const fn resource(&self) -> &Resource<ItemRecord> {
        &self.inner
    }

    /// Lists items.
    ///
    /// # Errors
    ///
    /// See [`Resource::list`].
    pub fn list(
        &self,
        params: &ListParams<ItemFilters>,
    ) -> Result<ListResponse<ItemRecord>, ResourceError> {
        self.inner.list(params)
    }

    /// Fetches an item by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no item has this ID.
    pub fn get(&self, id: u64) -> Result<ItemRecord, ResourceError> {
        self.inner.get(id)
    }

    /// Creates an item.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the server rejects a
    /// field (e.g. a duplicate SKU).
    pub fn create(
        &self,
        name: impl Into<String>,
        sku: impl Into<String>,
        price: impl Display,
    ) -> Result<ItemRecord, ResourceError> {
        self.inner.create(&NewItem {
            name: name.into(),
            sku: sku.into(),
            price: price.to_string(),
        })
    }

    /// Replaces an item's name, SKU and price.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] or
    /// [`ResourceError::ValidationFailed`].
    pub fn update(
        &self,
        id: u64,
        name: impl Into<String>,
        sku: impl Into<String>,
        price: impl Display,
    ) -> Result<ItemRecord, ResourceError> {
        self.inner.update(
            id,
            &NewItem {
                name: name.into(),
                sku: sku.into(),
                price: price.to_string(),
            },
        )
    }

    /// Changes only the fields set in `changes`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] or
    /// [`ResourceError::ValidationFailed`].
    pub fn partial_update(
        &self,
        id: u64,
        changes: &ItemChanges,
    ) -> Result<ItemRecord, ResourceError> {
        self.inner.partial_update(id, changes)
    }

    /// Deletes an item.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no item has this ID.
    pub fn delete(&self, id: u64) -> Result<(), ResourceError> {
        self.inner.delete(id)
    }

    /// Finds the item with exactly this SKU.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no item matches.
    pub fn get_by_sku(&self, sku: &str) -> Result<ItemRecord, ResourceError> {
        let params = ListParams::new().filters(ItemFilters {
            sku: Some(sku.to_string()),
            ..ItemFilters::default()
        });

        find_first(&self.inner, params, "sku", sku, |record| record.sku == sku)
    }
}
