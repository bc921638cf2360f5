//! Invoice resource implementation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rest::{ListParams, ListResponse, Resource, ResourceError, RestResource};

use super::find_all;

/// An invoice as returned by the API.
///
/// The owning client travels as `client` on the wire. `items` holds the
/// invoice lines when the server nests them and is empty otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InvoiceRecord {
    pub id: u64,
    #[serde(rename = "client")]
    pub client_id: u64,
    pub date: NaiveDate,
    #[serde(default)]
    pub items: Vec<InvoiceLineRecord>,
}

/// One line of an invoice: a quantity of an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InvoiceLineRecord {
    pub id: u64,
    pub invoice: u64,
    pub item: u64,
    pub quantity: i64,
}

impl RestResource for InvoiceRecord {
    type Filters = InvoiceFilters;

    const NAME: &'static str = "invoice";
    const ENDPOINT: &'static str = "invoices";

    fn id(&self) -> u64 {
        self.id
    }
}

/// Payload for creating or replacing an invoice.
///
/// When `date` is unset the server stamps the current date.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewInvoice {
    #[serde(rename = "client")]
    pub client_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// Payload for a partial invoice update.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct InvoiceChanges {
    #[serde(rename = "client", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// Query filters for listing invoices.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct InvoiceFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// Operations on `invoices/`.
#[derive(Debug)]
pub struct InvoicesResource {
    inner: Resource<InvoiceRecord>,
}

impl InvoicesResource {
    pub(crate) const fn new(inner: Resource<InvoiceRecord>) -> Self {
        Self { inner }
    }

    /// Returns the generic resource this wraps.
    #[must_use]
    pub const fn resource(&self) -> &Resource<InvoiceRecord> {
        &self.inner
    }

    /// Lists invoices.
    ///
    /// # Errors
    ///
    /// See [`Resource::list`].
    pub fn list(
        &self,
        params: &ListParams<InvoiceFilters>,
    ) -> Result<ListResponse<InvoiceRecord>, ResourceError> {
        self.inner.list(params)
    }

    /// Fetches an invoice by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no invoice has this ID.
    pub fn get(&self, id: u64) -> Result<InvoiceRecord, ResourceError> {
        self.inner.get(id)
    }

    /// Creates an invoice for `client_id`, dated `date` or today.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the client does not
    /// exist.
    pub fn create(
        &self,
        client_id: u64,
        date: Option<NaiveDate>,
    ) -> Result<InvoiceRecord, ResourceError> {
        self.inner.create(&NewInvoice { client_id, date })
    }

    /// Replaces an invoice's client and date.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] or
    /// [`ResourceError::ValidationFailed`].
    pub fn update(
        &self,
        id: u64,
        client_id: u64,
        date: NaiveDate,
    ) -> Result<InvoiceRecord, ResourceError> {
        self.inner.update(
            id,
            &NewInvoice {
                client_id,
                date: Some(date),
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
        changes: &InvoiceChanges,
    ) -> Result<InvoiceRecord, ResourceError> {
        self.inner.partial_update(id, changes)
    }

    /// Deletes an invoice.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no invoice has this ID.
    pub fn delete(&self, id: u64) -> Result<(), ResourceError> {
        self.inner.delete(id)
    }

    /// Returns every invoice belonging to `client_id`, in server order.
    ///
    /// Every page the server reports is read. An empty list means the client
    /// has no invoices.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the list request fails.
    pub fn get_by_client(&self, client_id: u64) -> Result<Vec<InvoiceRecord>, ResourceError> {
        let params = ListParams::new().filters(InvoiceFilters {
            client: Some(client_id),
            ..InvoiceFilters::default()
        });

        find_all(&self.inner, params, |record| record.client_id == client_id)
    }
}
