//! Client resource implementation.

use serde::{Deserialize, Serialize};

use crate::rest::{ListParams, ListResponse, Resource, ResourceError, RestResource};

use super::find_first;

/// A billing client as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClientRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl RestResource for ClientRecord {
    type Filters = ClientFilters;

    const NAME: &'static str = "client";
    const ENDPOINT: &'static str = "clients";

    fn id(&self) -> u64 {
        self.id
    }
}

/// Payload for creating or replacing a client.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewClient {
    pub name: String,
    pub email: String,
}

/// Payload for a partial client update. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ClientChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Query filters for listing clients.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ClientFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Operations on `clients/`.
///
/// # Example
///
/// ```rust,ignore
/// let created = sdk.clients().create("Juan Pérez", "juan@example.com")?;
/// let renamed = sdk.clients().update(created.id, "Juan P.", "juan@example.com")?;
/// sdk.clients().delete(renamed.id)?;
/// ```
#[derive(Debug)]
pub struct ClientsResource {
    inner: Resource<ClientRecord>,
}

impl ClientsResource {
    pub(crate) const fn new(inner: Resource<ClientRecord>) -> Self {
        Self { inner }
    }

    /// Returns the generic resource this wraps.
    #[must_use]
    pub const fn resource(&self) -> &Resource<ClientRecord> {
        &self.inner
    }

    /// Lists clients.
    ///
    /// # Errors
    ///
    /// See [`Resource::list`].
    pub fn list(
        &self,
        params: &ListParams<ClientFilters>,
    ) -> Result<ListResponse<ClientRecord>, ResourceError> {
        self.inner.list(params)
    }

    /// Fetches a client by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no client has this ID.
    pub fn get(&self, id: u64) -> Result<ClientRecord, ResourceError> {
        self.inner.get(id)
    }

    /// Creates a client.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the server rejects the
    /// name or email.
    pub fn create(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<ClientRecord, ResourceError> {
        self.inner.create(&NewClient {
            name: name.into(),
            email: email.into(),
        })
    }

    /// Replaces a client's name and email.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] or
    /// [`ResourceError::ValidationFailed`].
    pub fn update(
        &self,
        id: u64,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<ClientRecord, ResourceError> {
        self.inner.update(
            id,
            &NewClient {
                name: name.into(),
                email: email.into(),
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
        changes: &ClientChanges,
    ) -> Result<ClientRecord, ResourceError> {
        self.inner.partial_update(id, changes)
    }

    /// Deletes a client.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no client has this ID.
    pub fn delete(&self, id: u64) -> Result<(), ResourceError> {
        self.inner.delete(id)
    }

    /// Finds the client with exactly this email.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no client matches.
    pub fn get_by_email(&self, email: &str) -> Result<ClientRecord, ResourceError> {
        let params = ListParams::new().filters(ClientFilters {
            email: Some(email.to_string()),
            ..ClientFilters::default()
        });

        find_first(&self.inner, params, "email", email, |record| {
            record.email == email
        })
    }
}
