//! Generic REST resource for CRUD operations.
//!
//! This module defines the [`RestResource`] trait, implemented by every
//! record type the API returns, and [`Resource<T>`], which maps the CRUD
//! operations onto HTTP verbs and URL patterns for that record type.
//!
//! # Implementing a Resource
//!
//! 1. Define a record struct with serde derives
//! 2. Define a filters struct for list queries (or use `()`)
//! 3. Implement [`RestResource`] with the endpoint and name constants
//!
//! # Example
//!
//! ```rust
//! use invoice_sdk::rest::RestResource;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Deserialize)]
//! pub struct Payment {
//!     pub id: u64,
//!     pub amount: String,
//! }
//!
//! #[derive(Debug, Clone, Default, Serialize)]
//! pub struct PaymentFilters {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub invoice: Option<u64>,
//! }
//!
//! impl RestResource for Payment {
//!     type Filters = PaymentFilters;
//!
//!     const NAME: &'static str = "payment";
//!     const ENDPOINT: &'static str = "payments";
//!
//!     fn id(&self) -> u64 {
//!         self.id
//!     }
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::marker::PhantomData;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{HttpClient, HttpRequest, HttpResponse};
use crate::rest::{build_path, ListResponse, ResourceError, ResourceOperation};

/// A record type served by a REST endpoint.
///
/// # Associated Types
///
/// - `Filters`: Typed query filters accepted by the list operation
///
/// # Associated Constants
///
/// - `NAME`: The singular resource name used in errors and logs (e.g., "client")
/// - `ENDPOINT`: The collection path relative to the base URL (e.g., "clients")
///
/// # Required Bounds
///
/// Records must be deserializable, cloneable, and thread-safe.
pub trait RestResource: DeserializeOwned + Clone + Send + Sync + Sized {
    /// Typed filters for list operations.
    ///
    /// Use `()` if the endpoint accepts none.
    type Filters: Serialize + Default + Clone + Send + Sync;

    /// The singular name of the resource (e.g., "client").
    const NAME: &'static str;

    /// The collection path, without slashes (e.g., "clients").
    const ENDPOINT: &'static str;

    /// Returns the server-assigned identifier.
    fn id(&self) -> u64;
}

/// Query parameters for list operations.
///
/// `page` and `page_size` are omitted from the query string when unset.
/// `extra` carries filters the typed `filters` struct does not know about.
///
/// # Example
///
/// ```rust
/// use invoice_sdk::rest::ListParams;
///
/// let params: ListParams<()> = ListParams::new()
///     .page(2)
///     .page_size(10)
///     .filter("ordering", "-id");
///
/// assert_eq!(params.page, Some(2));
/// assert_eq!(params.extra.get("ordering"), Some(&"-id".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListParams<F> {
    /// Page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Records per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Typed filters for the resource.
    #[serde(flatten)]
    pub filters: F,
    /// Additional filters passed through verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl<F: Default> ListParams<F> {
    /// Creates empty list parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F> ListParams<F> {
    /// Sets the page number.
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Replaces the typed filters.
    #[must_use]
    pub fn filters(mut self, filters: F) -> Self {
        self.filters = filters;
        self
    }

    /// Adds an untyped filter.
    ///
    /// Untyped filters share the query string with the typed `filters`. When
    /// both set the same key, the untyped value is sent.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// CRUD operations for one record type, bound to a shared [`HttpClient`].
///
/// Obtained through the typed accessors on
/// [`InvoiceSystemClient`](crate::InvoiceSystemClient). The endpoint is
/// fixed by `T` and cannot change after construction.
///
/// Every method blocks until the response is decoded. Errors from dispatch
/// are classified into [`ResourceError`] with `T::NAME` attached.
pub struct Resource<T> {
    http: Arc<HttpClient>,
    _record: PhantomData<fn() -> T>,
}

impl<T> std::fmt::Debug for Resource<T>
where
    T: RestResource,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resource")
            .field("name", &T::NAME)
            .field("endpoint", &T::ENDPOINT)
            .finish_non_exhaustive()
    }
}

impl<T: RestResource> Resource<T> {
    /// Creates a resource bound to the given connection.
    #[must_use]
    pub const fn new(http: Arc<HttpClient>) -> Self {
        Self {
            http,
            _record: PhantomData,
        }
    }

    /// Returns the collection path for this resource.
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        T::ENDPOINT
    }

    /// Returns the connection this resource dispatches through.
    #[must_use]
    pub const fn http_client(&self) -> &Arc<HttpClient> {
        &self.http
    }

    /// Lists records, optionally paginated and filtered.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the body is neither
    /// a list nor a page envelope of `T`.
    pub fn list(&self, params: &ListParams<T::Filters>) -> Result<ListResponse<T>, ResourceError> {
        let query = serialize_to_query(params).map_err(|source| ResourceError::Encode {
            resource: T::NAME,
            source,
        })?;
        let response = self.send(ResourceOperation::List, None, None, query)?;

        ListResponse::from_value(response.body).map_err(|source| ResourceError::Decode {
            resource: T::NAME,
            source,
        })
    }

    /// Fetches one record by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no record has this ID.
    pub fn get(&self, id: u64) -> Result<T, ResourceError> {
        let response = self.send(ResourceOperation::Get, Some(id), None, HashMap::new())?;
        decode_record(response)
    }

    /// Creates a record from `data`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the server rejects the
    /// payload.
    pub fn create<B: Serialize + ?Sized>(&self, data: &B) -> Result<T, ResourceError> {
        let body = encode_body::<T, B>(data)?;
        let response = self.send(ResourceOperation::Create, None, Some(body), HashMap::new())?;
        decode_record(response)
    }

    /// Replaces the record with ID `id` by `data`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] or
    /// [`ResourceError::ValidationFailed`] as reported by the server.
    pub fn update<B: Serialize + ?Sized>(&self, id: u64, data: &B) -> Result<T, ResourceError> {
        let body = encode_body::<T, B>(data)?;
        let response = self.send(ResourceOperation::Update, Some(id), Some(body), HashMap::new())?;
        decode_record(response)
    }

    /// Modifies only the fields present in `data`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] or
    /// [`ResourceError::ValidationFailed`] as reported by the server.
    pub fn partial_update<B: Serialize + ?Sized>(
        &self,
        id: u64,
        data: &B,
    ) -> Result<T, ResourceError> {
        let body = encode_body::<T, B>(data)?;
        let response = self.send(
            ResourceOperation::PartialUpdate,
            Some(id),
            Some(body),
            HashMap::new(),
        )?;
        decode_record(response)
    }

    /// Deletes the record with ID `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no record has this ID.
    pub fn delete(&self, id: u64) -> Result<(), ResourceError> {
        self.send(ResourceOperation::Delete, Some(id), None, HashMap::new())?;
        Ok(())
    }

    fn send(
        &self,
        operation: ResourceOperation,
        id: Option<u64>,
        body: Option<Value>,
        query: HashMap<String, String>,
    ) -> Result<HttpResponse, ResourceError> {
        debug_assert_eq!(
            operation.targets_member(),
            id.is_some(),
            "{operation} called with id {id:?}"
        );
        let path = build_path(T::ENDPOINT, id);

        let mut builder = HttpRequest::builder(operation.http_method(), path).query(query);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        let request = builder.build()?;

        tracing::debug!(resource = T::NAME, %operation, ?id, "Dispatching resource operation");

        self.http.request(request).map_err(|error| {
            let lookup = id.map(|id| format!("id {id}"));
            let error = ResourceError::from_http_error(error, T::NAME, lookup.as_deref());
            tracing::debug!(resource = T::NAME, %operation, %error, "Resource operation failed");
            error
        })
    }
}

fn decode_record<T: RestResource>(response: HttpResponse) -> Result<T, ResourceError> {
    serde_json::from_value(response.body).map_err(|source| ResourceError::Decode {
        resource: T::NAME,
        source,
    })
}

fn encode_body<T: RestResource, B: Serialize + ?Sized>(data: &B) -> Result<Value, ResourceError> {
    serde_json::to_value(data).map_err(|source| ResourceError::Encode {
        resource: T::NAME,
        source,
    })
}

/// Serializes a params struct to a query parameter map.
fn serialize_to_query<P: Serialize>(params: &P) -> Result<HashMap<String, String>, serde_json::Error> {
    let value = serde_json::to_value(params)?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {} // Skip null values
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    // Comma-separated; non-string elements use their JSON text
                    let values: Vec<String> = arr
                        .into_iter()
                        .map(|v| match v {
                            Value::String(s) => s,
                            other => other.to_string(),
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}

// Verify Resource is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Resource<crate::rest::resources::ClientRecord>>();
};
