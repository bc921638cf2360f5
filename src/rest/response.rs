//! List response wrapper for REST resource operations.
//!
//! The backend answers list requests either with a bare JSON array or, when
//! pagination is enabled, with a page envelope:
//!
//! ```json
//! {
//!   "count": 42,
//!   "next": "http://127.0.0.1:8000/api/v1/clients/?page=3",
//!   "previous": "http://127.0.0.1:8000/api/v1/clients/?page=1",
//!   "results": [ ... ]
//! }
//! ```
//!
//! Both shapes decode into [`ListResponse<T>`], which implements
//! `Deref<Target = Vec<T>>` so it can be used like the record list directly:
//!
//! ```rust,ignore
//! let response = client.clients().list(&ListParams::default())?;
//!
//! for record in response.iter() {
//!     println!("{}", record.name);
//! }
//!
//! if response.has_next_page() {
//!     // Request the next page number...
//! }
//!
//! let records: Vec<ClientRecord> = response.into_inner();
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// The records returned by a list operation, plus page metadata if the
/// server sent any.
///
/// `next` and `previous` are passed through verbatim; the SDK does not
/// interpret them.
///
/// # Example
///
/// ```rust
/// use invoice_sdk::rest::ListResponse;
/// use serde_json::json;
///
/// let response: ListResponse<u64> = ListResponse::from_value(json!({
///     "count": 3,
///     "next": "http://127.0.0.1:8000/api/v1/items/?page=2",
///     "previous": null,
///     "results": [1, 2]
/// }))
/// .unwrap();
///
/// assert_eq!(response.len(), 2);
/// assert_eq!(response.count(), Some(3));
/// assert!(response.has_next_page());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListResponse<T> {
    results: Vec<T>,
    count: Option<u64>,
    next: Option<String>,
    previous: Option<String>,
}

/// The page envelope as sent on the wire.
///
/// Extra paginator metadata (e.g. `total_pages`) is ignored.
#[derive(Deserialize)]
struct Page<T> {
    #[serde(default)]
    count: Option<u64>,
    #[serde(default)]
    next: Option<String>,
    #[serde(default)]
    previous: Option<String>,
    results: Vec<T>,
}

impl<T> ListResponse<T> {
    /// Creates a response with no page metadata.
    #[must_use]
    pub const fn new(results: Vec<T>) -> Self {
        Self {
            results,
            count: None,
            next: None,
            previous: None,
        }
    }

    /// Consumes the response and returns the records.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.results
    }

    /// Returns the total number of records across all pages, if known.
    #[must_use]
    pub const fn count(&self) -> Option<u64> {
        self.count
    }

    /// Returns the URL of the next page, if any.
    #[must_use]
    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// Returns the URL of the previous page, if any.
    #[must_use]
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Returns `true` if the server reported a next page.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next.is_some()
    }

    /// Returns `true` if the server reported a previous page.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.previous.is_some()
    }
}

impl<T: DeserializeOwned> ListResponse<T> {
    /// Decodes a list body in either the bare-array or page-envelope shape.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body is neither shape or a
    /// record does not match `T`.
    pub fn from_value(body: serde_json::Value) -> Result<Self, serde_json::Error> {
        if body.is_array() {
            return serde_json::from_value(body).map(Self::new);
        }

        let page: Page<T> = serde_json::from_value(body)?;
        Ok(Self {
            results: page.results,
            count: page.count,
            next: page.next,
            previous: page.previous,
        })
    }
}

impl<T> Deref for ListResponse<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.results
    }
}

impl<T> DerefMut for ListResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.results
    }
}

impl<T> IntoIterator for ListResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

// Verify ListResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ListResponse<String>>();
};
