//! Path building for REST resources.
//!
//! Every resource lives at a collection path (`clients/`) and a member path
//! (`clients/{id}/`), both relative to the configured base URL. Paths always
//! end in a single `/` because the backend redirects slash-less URLs.
//!
//! # Example
//!
//! ```rust
//! use invoice_sdk::rest::{build_path, ResourceOperation};
//! use invoice_sdk::HttpMethod;
//!
//! assert_eq!(build_path("clients", None), "clients/");
//! assert_eq!(build_path("/clients/", Some(42)), "clients/42/");
//! assert_eq!(ResourceOperation::PartialUpdate.http_method(), HttpMethod::Patch);
//! ```

use std::fmt;

use crate::clients::HttpMethod;

/// Operations that can be performed on a REST resource.
///
/// Each operation corresponds to a specific HTTP method and URL pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// List resources (GET /resources/).
    List,
    /// Fetch a single resource by ID (GET /resources/{id}/).
    Get,
    /// Create a new resource (POST /resources/).
    Create,
    /// Replace an existing resource (PUT /resources/{id}/).
    Update,
    /// Modify some fields of a resource (PATCH /resources/{id}/).
    PartialUpdate,
    /// Delete a resource (DELETE /resources/{id}/).
    Delete,
}

impl ResourceOperation {
    /// Returns the HTTP method for this operation.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        match self {
            Self::List | Self::Get => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::PartialUpdate => HttpMethod::Patch,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns `true` if the operation targets a single member by ID.
    #[must_use]
    pub const fn targets_member(&self) -> bool {
        !matches!(self, Self::List | Self::Create)
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::PartialUpdate => "partial_update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the path for a resource endpoint, optionally addressing one member.
///
/// Stray slashes around `endpoint` are removed so the result never contains
/// a double slash once joined to the base URL.
#[must_use]
pub fn build_path(endpoint: &str, id: Option<u64>) -> String {
    let endpoint = endpoint.trim_matches('/');
    match id {
        Some(id) => format!("{endpoint}/{id}/"),
        None => format!("{endpoint}/"),
    }
}
