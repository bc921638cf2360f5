//! REST resource infrastructure for the Invoice System API.
//!
//! This module provides:
//!
//! - **[`RestResource`] trait**: Binds a record type to its endpoint
//! - **[`Resource<T>`]**: Generic CRUD operations for one record type
//! - **[`ListParams<F>`]**: Paging, typed filters and extra query parameters
//! - **[`ListResponse<T>`]**: A Deref-based wrapper over listed records
//! - **Path building**: `endpoint/` and `endpoint/{id}/` URL patterns
//! - **[`ResourceError`]**: Semantic error types for resource operations
//!
//! The concrete resources (clients, items, invoices) live in [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use invoice_sdk::InvoiceSystemClient;
//! use invoice_sdk::rest::ListParams;
//!
//! let sdk = InvoiceSystemClient::with_base_url("http://127.0.0.1:8000/api/v1/", None)?;
//!
//! // List the second page of clients
//! let page = sdk.clients().list(&ListParams::new().page(2).page_size(20))?;
//! for client in page.iter() {
//!     println!("- {} <{}>", client.name, client.email);
//! }
//!
//! // Generic access to the underlying resource
//! let record = sdk.clients().resource().get(1)?;
//! ```

mod errors;
mod path;
mod resource;
mod response;

pub mod resources;

// Public exports
pub use errors::{ResourceError, NON_FIELD_ERRORS};
pub use path::{build_path, ResourceOperation};
pub use resource::{ListParams, Resource, RestResource};
pub use response::ListResponse;
