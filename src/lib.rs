//! # Invoice System Rust SDK
//!
//! A typed, resource-oriented client for the Invoice System REST API.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for the base URL and bearer token
//! - A single entry point, [`InvoiceSystemClient`], exposing the `clients`,
//!   `items` and `invoices` resources
//! - Typed records ([`ClientRecord`], [`ItemRecord`], [`InvoiceRecord`])
//!   instead of raw JSON
//! - A generic [`Resource<T>`](rest::Resource) with list, get, create,
//!   update, partial update and delete
//! - Convenience finders (`get_by_email`, `get_by_sku`, `get_by_client`)
//! - Semantic errors via [`ResourceError`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use invoice_sdk::InvoiceSystemClient;
//!
//! let sdk = InvoiceSystemClient::with_base_url("http://127.0.0.1:8000/api/v1/", None)?;
//!
//! let client = sdk.clients().create("Juan Pérez", "juan@example.com")?;
//! assert_eq!(sdk.clients().get(client.id)?, client);
//!
//! let renamed = sdk.clients().update(client.id, "Juan P.", "juan@example.com")?;
//! assert_eq!(renamed.id, client.id);
//!
//! let item = sdk.items().create("Widget", "W-1", 9.99)?;
//! assert_eq!(sdk.items().get_by_sku("W-1")?, item);
//!
//! sdk.clients().delete(client.id)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use invoice_sdk::{ApiToken, BaseUrl, ClientConfig, InvoiceSystemClient};
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("https://billing.example.com/api/v1").unwrap())
//!     .token(ApiToken::new("secret-token").unwrap())
//!     .user_agent_prefix("Accounting/3.1")
//!     .build()
//!     .unwrap();
//!
//! let sdk = InvoiceSystemClient::new(config).unwrap();
//! assert_eq!(sdk.base_url().as_ref(), "https://billing.example.com/api/v1/");
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use invoice_sdk::ResourceError;
//!
//! match sdk.items().create("Widget", "W-1", "9.99") {
//!     Ok(item) => println!("created {}", item.id),
//!     Err(ResourceError::ValidationFailed { errors, .. }) => {
//!         for (field, messages) in errors {
//!             println!("{field}: {}", messages.join(", "));
//!         }
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Logging
//!
//! The SDK emits [`tracing`] events: `debug` for every request and response,
//! `warn` when a single-match finder sees several matches. Install a
//! subscriber in the application to see them.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Blocking**: Calls return once the response is decoded; do not call
//!   from inside an async runtime

mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use client::InvoiceSystemClient;
pub use config::{ApiToken, BaseUrl, ClientConfig, ClientConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export resource types
pub use rest::resources::{
    ClientChanges, ClientFilters, ClientRecord, ClientsResource, InvoiceChanges, InvoiceFilters,
    InvoiceLineRecord, InvoiceRecord, InvoicesResource, ItemChanges, ItemFilters, ItemRecord,
    ItemsResource, NewClient, NewInvoice, NewItem,
};
pub use rest::{ListParams, ListResponse, ResourceError};
