//! HTTP client types for Invoice System API communication.
//!
//! This module provides the dispatch layer: the one place requests are
//! issued and responses are checked and decoded.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The blocking HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A decoded response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`HttpError`]: Everything dispatch can fail with
//!
//! # Example
//!
//! ```rust,ignore
//! use invoice_sdk::{ClientConfig, HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&ClientConfig::default())?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "clients/")
//!     .query_param("page", "1")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request)?;
//! println!("{}", response.body);
//! ```
//!
//! # Retry Behavior
//!
//! None. Every request is sent exactly once and failures are returned to the
//! caller unchanged.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
