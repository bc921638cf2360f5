//! Error types for the Invoice System SDK.
//!
//! This module contains the errors raised while building a client: invalid
//! configuration values and failures to open the underlying connection.
//! Errors raised by API calls live next to the layer that produces them
//! ([`HttpError`](crate::clients::HttpError) for dispatch,
//! [`ResourceError`](crate::rest::ResourceError) for resources).
//!
//! # Example
//!
//! ```rust
//! use invoice_sdk::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the SDK.
///
/// Every configuration constructor returns `Result<T, ConfigError>` so that
/// invalid values are rejected before any request is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Expected an http(s) URL such as 'http://127.0.0.1:8000/api/v1/'.")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API token cannot be empty.
    #[error("API token cannot be empty. Omit the token instead of passing an empty one.")]
    EmptyToken,

    /// API token contains characters that cannot be sent in a header.
    #[error("API token must be visible ASCII without whitespace.")]
    InvalidToken,

    /// User agent prefix contains characters that cannot be sent in a header.
    #[error("Invalid user agent prefix '{prefix}'. Control characters are not allowed.")]
    InvalidUserAgentPrefix {
        /// The rejected prefix.
        prefix: String,
    },

    /// The underlying HTTP connection could not be created.
    #[error("Failed to initialize HTTP client: {reason}")]
    HttpClientInit {
        /// Why initialization failed.
        reason: String,
    },
}
