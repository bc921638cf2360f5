//! HTTP-specific error types for the Invoice System SDK.
//!
//! These are the errors raised by dispatch ([`HttpClient::request`]). The
//! resource layer classifies them into
//! [`ResourceError`](crate::rest::ResourceError) before returning them to
//! callers.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! [`HttpClient::request`]: crate::clients::HttpClient::request

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// Carries the status code and the response body. A body that is not valid
/// JSON is kept verbatim as a JSON string.
///
/// # Example
///
/// ```rust
/// use invoice_sdk::clients::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError::new(404, json!({"detail": "Not found."}), None);
/// assert_eq!(error.code, 404);
/// assert!(error.to_string().contains("Not found."));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The decoded response body.
    pub body: serde_json::Value,
    /// A short human-readable message derived from the body.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

impl HttpResponseError {
    /// Creates a response error, deriving `message` from the body.
    #[must_use]
    pub fn new(code: u16, body: serde_json::Value, error_reference: Option<String>) -> Self {
        let message = summarize_body(&body);
        Self {
            code,
            body,
            message,
            error_reference,
        }
    }
}

/// Produces a one-line message from an error body.
///
/// Prefers the conventional `detail` / `error` keys, then falls back to the
/// raw JSON text.
fn summarize_body(body: &serde_json::Value) -> String {
    match body {
        serde_json::Value::Null => "empty response body".to_string(),
        serde_json::Value::String(s) => s.clone(),
        _ => ["detail", "error"]
            .iter()
            .find_map(|key| body.get(key).and_then(serde_json::Value::as_str))
            .map_or_else(|| body.to_string(), ToString::to_string),
    }
}

/// Error returned when an HTTP request fails validation before being sent.
///
/// # Example
///
/// ```rust
/// use invoice_sdk::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST, PUT or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was given a body.
    #[error("Cannot send data with {method}.")]
    UnexpectedBody {
        /// The HTTP method that forbids a body.
        method: String,
    },
}

/// Unified error type for all dispatch errors.
///
/// # Example
///
/// ```rust,ignore
/// use invoice_sdk::clients::HttpError;
///
/// match client.request(request) {
///     Ok(response) => { /* handle success */ }
///     Err(HttpError::Response(e)) => { /* non-2xx status */ }
///     Err(HttpError::InvalidRequest(e)) => { /* request never sent */ }
///     Err(HttpError::Network(e)) => { /* transport failure */ }
///     Err(HttpError::Decode(e)) => { /* 2xx body was not JSON */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A successful response carried a body that is not valid JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
