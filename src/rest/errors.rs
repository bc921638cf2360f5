//! Resource-level error types for REST operations.
//!
//! Every resource method returns [`ResourceError`]. Dispatch failures
//! ([`HttpError`]) are classified into it with the resource name and the
//! lookup that failed attached.
//!
//! # Error Handling
//!
//! The SDK maps HTTP status codes to semantic error variants:
//!
//! - **400**: [`ResourceError::ValidationFailed`] - Field errors from the API
//! - **401**: [`ResourceError::Unauthorized`]
//! - **403**: [`ResourceError::Forbidden`]
//! - **404**: [`ResourceError::NotFound`] - Resource doesn't exist
//! - **Other 4xx/5xx**: [`ResourceError::UnexpectedStatus`]
//!
//! # Example
//!
//! ```rust,ignore
//! use invoice_sdk::rest::ResourceError;
//!
//! match client.clients().get(42) {
//!     Ok(record) => println!("Found: {}", record.name),
//!     Err(ResourceError::NotFound { resource, lookup }) => {
//!         println!("{resource} {lookup} not found");
//!     }
//!     Err(ResourceError::ValidationFailed { errors, .. }) => {
//!         for (field, messages) in errors {
//!             println!("{field}: {messages:?}");
//!         }
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::collections::HashMap;

use crate::clients::{HttpError, InvalidHttpRequestError};
use thiserror::Error;

/// Key under which errors that are not tied to a field are collected.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use invoice_sdk::rest::ResourceError;
/// use std::collections::HashMap;
///
/// let error = ResourceError::NotFound {
///     resource: "client",
///     lookup: "id 123".to_string(),
/// };
/// assert_eq!(error.to_string(), "client with id 123 not found");
/// assert_eq!(error.status(), Some(404));
///
/// let mut errors = HashMap::new();
/// errors.insert("email".to_string(), vec!["Enter a valid email address.".to_string()]);
/// let error = ResourceError::ValidationFailed {
///     errors,
///     request_id: None,
/// };
/// assert!(error.to_string().contains("Validation failed"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found.
    ///
    /// Returned on HTTP 404, and by single-match finders when no record
    /// matches.
    #[error("{resource} with {lookup} not found")]
    NotFound {
        /// The resource name (e.g., "client", "item").
        resource: &'static str,
        /// What was looked up (e.g., "id 42", "sku W-1").
        lookup: String,
    },

    /// The server rejected the payload (HTTP 400).
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Field name to error messages, as sent by the server.
        errors: HashMap<String, Vec<String>>,
        /// The request ID for debugging (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// Missing or rejected credentials (HTTP 401).
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Message from the response body.
        message: String,
    },

    /// Credentials lack permission (HTTP 403).
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Message from the response body.
        message: String,
    },

    /// Connection failure or timeout before a response was received.
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Any other non-2xx response.
    #[error("Unexpected status {code}: {body}")]
    UnexpectedStatus {
        /// The HTTP status code.
        code: u16,
        /// The response body (raw text is kept as a JSON string).
        body: serde_json::Value,
        /// The request ID for debugging (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// A successful response did not match the expected record shape.
    #[error("Failed to decode {resource} response: {source}")]
    Decode {
        /// The resource name.
        resource: &'static str,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// A request payload or query could not be serialized.
    #[error("Failed to encode {resource} request: {source}")]
    Encode {
        /// The resource name.
        resource: &'static str,
        /// The underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The request failed validation before being sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl ResourceError {
    /// Classifies a dispatch error, attaching resource context.
    ///
    /// `lookup` describes what was requested (e.g., `"id 42"`) and is used
    /// in the `NotFound` message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use invoice_sdk::clients::{HttpError, HttpResponseError};
    /// use invoice_sdk::rest::ResourceError;
    /// use serde_json::json;
    ///
    /// let http_error = HttpError::Response(HttpResponseError::new(
    ///     404,
    ///     json!({"detail": "Not found."}),
    ///     None,
    /// ));
    /// let error = ResourceError::from_http_error(http_error, "item", Some("id 7"));
    /// assert!(matches!(error, ResourceError::NotFound { resource: "item", .. }));
    /// ```
    #[must_use]
    pub fn from_http_error(error: HttpError, resource: &'static str, lookup: Option<&str>) -> Self {
        match error {
            HttpError::Response(response) => match response.code {
                400 => Self::ValidationFailed {
                    errors: parse_validation_errors(&response.body),
                    request_id: response.error_reference,
                },
                401 => Self::Unauthorized {
                    message: response.message,
                },
                403 => Self::Forbidden {
                    message: response.message,
                },
                404 => Self::NotFound {
                    resource,
                    lookup: lookup.unwrap_or("request").to_string(),
                },
                code => Self::UnexpectedStatus {
                    code,
                    body: response.body,
                    request_id: response.error_reference,
                },
            },
            HttpError::InvalidRequest(e) => Self::InvalidRequest(e),
            HttpError::Network(e) => Self::Transport(e),
            HttpError::Decode(source) => Self::Decode { resource, source },
        }
    }

    /// Returns the HTTP status code behind this error, if there is one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::ValidationFailed { .. } => Some(400),
            Self::Unauthorized { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::UnexpectedStatus { code, .. } => Some(*code),
            Self::Transport(_)
            | Self::Decode { .. }
            | Self::Encode { .. }
            | Self::InvalidRequest(_) => None,
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed { request_id, .. } | Self::UnexpectedStatus { request_id, .. } => {
                request_id.as_deref()
            }
            _ => None,
        }
    }
}

/// Parses field errors from a 400 response body.
///
/// The backend sends field errors as an object of lists:
/// ```json
/// {
///   "email": ["client with this email already exists."],
///   "name": ["This field is required."]
/// }
/// ```
///
/// Single strings are accepted in place of lists. A bare list, a bare
/// string and a `detail` message are collected under
/// [`NON_FIELD_ERRORS`].
fn parse_validation_errors(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();

    match body {
        serde_json::Value::Object(map) => {
            for (field, messages) in map {
                let key = if field == "detail" {
                    NON_FIELD_ERRORS
                } else {
                    field.as_str()
                };
                result
                    .entry(key.to_string())
                    .or_default()
                    .extend(message_list(messages));
            }
        }
        serde_json::Value::Array(_) | serde_json::Value::String(_) => {
            let msgs = message_list(body);
            if !msgs.is_empty() {
                result.insert(NON_FIELD_ERRORS.to_string(), msgs);
            }
        }
        _ => {}
    }

    result
}

fn message_list(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(arr) => arr
            .iter()
            .map(|v| v.as_str().map_or_else(|| v.to_string(), ToString::to_string))
            .collect(),
        serde_json::Value::String(s) => vec![s.clone()],
        other => vec![other.to_string()],
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
