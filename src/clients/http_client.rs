//! HTTP client for Invoice System API communication.
//!
//! This module provides the [`HttpClient`] type, the single dispatch point
//! for every request the SDK issues.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, ClientConfig};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Blocking HTTP client for the Invoice System API.
///
/// Owns one pooled `reqwest::blocking::Client` and the default headers
/// derived from a [`ClientConfig`]. Every request goes through
/// [`HttpClient::request`], which checks the status code and decodes the
/// JSON body.
///
/// No retry, backoff or SDK-level timeout is applied.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. It must not be called from inside an
/// async runtime, since the underlying client blocks the calling thread.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::blocking::Client,
    /// Base URL, ending in exactly one `/`.
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientInit`] if the underlying reqwest
    /// client cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Invoice System SDK v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if let Some(token) = config.token() {
            default_headers.insert("Authorization".to_string(), token.bearer());
        }

        let client = reqwest::blocking::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::HttpClientInit {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and returns the decoded response.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction (`base_url + path`)
    /// - Header merging
    /// - Status checking and JSON decoding
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The connection fails or times out (`Network`)
    /// - A non-2xx response is received (`Response`)
    /// - A 2xx response body is not valid JSON (`Decode`)
    pub fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = self.client.request(request.http_method.into(), &url);

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, %url, "Sending request");

        let res = req_builder.send()?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text()?;

        tracing::debug!(method = %request.http_method, %url, status = code, "Received response");

        if (200..=299).contains(&code) {
            let body = if body_text.trim().is_empty() {
                serde_json::Value::Null
            } else {
                serde_json::from_str(&body_text)?
            };
            return Ok(HttpResponse::new(code, res_headers, body));
        }

        // Error bodies that are not JSON are kept as raw text for diagnostics.
        let body = if body_text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::Value::String(body_text.clone()))
        };
        let response = HttpResponse::new(code, res_headers, body);

        Err(HttpError::Response(HttpResponseError::new(
            code,
            response.body.clone(),
            response.request_id().map(String::from),
        )))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
