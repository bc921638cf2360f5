//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated base URL for the Invoice System API.
///
/// The URL must carry an `http` or `https` scheme and a host. It is
/// normalized to end with exactly one `/`, so that resource paths can be
/// appended without producing double slashes.
///
/// # Example
///
/// ```rust
/// use invoice_sdk::BaseUrl;
///
/// let url = BaseUrl::new("http://127.0.0.1:8000/api/v1").unwrap();
/// assert_eq!(url.as_ref(), "http://127.0.0.1:8000/api/v1/");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "127.0.0.1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// The base URL used when none is configured.
    pub const DEFAULT: &'static str = "http://127.0.0.1:8000/api/v1/";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no http(s)
    /// scheme, no host, or carries a query string or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();
        let invalid = || ConfigError::InvalidBaseUrl {
            url: trimmed.to_string(),
        };

        let scheme_end = trimmed.find("://").ok_or_else(invalid)?;
        let scheme = &trimmed[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        // Query strings and fragments would swallow the resource path.
        if trimmed.contains(['?', '#']) || trimmed.contains(char::is_whitespace) {
            return Err(invalid());
        }

        let authority_start = scheme_end + 3;
        let authority_end = trimmed[authority_start..]
            .find('/')
            .map_or(trimmed.len(), |i| authority_start + i);

        // Userinfo precedes the last '@'; IPv6 literals keep their brackets.
        let host_start = trimmed[authority_start..authority_end]
            .rfind('@')
            .map_or(authority_start, |i| authority_start + i + 1);
        let host = &trimmed[host_start..authority_end];
        let host_end = if host.starts_with('[') {
            host.find(']')
                .map(|i| host_start + i + 1)
                .ok_or_else(invalid)?
        } else {
            host.find(':').map_or(authority_end, |i| host_start + i)
        };
        if host_end == host_start {
            return Err(invalid());
        }

        // Collapse any run of trailing slashes into exactly one.
        let normalized = format!("{}/", trimmed.trim_end_matches('/'));
        if normalized.len() <= host_start {
            return Err(invalid());
        }

        Ok(Self {
            url: normalized,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins a relative path onto this base URL.
    ///
    /// Leading slashes on `path` are dropped so the result never contains
    /// a double slash at the seam.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.url, path.trim_start_matches('/'))
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 4,
            host_start: 7,
            host_end: 16,
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// A validated bearer token.
///
/// The token must be non-empty visible ASCII so it can be sent verbatim in
/// the `Authorization` header. Its value is masked in debug output.
///
/// # Example
///
/// ```rust
/// use invoice_sdk::ApiToken;
///
/// let token = ApiToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if the token is empty, or
    /// [`ConfigError::InvalidToken`] if it contains whitespace or
    /// non-ASCII characters.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        if !token.chars().all(|c| c.is_ascii_graphic()) {
            return Err(ConfigError::InvalidToken);
        }
        Ok(Self(token))
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}
