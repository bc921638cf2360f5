//! Configuration types for the Invoice System SDK.
//!
//! This module provides the configuration used to construct an
//! [`InvoiceSystemClient`](crate::InvoiceSystemClient).
//!
//! # Overview
//!
//! - [`ClientConfig`]: The immutable configuration owned by a client
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`BaseUrl`]: A validated, slash-normalized API base URL
//! - [`ApiToken`]: A validated bearer token with masked debug output
//!
//! # Example
//!
//! ```rust
//! use invoice_sdk::{ApiToken, BaseUrl, ClientConfig};
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("http://127.0.0.1:8000/api/v1").unwrap())
//!     .token(ApiToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "http://127.0.0.1:8000/api/v1/");
//! ```

mod newtypes;

pub use newtypes::{ApiToken, BaseUrl};

use crate::error::ConfigError;

/// Configuration for an Invoice System client.
///
/// Immutable after construction. Each [`InvoiceSystemClient`](crate::InvoiceSystemClient)
/// owns its own copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: BaseUrl,
    token: Option<ApiToken>,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the bearer token, if configured.
    #[must_use]
    pub const fn token(&self) -> Option<&ApiToken> {
        self.token.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BaseUrl::default(),
            token: None,
            user_agent_prefix: None,
        }
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: [`BaseUrl::DEFAULT`]
/// - `token`: `None` (no `Authorization` header)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<BaseUrl>,
    token: Option<ApiToken>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the bearer token sent with every request.
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUserAgentPrefix`] if the prefix cannot
    /// be sent as a header value. Other fields are validated by their
    /// newtypes before they reach the builder.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        if let Some(prefix) = &self.user_agent_prefix {
            if prefix.chars().any(char::is_control) {
                return Err(ConfigError::InvalidUserAgentPrefix {
                    prefix: prefix.clone(),
                });
            }
        }

        Ok(ClientConfig {
            base_url: self.base_url.unwrap_or_default(),
            token: self.token,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
