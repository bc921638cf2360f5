//! The SDK entry point.

use std::sync::{Arc, OnceLock};

use crate::clients::{HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::config::{ApiToken, BaseUrl, ClientConfig};
use crate::error::ConfigError;
use crate::rest::resources::{ClientsResource, InvoicesResource, ItemsResource};
use crate::rest::Resource;

/// Client for the Invoice System API.
///
/// Owns the configuration and one pooled connection. The resource accessors
/// are created on first use and cached, and all of them share that
/// connection. Separate `InvoiceSystemClient`s never share a connection.
///
/// # Example
///
/// ```rust,ignore
/// use invoice_sdk::InvoiceSystemClient;
///
/// let sdk = InvoiceSystemClient::with_base_url("http://127.0.0.1:8000/api/v1", Some("token"))?;
///
/// let client = sdk.clients().create("Juan Pérez", "juan@example.com")?;
/// let item = sdk.items().create("Widget", "W-1", 9.99)?;
/// let invoice = sdk.invoices().create(client.id, None)?;
/// ```
#[derive(Debug)]
pub struct InvoiceSystemClient {
    config: ClientConfig,
    http: Arc<HttpClient>,
    clients: OnceLock<ClientsResource>,
    items: OnceLock<ItemsResource>,
    invoices: OnceLock<InvoicesResource>,
}

// Verify InvoiceSystemClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<InvoiceSystemClient>();
};

impl InvoiceSystemClient {
    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientInit`] if the connection cannot be
    /// initialized.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let http = HttpClient::new(&config)?;

        tracing::debug!(
            base_url = %config.base_url(),
            authenticated = config.token().is_some(),
            "Created Invoice System client"
        );

        Ok(Self {
            config,
            http: Arc::new(http),
            clients: OnceLock::new(),
            items: OnceLock::new(),
            invoices: OnceLock::new(),
        })
    }

    /// Creates a client from a base URL and an optional bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the URL or token is invalid, or the
    /// connection cannot be initialized.
    pub fn with_base_url(base_url: &str, token: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = ClientConfig::builder().base_url(BaseUrl::new(base_url)?);
        if let Some(token) = token {
            builder = builder.token(ApiToken::new(token)?);
        }
        Self::new(builder.build()?)
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        self.config.base_url()
    }

    /// Access to `clients/`.
    pub fn clients(&self) -> &ClientsResource {
        self.clients
            .get_or_init(|| ClientsResource::new(Resource::new(Arc::clone(&self.http))))
    }

    /// Access to `items/`.
    pub fn items(&self) -> &ItemsResource {
        self.items
            .get_or_init(|| ItemsResource::new(Resource::new(Arc::clone(&self.http))))
    }

    /// Access to `invoices/`.
    pub fn invoices(&self) -> &InvoicesResource {
        self.invoices
            .get_or_init(|| InvoicesResource::new(Resource::new(Arc::clone(&self.http))))
    }

    /// Sends a raw request through the shared connection.
    ///
    /// For endpoints the typed resources do not cover.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] exactly as dispatch reports it.
    pub fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.http.request(request)
    }
}
