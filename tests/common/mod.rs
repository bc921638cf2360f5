//! Shared fixtures for the integration suites.
//!
//! The SDK is blocking, so the fake backend runs on a dedicated Tokio
//! runtime while SDK calls are made from the plain test thread.

#![allow(dead_code)]

use invoice_sdk::InvoiceSystemClient;
use serde_json::{json, Value};
use wiremock::{Mock, MockServer, Request};

/// A wiremock server plus the runtime that hosts it.
///
/// Field order matters: the server must drop before its runtime.
pub struct TestServer {
    pub server: MockServer,
    rt: tokio::runtime::Runtime,
}

impl TestServer {
    pub fn start() -> Self {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let server = rt.block_on(MockServer::start());
        Self { server, rt }
    }

    /// Base URL of the fake API, ending in `/api/v1/`.
    pub fn base_url(&self) -> String {
        format!("{}/api/v1/", self.server.uri())
    }

    pub fn mount(&self, mock: Mock) {
        self.rt.block_on(mock.mount(&self.server));
    }

    pub fn received_requests(&self) -> Vec<Request> {
        self.rt
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }

    /// An SDK client pointed at this server.
    pub fn client(&self, token: Option<&str>) -> InvoiceSystemClient {
        InvoiceSystemClient::with_base_url(&self.base_url(), token).unwrap()
    }
}

pub fn juan() -> Value {
    json!({"id": 1, "name": "Juan Pérez", "email": "juan@example.com"})
}

pub fn widget() -> Value {
    json!({"id": 5, "name": "Widget", "sku": "W-1", "price": "9.99"})
}
