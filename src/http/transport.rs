//! Transport seam: one HTTP round trip, no retries.
//!
//! [`ReqwestTransport`] is the production implementation. Tests swap in a
//! recording transport through `DeltaClientBuilder::transport`.

use crate::error::{ConfigError, TransportError};

use async_trait::async_trait;
use reqwest::{Client, Method};
use std::time::Duration;

/// Default TCP/TLS connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default overall request timeout (connect + send + read).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A fully signed request, ready to put on the wire.
///
/// `body` holds the exact bytes that were signed.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Operation name for error context (e.g. `list_products`).
    pub operation: &'static str,
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// First header value with the given name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response: status code plus the undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the raw response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// `reqwest`-backed transport with bounded connect and overall timeouts.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let operation = request.operation;
        let mut req = self.client.request(request.method, &request.url);

        for (name, value) in request.headers {
            req = req.header(name, value);
        }

        // Raw string body, never `.json()`: the bytes sent must be the bytes signed.
        if let Some(body) = request.body {
            req = req.body(body);
        }

        let resp = req.send().await.map_err(|e| map_reqwest(operation, e))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| map_reqwest(operation, e))?;

        Ok(HttpResponse { status, body })
    }
}

fn map_reqwest(operation: &'static str, error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout { operation }
    } else {
        TransportError::Request {
            operation,
            source: error,
        }
    }
}
