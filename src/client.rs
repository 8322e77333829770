//! High-level client: `DeltaClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods.

use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::domain::order::client::Orders;
use crate::domain::product::client::Products;
use crate::domain::product::TradabilityPolicy;
use crate::error::{ConfigError, SdkError};
use crate::http::transport::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT};
use crate::http::{DeltaHttp, ReqwestTransport, Transport};
use crate::network::{DEFAULT_API_URL, DEFAULT_USER_AGENT};
use crate::shared::{Clock, SystemClock};

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::product::client::Products as ProductsClient;

/// The primary entry point for the Delta SDK.
///
/// Holds the credentials, base URL and transport, all immutable after
/// construction. Cheap to clone; clones share the transport.
#[derive(Clone, Debug)]
pub struct DeltaClient {
    pub(crate) http: DeltaHttp,
    pub(crate) tradability: TradabilityPolicy,
}

impl DeltaClient {
    pub fn builder(credentials: Credentials) -> DeltaClientBuilder {
        DeltaClientBuilder::new(credentials)
    }

    /// Build a client from loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, SdkError> {
        DeltaClientBuilder::new(config.credentials.clone())
            .base_url(&config.base_url)
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .tradability(config.tradability)
            .build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn products(&self) -> Products<'_> {
        Products { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn tradability(&self) -> TradabilityPolicy {
        self.tradability
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct DeltaClientBuilder {
    credentials: Credentials,
    base_url: String,
    user_agent: String,
    connect_timeout: Duration,
    timeout: Duration,
    tradability: TradabilityPolicy,
    transport: Option<Arc<dyn Transport>>,
    clock: Option<Arc<dyn Clock>>,
}

impl DeltaClientBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
            tradability: TradabilityPolicy::default(),
            transport: None,
            clock: None,
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn tradability(mut self, policy: TradabilityPolicy) -> Self {
        self.tradability = policy;
        self
    }

    /// Replace the HTTP transport. Timeouts are then the transport's concern.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the timestamp source.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> Result<DeltaClient, SdkError> {
        let base_url = self.base_url.trim();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                name: "base_url",
                reason: format!("'{}' is not an http(s) URL", base_url),
            }
            .into());
        }

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.connect_timeout, self.timeout)?),
        };
        let clock: Arc<dyn Clock> = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        tracing::debug!(
            base_url,
            tradability = %self.tradability,
            "Built Delta client"
        );

        Ok(DeltaClient {
            http: DeltaHttp::new(
                base_url,
                self.credentials,
                &self.user_agent,
                transport,
                clock,
            ),
            tradability: self.tradability,
        })
    }
}
