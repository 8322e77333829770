//! # Delta SDK
//!
//! A signed REST client for the Delta derivatives exchange.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Shared types, domain models, errors, network constants
//! 2. **Auth**: Credentials + HMAC-SHA256 request signing
//! 3. **HTTP API**: `DeltaHttp` stamps, signs and sends once, then unwraps the envelope
//! 4. **High-Level Client**: `DeltaClient` with nested sub-clients
//! 5. **Glue**: Environment config and the buy-then-sell round trip
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use delta_sdk::prelude::*;
//!
//! let client = DeltaClient::builder(Credentials::new("key", "secret"))
//!     .base_url(TESTNET_API_URL)
//!     .build()?;
//!
//! let products = client.products().list_tradable().await?;
//! let order = client
//!     .orders()
//!     .place_market(products[0].id.clone(), Side::Buy, Decimal::ONE)
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and the clock seam.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL and path constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Credentials and request signing.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// Signed HTTP client over a pluggable transport.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `DeltaClient`, the primary entry point.
pub mod client;

// ── Layer 5: Glue ────────────────────────────────────────────────────────────

/// Environment-driven configuration.
pub mod config;

/// Random-product buy/sell cycle.
pub mod round_trip;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Clock, ProductId, Side, SystemClock};

    // Domain types (product)
    pub use crate::domain::product::{
        Product, ProductFilter, ProductValidationError, TradabilityPolicy, TradingStatus,
    };

    // Domain types (order)
    pub use crate::domain::order::{
        OrderRequest, OrderResult, OrderState, OrderType, OrderValidationError,
    };

    // Errors
    pub use crate::error::{ApiError, ConfigError, SdkError, TransportError, ValidationError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, MAINNET_API_URL, TESTNET_API_URL};

    // Auth
    pub use crate::auth::{sign, Credentials};

    // HTTP client + sub-clients
    pub use crate::client::{DeltaClient, DeltaClientBuilder, OrdersClient, ProductsClient};
    pub use crate::http::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

    // Config + round trip
    pub use crate::config::ClientConfig;
    pub use crate::round_trip::{run_round_trip, RoundTripConfig, RoundTripError, RoundTripReport};

    pub use rust_decimal::Decimal;
}
