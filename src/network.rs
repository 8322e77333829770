//! Network URL and endpoint constants for the Delta SDK.

/// Testnet REST API base URL. The default.
pub const TESTNET_API_URL: &str = "https://testnet-api.delta.exchange";

/// Production REST API base URL.
pub const MAINNET_API_URL: &str = "https://api.delta.exchange";

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = TESTNET_API_URL;

/// Product listing path (also the prefix for single-product lookups).
pub const PRODUCTS_PATH: &str = "/v2/products";

/// Order placement path.
pub const ORDERS_PATH: &str = "/v2/orders";

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("delta-sdk-rust/", env!("CARGO_PKG_VERSION"));
