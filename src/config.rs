//! Client configuration loaded from environment variables.
//!
//! | Variable                     | Required | Default                              |
//! |------------------------------|----------|--------------------------------------|
//! | `DELTA_API_KEY`              | yes      |                                      |
//! | `DELTA_API_SECRET`           | yes      |                                      |
//! | `DELTA_BASE_URL`             | no       | `https://testnet-api.delta.exchange` |
//! | `DELTA_CONNECT_TIMEOUT_SECS` | no       | `5`                                  |
//! | `DELTA_TIMEOUT_SECS`         | no       | `30`                                 |
//! | `DELTA_TRADABILITY`          | no       | `explicit` (or `assume`)             |

use crate::auth::Credentials;
use crate::domain::product::TradabilityPolicy;
use crate::error::ConfigError;
use crate::http::transport::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT};
use crate::network::DEFAULT_API_URL;

use std::time::Duration;

pub const ENV_API_KEY: &str = "DELTA_API_KEY";
pub const ENV_API_SECRET: &str = "DELTA_API_SECRET";
pub const ENV_BASE_URL: &str = "DELTA_BASE_URL";
pub const ENV_CONNECT_TIMEOUT: &str = "DELTA_CONNECT_TIMEOUT_SECS";
pub const ENV_TIMEOUT: &str = "DELTA_TIMEOUT_SECS";
pub const ENV_TRADABILITY: &str = "DELTA_TRADABILITY";

/// Everything needed to construct a [`DeltaClient`](crate::client::DeltaClient).
///
/// `Debug` never prints the secret.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub credentials: Credentials,
    pub base_url: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub tradability: TradabilityPolicy,
}

impl ClientConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_API_URL.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
            tradability: TradabilityPolicy::default(),
        }
    }

    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get(ENV_API_KEY).ok_or(ConfigError::MissingVar(ENV_API_KEY))?;
        let api_secret = get(ENV_API_SECRET).ok_or(ConfigError::MissingVar(ENV_API_SECRET))?;

        let mut config = Self::new(Credentials::new(api_key, api_secret));

        if let Some(base_url) = get(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(raw) = get(ENV_CONNECT_TIMEOUT) {
            config.connect_timeout = parse_secs(ENV_CONNECT_TIMEOUT, &raw)?;
        }
        if let Some(raw) = get(ENV_TIMEOUT) {
            config.timeout = parse_secs(ENV_TIMEOUT, &raw)?;
        }
        if let Some(raw) = get(ENV_TRADABILITY) {
            config.tradability = raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: ENV_TRADABILITY,
                reason: format!("'{}' is not one of: explicit, assume", raw),
            })?;
        }

        Ok(config)
    }
}

fn parse_secs(name: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidValue {
            name,
            reason: "must be at least 1 second".to_string(),
        }),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(ConfigError::InvalidValue {
            name,
            reason: e.to_string(),
        }),
    }
}
