//! Unified SDK error types.
//!
//! Three failure kinds matter to callers:
//!
//! - [`ValidationError`]: bad input, caught before anything is signed or sent.
//! - [`TransportError`]: the request did not complete with a 2xx response.
//!   Safe to retry with backoff (the SDK never retries on its own).
//! - [`ApiError`]: the exchange answered with `success: false`.
//!
//! Use [`SdkError::is_retryable`] to branch without matching on messages.

use rust_decimal::Decimal;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl SdkError {
    /// Whether repeating the same call could succeed.
    ///
    /// Only transport failures qualify. Note that a placed order may have
    /// reached the exchange even when the response was lost.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SdkError::Transport(_))
    }
}

/// Input rejected locally, before any network call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("invalid side '{0}' (expected buy or sell)")]
    InvalidSide(String),

    #[error("invalid order type '{0}' (expected market or limit)")]
    InvalidOrderType(String),

    #[error("order size must be positive, got {0}")]
    NonPositiveSize(Decimal),

    #[error("limit order requires a limit price")]
    MissingLimitPrice,

    #[error("limit price must be positive, got {0}")]
    NonPositiveLimitPrice(Decimal),

    #[error("product symbol cannot be empty")]
    EmptySymbol,

    #[error("invalid product symbol '{0}'")]
    InvalidSymbol(String),
}

/// Network failure, timeout, non-2xx status or unreadable response body.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("{operation}: request failed: {source}")]
    Request {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation}: request timed out")]
    Timeout { operation: &'static str },

    #[error("{operation}: HTTP {status}: {body}")]
    Status {
        operation: &'static str,
        status: u16,
        body: String,
    },

    #[error("{operation}: malformed response: {reason}")]
    Decode {
        operation: &'static str,
        reason: String,
    },
}

impl TransportError {
    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Request { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Well-formed response with `success: false`.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{operation}: exchange rejected request [{code}]: {message}")]
pub struct ApiError {
    pub operation: &'static str,
    /// Server error code, e.g. `insufficient_margin`.
    pub code: String,
    pub message: String,
    /// Raw `error` object from the envelope.
    pub payload: serde_json::Value,
}

impl ApiError {
    /// Build from the envelope's `error` field.
    ///
    /// The exchange sends `{"code": "...", "context": {...}}`; some endpoints
    /// use `message` instead, and a bare string is accepted too.
    pub fn from_payload(operation: &'static str, payload: Option<serde_json::Value>) -> Self {
        let payload = payload.unwrap_or(serde_json::Value::Null);

        let code = payload
            .get("code")
            .and_then(|c| match c {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .unwrap_or_else(|| "unknown".to_string());

        let message = payload
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .or_else(|| payload.as_str().map(str::to_string))
            .or_else(|| payload.get("context").map(|c| c.to_string()))
            .unwrap_or_else(|| code.clone());

        Self {
            operation,
            code,
            message,
            payload,
        }
    }
}

/// Invalid or missing configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}
