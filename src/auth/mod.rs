//! Authentication: API credentials and HMAC request signing.
//!
//! ## Security Model
//!
//! - The API key travels in the `api-key` header of every private request.
//! - The API secret is only ever used as the HMAC key. It is never sent,
//!   never logged, and never appears in `Debug` output or error messages.
//! - Every request gets its own timestamp and signature. Nothing is cached.

pub mod signer;

pub use signer::{sign, CanonicalRequest, RequestSigner, SignedHeaders};

use std::fmt;

/// API key + secret pair. Immutable once constructed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// HMAC key. Crate-private so it cannot leak through the public API.
    pub(crate) fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new("my-key", "super-secret-value");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("my-key"));
        assert!(!debug.contains("super-secret-value"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_accessors() {
        let creds = Credentials::new("k", "s");
        assert_eq!(creds.api_key(), "k");
        assert_eq!(creds.api_secret(), "s");
    }
}
