//! HMAC-SHA256 request signing.
//!
//! The exchange re-derives the signature from what it receives, so the
//! canonical message must be rebuilt exactly:
//!
//! ```text
//! method + timestamp + path + query_string + body
//! ```
//!
//! concatenated with no separators. `query_string` keeps its leading `?`
//! (or is empty) and `body` is the exact byte sequence put on the wire.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::Credentials;

type HmacSha256 = Hmac<Sha256>;

/// The fields of one request, in signing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalRequest<'a> {
    /// Uppercase HTTP verb.
    pub method: &'a str,
    /// Unix seconds as a plain decimal string.
    pub timestamp: &'a str,
    /// URL path starting with `/`, without the query.
    pub path: &'a str,
    /// `?a=b&c=d` or empty.
    pub query: &'a str,
    /// Serialized request body, empty for GET.
    pub body: &'a [u8],
}

impl<'a> CanonicalRequest<'a> {
    /// The message bytes the signature covers.
    pub fn message(&self) -> Vec<u8> {
        let mut message = Vec::with_capacity(
            self.method.len()
                + self.timestamp.len()
                + self.path.len()
                + self.query.len()
                + self.body.len(),
        );
        message.extend_from_slice(self.method.as_bytes());
        message.extend_from_slice(self.timestamp.as_bytes());
        message.extend_from_slice(self.path.as_bytes());
        message.extend_from_slice(self.query.as_bytes());
        message.extend_from_slice(self.body);
        message
    }

    /// Lowercase hex HMAC-SHA256 of [`message`](Self::message) keyed by `secret`.
    pub fn sign(&self, secret: &str) -> String {
        let mut mac =
            HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take any size");
        // Feeding the parts in order is equivalent to hashing the concatenation.
        mac.update(self.method.as_bytes());
        mac.update(self.timestamp.as_bytes());
        mac.update(self.path.as_bytes());
        mac.update(self.query.as_bytes());
        mac.update(self.body);
        hex::encode(mac.finalize().into_bytes())
    }
}

/// Sign one request. Pure and deterministic.
pub fn sign(
    secret: &str,
    method: &str,
    timestamp: &str,
    path: &str,
    query: &str,
    body: &[u8],
) -> String {
    CanonicalRequest {
        method,
        timestamp,
        path,
        query,
        body,
    }
    .sign(secret)
}

/// Authentication header values for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub api_key: String,
    pub timestamp: String,
    pub signature: String,
}

/// Signs requests with a fixed set of [`Credentials`].
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Produce the `api-key`, `timestamp` and `signature` header values.
    pub fn sign(
        &self,
        method: &str,
        timestamp: u64,
        path: &str,
        query: &str,
        body: &[u8],
    ) -> SignedHeaders {
        let timestamp = timestamp.to_string();
        let signature = sign(
            self.credentials.api_secret(),
            method,
            &timestamp,
            path,
            query,
            body,
        );

        SignedHeaders {
            api_key: self.credentials.api_key().to_string(),
            timestamp,
            signature,
        }
    }
}
