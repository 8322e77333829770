//! Low-level signed HTTP client: `DeltaHttp`.
//!
//! Every request is stamped with a fresh timestamp, signed, sent once, and its
//! envelope unwrapped. Returns wire types; conversion to domain types happens
//! in the sub-clients.

use crate::auth::{Credentials, RequestSigner};
use crate::error::{SdkError, TransportError};
use crate::http::envelope::Envelope;
use crate::http::transport::{HttpRequest, Transport};
use crate::shared::Clock;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Low-level HTTP client for the Delta REST API.
#[derive(Clone)]
pub struct DeltaHttp {
    base_url: String,
    user_agent: String,
    signer: RequestSigner,
    transport: Arc<dyn Transport>,
    clock: Arc<dyn Clock>,
}

impl DeltaHttp {
    pub fn new(
        base_url: &str,
        credentials: Credentials,
        user_agent: &str,
        transport: Arc<dyn Transport>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: user_agent.to_string(),
            signer: RequestSigner::new(credentials),
            transport,
            clock,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Signed GET. `query` is empty or starts with `?`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        query: &str,
    ) -> Result<T, SdkError> {
        let request = self.prepare(operation, Method::GET, path, query, None);
        self.execute(request).await
    }

    /// Signed POST with a JSON body.
    ///
    /// The body is serialized exactly once; the resulting string is both the
    /// signed payload and the transmitted payload.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        operation: &'static str,
        path: &str,
        body: &B,
    ) -> Result<T, SdkError> {
        let payload = serde_json::to_string(body)?;
        let request = self.prepare(operation, Method::POST, path, "", Some(payload));
        self.execute(request).await
    }

    /// Build and sign a request without sending it.
    pub fn prepare(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        query: &str,
        body: Option<String>,
    ) -> HttpRequest {
        let timestamp = self.clock.unix_timestamp();
        let payload = body.as_deref().unwrap_or("");
        let signed = self
            .signer
            .sign(method.as_str(), timestamp, path, query, payload.as_bytes());

        tracing::debug!(
            operation,
            method = %method,
            path,
            query,
            timestamp,
            body_len = payload.len(),
            "Signed request"
        );

        HttpRequest {
            operation,
            url: format!("{}{}{}", self.base_url, path, query),
            method,
            headers: vec![
                ("api-key", signed.api_key),
                ("timestamp", signed.timestamp),
                ("signature", signed.signature),
                ("Content-Type", "application/json".to_string()),
                ("Accept", "application/json".to_string()),
                ("User-Agent", self.user_agent.clone()),
            ],
            body,
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, SdkError> {
        let operation = request.operation;
        let resp = self.transport.send(request).await?;

        if !resp.is_success() {
            tracing::debug!(operation, status = resp.status, "Request rejected");
            return Err(TransportError::Status {
                operation,
                status: resp.status,
                body: resp.body,
            }
            .into());
        }

        let envelope: Envelope<T> =
            serde_json::from_str(&resp.body).map_err(|e| TransportError::Decode {
                operation,
                reason: e.to_string(),
            })?;

        envelope.into_result(operation)
    }
}

impl std::fmt::Debug for DeltaHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeltaHttp")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("signer", &self.signer)
            .finish_non_exhaustive()
    }
}
