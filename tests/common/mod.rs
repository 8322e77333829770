//! Test doubles: a transport that records every request and replays canned
//! responses, and a clock that advances one step per read.

#![allow(dead_code)]

use async_trait::async_trait;
use delta_sdk::auth::Credentials;
use delta_sdk::client::DeltaClient;
use delta_sdk::error::TransportError;
use delta_sdk::http::{HttpRequest, HttpResponse, Transport};
use delta_sdk::shared::Clock;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

pub const API_KEY: &str = "test-key";
pub const API_SECRET: &str = "s3cr3t";
pub const BASE_URL: &str = "https://testnet-api.delta.exchange";
pub const START_TS: u64 = 1_700_000_000;

#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<HttpResponse>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a raw response.
    pub fn push(&self, status: u16, body: impl Into<String>) {
        self.responses.lock().unwrap().push_back(HttpResponse {
            status,
            body: body.into(),
        });
    }

    /// Queue a `200` with a successful envelope around `result`.
    pub fn push_result(&self, result: serde_json::Value) {
        self.push(
            200,
            serde_json::json!({ "success": true, "result": result }).to_string(),
        );
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let operation = request.operation;
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(TransportError::Timeout { operation })
    }
}

/// Returns `start`, `start + 1`, `start + 2`... one value per read.
pub struct SteppingClock {
    next: AtomicU64,
}

impl SteppingClock {
    pub fn starting_at(start: u64) -> Arc<Self> {
        Arc::new(Self {
            next: AtomicU64::new(start),
        })
    }
}

impl Clock for SteppingClock {
    fn unix_timestamp(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

pub fn client_with(transport: Arc<RecordingTransport>) -> DeltaClient {
    DeltaClient::builder(Credentials::new(API_KEY, API_SECRET))
        .base_url(BASE_URL)
        .user_agent("delta-sdk-tests")
        .transport(transport)
        .clock(SteppingClock::starting_at(START_TS))
        .build()
        .expect("client should build")
}
