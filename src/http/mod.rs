//! HTTP client layer: signed requests over a pluggable transport.

pub mod client;
pub mod envelope;
pub mod transport;

pub use client::DeltaHttp;
pub use envelope::Envelope;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
