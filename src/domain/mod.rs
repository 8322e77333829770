//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Rich domain types (normalized, business-logic-ready)
//! - `wire.rs`: Raw serde structs matching exchange payloads
//! - `convert.rs`: `TryFrom`/`From` conversions with validation
//! - `client.rs`: Sub-client with HTTP methods

pub mod order;
pub mod product;
