//! Wire types for order placement (REST).

use crate::shared::serde_util::{decimal_number, lenient_decimal};
use crate::shared::{ProductId, Side};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Request ─────────────────────────────────────────────────────────────────

/// Body of `POST /v2/orders`.
///
/// Field declaration order is the serialized key order, so the bytes signed
/// and the bytes sent always agree.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlaceOrderBody<'a> {
    pub product_id: &'a ProductId,
    #[serde(serialize_with = "decimal_number::serialize")]
    pub size: Decimal,
    pub side: Side,
    pub order_type: &'static str,
    /// Sent as a string to avoid float rounding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<&'a str>,
}

// ─── Response ────────────────────────────────────────────────────────────────

/// Raw order from the `result` of a placement response.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OrderResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default)]
    pub product_symbol: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default, with = "lenient_decimal")]
    pub size: Option<Decimal>,
    #[serde(default, with = "lenient_decimal")]
    pub unfilled_size: Option<Decimal>,
    #[serde(default)]
    pub order_type: Option<String>,
    #[serde(default, with = "lenient_decimal")]
    pub limit_price: Option<Decimal>,
    #[serde(default, with = "lenient_decimal")]
    pub average_fill_price: Option<Decimal>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub client_order_id: Option<String>,
    /// RFC 3339 string or epoch microseconds, depending on endpoint.
    #[serde(default)]
    pub created_at: Option<serde_json::Value>,
}
