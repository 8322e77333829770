//! Wire types for product responses (REST).
//!
//! Field names drifted across API versions, so every variant is accepted
//! side by side and reconciled in `convert.rs`.

use crate::shared::serde_util::lenient_decimal;
use crate::shared::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw product from `GET /v2/products`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    #[serde(
        default,
        rename = "productId",
        skip_serializing_if = "Option::is_none"
    )]
    pub product_id_camel: Option<ProductId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    // Tradability flags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tradeable: Option<bool>,
    /// `live`, `expired`, `upcoming`...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// `operational`, `disrupted_cancel_only`, `disrupted_post_only`...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trading_status: Option<String>,

    // Sizing
    #[serde(default, with = "lenient_decimal", skip_serializing)]
    pub min_size: Option<Decimal>,
    #[serde(default, with = "lenient_decimal", skip_serializing)]
    pub minimum_order_size: Option<Decimal>,
    #[serde(default, with = "lenient_decimal", skip_serializing)]
    pub min_order_size: Option<Decimal>,
    #[serde(default, with = "lenient_decimal", skip_serializing)]
    pub lot_size: Option<Decimal>,
    #[serde(default, with = "lenient_decimal", skip_serializing)]
    pub contract_value: Option<Decimal>,
    #[serde(default, with = "lenient_decimal", skip_serializing)]
    pub tick_size: Option<Decimal>,
}
