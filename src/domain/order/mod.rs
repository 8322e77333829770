//! Order domain: order requests, local validation, placed-order results.

pub mod client;
mod convert;
pub mod wire;

use crate::error::ValidationError;
use crate::shared::{ProductId, Side};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ─── OrderType ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    Market,
    Limit,
}

impl OrderType {
    /// Exchange wire value.
    pub fn as_wire(&self) -> &'static str {
        match self {
            OrderType::Market => "market_order",
            OrderType::Limit => "limit_order",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OrderType::Market => write!(f, "market"),
            OrderType::Limit => write!(f, "limit"),
        }
    }
}

impl FromStr for OrderType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "market" | "market_order" => Ok(OrderType::Market),
            "limit" | "limit_order" => Ok(OrderType::Limit),
            _ => Err(ValidationError::InvalidOrderType(s.to_string())),
        }
    }
}

// ─── OrderState ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderState {
    Open,
    Pending,
    Closed,
    Cancelled,
    /// A state this SDK does not know about, kept verbatim.
    Other(String),
}

impl From<&str> for OrderState {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "open" => OrderState::Open,
            "pending" => OrderState::Pending,
            "closed" => OrderState::Closed,
            "cancelled" | "canceled" => OrderState::Cancelled,
            _ => OrderState::Other(s.to_string()),
        }
    }
}

// ─── OrderRequest ────────────────────────────────────────────────────────────

/// An order to submit. Validated locally before anything is signed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub product_id: ProductId,
    pub side: Side,
    pub size: Decimal,
    pub order_type: OrderType,
    /// Required for limit orders, ignored for market orders.
    pub limit_price: Option<Decimal>,
    pub client_order_id: Option<String>,
}

impl OrderRequest {
    pub fn market(product_id: impl Into<ProductId>, side: Side, size: Decimal) -> Self {
        Self {
            product_id: product_id.into(),
            side,
            size,
            order_type: OrderType::Market,
            limit_price: None,
            client_order_id: None,
        }
    }

    pub fn limit(
        product_id: impl Into<ProductId>,
        side: Side,
        size: Decimal,
        limit_price: Decimal,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            side,
            size,
            order_type: OrderType::Limit,
            limit_price: Some(limit_price),
            client_order_id: None,
        }
    }

    pub fn with_client_order_id(mut self, client_order_id: impl Into<String>) -> Self {
        self.client_order_id = Some(client_order_id.into());
        self
    }

    /// Build from loosely-typed input (`"buy"`, `"market"`...) and validate.
    pub fn parse(
        product_id: impl Into<ProductId>,
        side: &str,
        size: Decimal,
        order_type: &str,
        limit_price: Option<Decimal>,
    ) -> Result<Self, ValidationError> {
        let request = Self {
            product_id: product_id.into(),
            side: side.parse()?,
            size,
            order_type: order_type.parse()?,
            limit_price,
            client_order_id: None,
        };
        request.validate()?;
        Ok(request)
    }

    /// Reject input the exchange would refuse anyway.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.size <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveSize(self.size));
        }
        if self.order_type == OrderType::Limit {
            match self.limit_price {
                None => return Err(ValidationError::MissingLimitPrice),
                Some(price) if price <= Decimal::ZERO => {
                    return Err(ValidationError::NonPositiveLimitPrice(price))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Wire body in the exchange's field order.
    pub fn to_wire(&self) -> wire::PlaceOrderBody<'_> {
        wire::PlaceOrderBody {
            product_id: &self.product_id,
            size: self.size,
            side: self.side,
            order_type: self.order_type.as_wire(),
            limit_price: match self.order_type {
                OrderType::Limit => self.limit_price.map(|p| p.normalize().to_string()),
                OrderType::Market => None,
            },
            client_order_id: self.client_order_id.as_deref(),
        }
    }
}

// ─── OrderResult ─────────────────────────────────────────────────────────────

/// A placed order as acknowledged by the exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResult {
    /// Server-assigned order id.
    pub id: i64,
    pub product_id: Option<ProductId>,
    pub product_symbol: Option<String>,
    pub side: Option<Side>,
    pub size: Option<Decimal>,
    pub unfilled_size: Option<Decimal>,
    pub order_type: Option<OrderType>,
    pub limit_price: Option<Decimal>,
    pub average_fill_price: Option<Decimal>,
    pub state: OrderState,
    pub client_order_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl OrderResult {
    /// Filled quantity, when both size fields were reported.
    pub fn filled_size(&self) -> Option<Decimal> {
        Some(self.size? - self.unfilled_size?)
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum OrderValidationError {
    MissingId,
}

impl std::fmt::Display for OrderValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OrderValidationError::MissingId => write!(f, "Order response has no id"),
        }
    }
}

impl std::error::Error for OrderValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_type_from_str() {
        assert_eq!("market".parse::<OrderType>().unwrap(), OrderType::Market);
        assert_eq!("LIMIT_ORDER".parse::<OrderType>().unwrap(), OrderType::Limit);
        assert_eq!(
            "stop".parse::<OrderType>().unwrap_err(),
            ValidationError::InvalidOrderType("stop".to_string())
        );
    }

    #[test]
    fn test_parse_valid_market() {
        let request = OrderRequest::parse(1, "buy", dec!(1), "market", None).unwrap();
        assert_eq!(request, OrderRequest::market(1, Side::Buy, dec!(1)));
    }

    #[test]
    fn test_parse_rejects_bad_side() {
        let err = OrderRequest::parse(1, "hold", dec!(1), "market", None).unwrap_err();
        assert_eq!(err, ValidationError::InvalidSide("hold".to_string()));
    }

    #[test]
    fn test_validate_size() {
        assert_eq!(
            OrderRequest::market(1, Side::Buy, dec!(0)).validate(),
            Err(ValidationError::NonPositiveSize(dec!(0)))
        );
        assert_eq!(
            OrderRequest::market(1, Side::Sell, dec!(-2)).validate(),
            Err(ValidationError::NonPositiveSize(dec!(-2)))
        );
    }

    #[test]
    fn test_validate_limit_price() {
        let err = OrderRequest::parse(1, "sell", dec!(1), "limit", None).unwrap_err();
        assert_eq!(err, ValidationError::MissingLimitPrice);

        assert_eq!(
            OrderRequest::limit(1, Side::Sell, dec!(1), dec!(0)).validate(),
            Err(ValidationError::NonPositiveLimitPrice(dec!(0)))
        );
        assert!(OrderRequest::limit(1, Side::Sell, dec!(1), dec!(42000.5))
            .validate()
            .is_ok());
    }

    #[test]
    fn test_market_order_drops_limit_price() {
        let mut request = OrderRequest::market(1, Side::Buy, dec!(1));
        request.limit_price = Some(dec!(100));
        assert!(request.validate().is_ok());
        assert!(request.to_wire().limit_price.is_none());
    }

    #[test]
    fn test_order_state_from_str() {
        assert_eq!(OrderState::from("open"), OrderState::Open);
        assert_eq!(OrderState::from("canceled"), OrderState::Cancelled);
        assert_eq!(
            OrderState::from("untriggered"),
            OrderState::Other("untriggered".to_string())
        );
    }
}
