//! Conversion: OrderResponse → OrderResult (TryFrom + validation).

use super::wire::OrderResponse;
use super::{OrderResult, OrderState, OrderValidationError};
use chrono::{DateTime, Utc};
use serde_json::Value;

impl TryFrom<OrderResponse> for OrderResult {
    type Error = OrderValidationError;

    fn try_from(source: OrderResponse) -> Result<Self, Self::Error> {
        let id = source.id.ok_or(OrderValidationError::MissingId)?;

        Ok(OrderResult {
            id,
            product_id: source.product_id,
            product_symbol: source.product_symbol,
            side: source.side.as_deref().and_then(|s| s.parse().ok()),
            size: source.size,
            unfilled_size: source.unfilled_size,
            order_type: source.order_type.as_deref().and_then(|t| t.parse().ok()),
            limit_price: source.limit_price,
            average_fill_price: source.average_fill_price,
            state: source
                .state
                .as_deref()
                .map(OrderState::from)
                .unwrap_or(OrderState::Pending),
            client_order_id: source.client_order_id,
            created_at: source.created_at.as_ref().and_then(parse_timestamp),
        })
    }
}

fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| s.parse::<i64>().ok().and_then(DateTime::from_timestamp_micros)),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_micros),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderType;
    use crate::shared::{ProductId, Side};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_full_order_response() {
        let wire: OrderResponse = serde_json::from_str(
            r#"{
                "id": 3024,
                "product_id": 27,
                "product_symbol": "BTCUSD",
                "side": "buy",
                "size": 1,
                "unfilled_size": 0,
                "order_type": "market_order",
                "average_fill_price": "42000.5",
                "state": "closed",
                "client_order_id": "rt-1",
                "created_at": "2024-01-02T03:04:05Z"
            }"#,
        )
        .unwrap();
        let order = OrderResult::try_from(wire).unwrap();

        assert_eq!(order.id, 3024);
        assert_eq!(order.product_id, Some(ProductId::Int(27)));
        assert_eq!(order.side, Some(Side::Buy));
        assert_eq!(order.order_type, Some(OrderType::Market));
        assert_eq!(order.state, OrderState::Closed);
        assert_eq!(order.average_fill_price, Some(dec!(42000.5)));
        assert_eq!(order.filled_size(), Some(dec!(1)));
        assert_eq!(
            order.created_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
        );
    }

    #[test]
    fn test_missing_id_rejected() {
        let err = OrderResult::try_from(OrderResponse::default()).unwrap_err();
        assert_eq!(err, OrderValidationError::MissingId);
    }

    #[test]
    fn test_defaults_for_sparse_response() {
        let wire = OrderResponse {
            id: Some(1),
            side: Some("sideways".to_string()),
            ..Default::default()
        };
        let order = OrderResult::try_from(wire).unwrap();
        assert_eq!(order.state, OrderState::Pending);
        assert!(order.side.is_none());
        assert!(order.filled_size().is_none());
    }

    #[test]
    fn test_microsecond_timestamp() {
        let ts = parse_timestamp(&serde_json::json!(1_700_000_000_000_000i64)).unwrap();
        assert_eq!(ts.timestamp(), 1_700_000_000);
    }
}
