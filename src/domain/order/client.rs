//! Orders sub-client: place orders.

use crate::client::DeltaClient;
use crate::domain::order::wire::OrderResponse;
use crate::domain::order::{OrderRequest, OrderResult, OrderValidationError};
use crate::error::{SdkError, TransportError};
use crate::network::ORDERS_PATH;
use crate::shared::{ProductId, Side};
use rust_decimal::Decimal;

/// Sub-client for order operations.
pub struct Orders<'a> {
    pub(crate) client: &'a DeltaClient,
}

impl<'a> Orders<'a> {
    /// Validate, sign and submit an order. One POST, no retries.
    ///
    /// Invalid input fails with [`SdkError::Validation`] before anything is
    /// signed or sent.
    pub async fn place(&self, request: &OrderRequest) -> Result<OrderResult, SdkError> {
        request.validate()?;

        tracing::info!(
            product_id = %request.product_id,
            side = %request.side,
            size = %request.size,
            order_type = %request.order_type,
            "Placing order"
        );

        let resp: OrderResponse = self
            .client
            .http
            .post("place_order", ORDERS_PATH, &request.to_wire())
            .await?;

        let order: OrderResult = resp.try_into().map_err(|e: OrderValidationError| {
            SdkError::from(TransportError::Decode {
                operation: "place_order",
                reason: e.to_string(),
            })
        })?;

        tracing::info!(order_id = order.id, state = ?order.state, "Order accepted");
        Ok(order)
    }

    /// Place an order from loosely-typed input, e.g. `("buy", "market")`.
    pub async fn place_order(
        &self,
        product_id: impl Into<ProductId>,
        side: &str,
        size: Decimal,
        order_type: &str,
        limit_price: Option<Decimal>,
    ) -> Result<OrderResult, SdkError> {
        let request = OrderRequest::parse(product_id, side, size, order_type, limit_price)?;
        self.place(&request).await
    }

    /// Place a market order.
    pub async fn place_market(
        &self,
        product_id: impl Into<ProductId>,
        side: Side,
        size: Decimal,
    ) -> Result<OrderResult, SdkError> {
        self.place(&OrderRequest::market(product_id, side, size))
            .await
    }
}
