//! Round trip: pick a tradable product, market-buy it, pause, market-sell it.
//!
//! Sequencing is the caller's job as far as the client is concerned; this
//! module is that caller. The sell is only sent once the buy has been
//! acknowledged. Nothing is compensated automatically: if the sell fails the
//! position stays open and the error carries the acknowledged buy.

use crate::client::DeltaClient;
use crate::domain::order::OrderResult;
use crate::domain::product::{Product, TradabilityPolicy};
use crate::error::SdkError;
use crate::shared::Side;

use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;
use std::time::Duration;
use thiserror::Error;

/// Default pause between the buy and the sell.
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(3);

/// Fallback order size when a product states no minimum.
pub const DEFAULT_ORDER_SIZE: Decimal = Decimal::ONE;

/// Smallest size ever sent.
pub const MIN_ORDER_SIZE: Decimal = Decimal::from_parts(1, 0, 0, false, 4);

#[derive(Debug, Clone, PartialEq)]
pub struct RoundTripConfig {
    pub pause: Duration,
    /// Overrides the product-derived size.
    pub size: Option<Decimal>,
}

impl Default for RoundTripConfig {
    fn default() -> Self {
        Self {
            pause: DEFAULT_PAUSE,
            size: None,
        }
    }
}

/// Outcome of a completed round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTripReport {
    pub product: Product,
    pub size: Decimal,
    pub buy: OrderResult,
    pub sell: OrderResult,
}

#[derive(Error, Debug)]
pub enum RoundTripError {
    #[error("failed to list products: {0}")]
    ListProducts(#[source] SdkError),

    #[error("no tradable products among {listed} listed")]
    NoTradableProducts { listed: usize },

    #[error("buy of {symbol} failed: {source}")]
    Buy {
        symbol: String,
        #[source]
        source: SdkError,
    },

    #[error("sell of {symbol} failed after buy order {} was accepted: {source}", .buy.id)]
    Sell {
        symbol: String,
        buy: Box<OrderResult>,
        #[source]
        source: SdkError,
    },
}

/// Pick one product uniformly among those tradable under `policy`.
pub fn pick_random_tradable<'a, R: Rng + ?Sized>(
    products: &'a [Product],
    policy: TradabilityPolicy,
    rng: &mut R,
) -> Option<&'a Product> {
    let tradable: Vec<&Product> = products.iter().filter(|p| p.is_tradable(policy)).collect();
    tradable.choose(rng).copied()
}

/// Product minimum size, else [`DEFAULT_ORDER_SIZE`], never below [`MIN_ORDER_SIZE`].
pub fn default_order_size(product: &Product) -> Decimal {
    product
        .min_size
        .unwrap_or(DEFAULT_ORDER_SIZE)
        .max(MIN_ORDER_SIZE)
}

/// Run one round trip on a random tradable product.
pub async fn run_round_trip<R: Rng + ?Sized>(
    client: &DeltaClient,
    config: &RoundTripConfig,
    rng: &mut R,
) -> Result<RoundTripReport, RoundTripError> {
    let products = client
        .products()
        .list()
        .await
        .map_err(RoundTripError::ListProducts)?;

    let product = pick_random_tradable(&products, client.tradability(), rng)
        .cloned()
        .ok_or(RoundTripError::NoTradableProducts {
            listed: products.len(),
        })?;

    let size = config
        .size
        .unwrap_or_else(|| default_order_size(&product))
        .max(MIN_ORDER_SIZE);

    tracing::info!(
        product_id = %product.id,
        symbol = %product.symbol,
        %size,
        "Selected product for round trip"
    );

    let orders = client.orders();

    let buy = orders
        .place_market(product.id.clone(), Side::Buy, size)
        .await
        .map_err(|source| RoundTripError::Buy {
            symbol: product.symbol.clone(),
            source,
        })?;

    tracing::info!(order_id = buy.id, pause = ?config.pause, "Buy accepted, pausing before sell");
    tokio::time::sleep(config.pause).await;

    let sell = match orders.place_market(product.id.clone(), Side::Sell, size).await {
        Ok(sell) => sell,
        Err(source) => {
            tracing::error!(
                buy_order_id = buy.id,
                symbol = %product.symbol,
                "Sell failed, position left open"
            );
            return Err(RoundTripError::Sell {
                symbol: product.symbol.clone(),
                buy: Box::new(buy),
                source,
            });
        }
    };

    tracing::info!(buy_id = buy.id, sell_id = sell.id, "Round trip complete");

    Ok(RoundTripReport {
        product,
        size,
        buy,
        sell,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::TradingStatus;
    use crate::shared::ProductId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal_macros::dec;

    fn product(id: i64, status: TradingStatus, min_size: Option<Decimal>) -> Product {
        Product {
            id: ProductId::Int(id),
            symbol: format!("P{}", id),
            description: None,
            contract_type: None,
            status,
            min_size,
            contract_value: None,
            tick_size: None,
        }
    }

    #[test]
    fn test_min_order_size_constant() {
        assert_eq!(MIN_ORDER_SIZE, dec!(0.0001));
    }

    #[test]
    fn test_default_order_size() {
        assert_eq!(
            default_order_size(&product(1, TradingStatus::Tradable, None)),
            dec!(1)
        );
        assert_eq!(
            default_order_size(&product(1, TradingStatus::Tradable, Some(dec!(0.01)))),
            dec!(0.01)
        );
        assert_eq!(
            default_order_size(&product(1, TradingStatus::Tradable, Some(dec!(0.00001)))),
            dec!(0.0001)
        );
        assert_eq!(
            default_order_size(&product(1, TradingStatus::Tradable, Some(dec!(0)))),
            dec!(0.0001)
        );
    }

    #[test]
    fn test_pick_only_tradable() {
        let products = vec![
            product(1, TradingStatus::Halted, None),
            product(2, TradingStatus::Tradable, None),
            product(3, TradingStatus::Unknown, None),
        ];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked =
                pick_random_tradable(&products, TradabilityPolicy::RequireExplicit, &mut rng)
                    .unwrap();
            assert_eq!(picked.id, ProductId::Int(2));
        }
    }

    #[test]
    fn test_pick_with_assume_policy_reaches_unknown() {
        let products = vec![
            product(1, TradingStatus::Halted, None),
            product(3, TradingStatus::Unknown, None),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        let picked =
            pick_random_tradable(&products, TradabilityPolicy::AssumeTradable, &mut rng).unwrap();
        assert_eq!(picked.id, ProductId::Int(3));
    }

    #[test]
    fn test_pick_none_tradable() {
        let products = vec![product(1, TradingStatus::Halted, None)];
        let mut rng = StdRng::seed_from_u64(0);
        assert!(
            pick_random_tradable(&products, TradabilityPolicy::AssumeTradable, &mut rng).is_none()
        );
    }
}
