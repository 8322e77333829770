//! Conversion: ProductResponse → Product (TryFrom + field reconciliation).

use super::wire::ProductResponse;
use super::{Product, ProductValidationError, TradingStatus};
use crate::shared::ProductId;
use rust_decimal::Decimal;

impl TryFrom<ProductResponse> for Product {
    type Error = ProductValidationError;

    fn try_from(source: ProductResponse) -> Result<Self, Self::Error> {
        let status = trading_status(&source);
        let min_size = min_size(&source);

        let symbol = [source.symbol, source.name]
            .into_iter()
            .flatten()
            .map(|s| s.trim().to_string())
            .find(|s| !s.is_empty());

        let id = [source.id, source.product_id, source.product_id_camel]
            .into_iter()
            .flatten()
            .find(|id| !matches!(id, ProductId::Str(s) if s.trim().is_empty()));

        let id = id.ok_or_else(|| ProductValidationError::MissingId {
            symbol: symbol.clone(),
        })?;
        let symbol =
            symbol.ok_or_else(|| ProductValidationError::MissingSymbol { id: id.clone() })?;

        Ok(Product {
            id,
            symbol,
            description: source.description,
            contract_type: source.contract_type.or(source.product_type),
            status,
            min_size,
            contract_value: source.contract_value,
            tick_size: source.tick_size,
        })
    }
}

/// Every flag present votes; a single negative vote halts the product.
fn trading_status(source: &ProductResponse) -> TradingStatus {
    let votes = [
        source.is_active,
        source.tradeable,
        source.state.as_deref().map(|s| s.eq_ignore_ascii_case("live")),
        source
            .trading_status
            .as_deref()
            .map(|s| s.eq_ignore_ascii_case("operational")),
    ];

    if votes.contains(&Some(false)) {
        TradingStatus::Halted
    } else if votes.contains(&Some(true)) {
        TradingStatus::Tradable
    } else {
        TradingStatus::Unknown
    }
}

/// First parseable size field, as stated. Flooring happens where a size is chosen.
fn min_size(source: &ProductResponse) -> Option<Decimal> {
    [
        source.min_size,
        source.minimum_order_size,
        source.lot_size,
        source.min_order_size,
    ]
    .into_iter()
    .flatten()
    .next()
}
