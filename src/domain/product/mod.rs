//! Product domain: instruments, tradability, listing filters.

pub mod client;
mod convert;
pub mod wire;

use crate::error::ConfigError;
use crate::shared::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ─── TradingStatus ───────────────────────────────────────────────────────────

/// Normalized tradability, derived from whichever flags the payload carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradingStatus {
    /// At least one flag says tradable and none says otherwise.
    Tradable,
    /// Some flag says the product cannot be traded.
    Halted,
    /// The payload carried no tradability flags at all.
    Unknown,
}

// ─── TradabilityPolicy ───────────────────────────────────────────────────────

/// How to treat products whose payload carries no tradability flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradabilityPolicy {
    /// Only products with an explicit positive flag are tradable.
    #[default]
    RequireExplicit,
    /// Products without flags are tradable. Explicit negatives still exclude.
    AssumeTradable,
}

impl TradabilityPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradabilityPolicy::RequireExplicit => "explicit",
            TradabilityPolicy::AssumeTradable => "assume",
        }
    }
}

impl fmt::Display for TradabilityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TradabilityPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "explicit" | "require_explicit" => Ok(TradabilityPolicy::RequireExplicit),
            "assume" | "assume_tradable" => Ok(TradabilityPolicy::AssumeTradable),
            other => Err(ConfigError::InvalidValue {
                name: "tradability",
                reason: format!("'{}' is not one of: explicit, assume", other),
            }),
        }
    }
}

// ─── Product ─────────────────────────────────────────────────────────────────

/// An instrument, normalized from any of the exchange's payload shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub symbol: String,
    pub description: Option<String>,
    /// e.g. `perpetual_futures`, `call_options`.
    pub contract_type: Option<String>,
    pub status: TradingStatus,
    /// Minimum order size as stated by the payload, unfloored.
    pub min_size: Option<Decimal>,
    pub contract_value: Option<Decimal>,
    pub tick_size: Option<Decimal>,
}

impl Product {
    /// Whether the product may be traded under `policy`.
    pub fn is_tradable(&self, policy: TradabilityPolicy) -> bool {
        match self.status {
            TradingStatus::Tradable => true,
            TradingStatus::Halted => false,
            TradingStatus::Unknown => policy == TradabilityPolicy::AssumeTradable,
        }
    }
}

/// Keep only the products tradable under `policy`, preserving order.
pub fn filter_tradable(products: Vec<Product>, policy: TradabilityPolicy) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| p.is_tradable(policy))
        .collect()
}

// ─── ProductFilter ───────────────────────────────────────────────────────────

/// Server-side listing filters, sent as a (signed) query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub contract_types: Vec<String>,
    pub states: Vec<String>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contract_type(mut self, contract_type: impl Into<String>) -> Self {
        self.contract_types.push(contract_type.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.states.push(state.into());
        self
    }

    /// `?contract_types=a,b&states=live`, or empty when no filter is set.
    pub fn to_query(&self) -> String {
        let mut params = Vec::new();
        if !self.contract_types.is_empty() {
            params.push(format!("contract_types={}", join_encoded(&self.contract_types)));
        }
        if !self.states.is_empty() {
            params.push(format!("states={}", join_encoded(&self.states)));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

fn join_encoded(values: &[String]) -> String {
    values
        .iter()
        .map(|v| urlencoding::encode(v).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ProductValidationError {
    MissingId { symbol: Option<String> },
    MissingSymbol { id: ProductId },
}

impl fmt::Display for ProductValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductValidationError::MissingId { symbol } => match symbol {
                Some(symbol) => write!(f, "Product {} has no id", symbol),
                None => write!(f, "Product has neither id nor symbol"),
            },
            ProductValidationError::MissingSymbol { id } => {
                write!(f, "Product {} has no symbol", id)
            }
        }
    }
}

impl std::error::Error for ProductValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(status: TradingStatus) -> Product {
        Product {
            id: ProductId::Int(1),
            symbol: "BTCUSD".to_string(),
            description: None,
            contract_type: None,
            status,
            min_size: None,
            contract_value: None,
            tick_size: None,
        }
    }

    #[test]
    fn test_policy_on_unknown_status() {
        let p = product(TradingStatus::Unknown);
        assert!(!p.is_tradable(TradabilityPolicy::RequireExplicit));
        assert!(p.is_tradable(TradabilityPolicy::AssumeTradable));
    }

    #[test]
    fn test_explicit_flags_override_policy() {
        for policy in [
            TradabilityPolicy::RequireExplicit,
            TradabilityPolicy::AssumeTradable,
        ] {
            assert!(product(TradingStatus::Tradable).is_tradable(policy));
            assert!(!product(TradingStatus::Halted).is_tradable(policy));
        }
    }

    #[test]
    fn test_default_policy_is_explicit() {
        assert_eq!(TradabilityPolicy::default(), TradabilityPolicy::RequireExplicit);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "assume".parse::<TradabilityPolicy>().unwrap(),
            TradabilityPolicy::AssumeTradable
        );
        assert_eq!(
            "Explicit".parse::<TradabilityPolicy>().unwrap(),
            TradabilityPolicy::RequireExplicit
        );
        assert!("maybe".parse::<TradabilityPolicy>().is_err());
    }

    #[test]
    fn test_filter_query_empty() {
        assert_eq!(ProductFilter::new().to_query(), "");
    }

    #[test]
    fn test_filter_query() {
        let filter = ProductFilter::new()
            .with_contract_type("perpetual_futures")
            .with_state("live");
        assert_eq!(
            filter.to_query(),
            "?contract_types=perpetual_futures&states=live"
        );
    }

    #[test]
    fn test_filter_query_joins_and_encodes() {
        let filter = ProductFilter::new()
            .with_contract_type("call_options")
            .with_contract_type("put options");
        assert_eq!(
            filter.to_query(),
            "?contract_types=call_options,put%20options"
        );
    }

    #[test]
    fn test_filter_tradable_preserves_order() {
        let mut a = product(TradingStatus::Tradable);
        a.symbol = "A".to_string();
        let b = product(TradingStatus::Halted);
        let mut c = product(TradingStatus::Unknown);
        c.symbol = "C".to_string();

        let kept = filter_tradable(vec![a, b, c], TradabilityPolicy::AssumeTradable);
        let symbols: Vec<_> = kept.iter().map(|p| p.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["A", "C"]);
    }
}
