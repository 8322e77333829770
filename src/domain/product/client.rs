//! Products sub-client: list, filter, lookup.

use crate::client::DeltaClient;
use crate::domain::product::wire::ProductResponse;
use crate::domain::product::{self, Product, ProductFilter};
use crate::error::{SdkError, TransportError, ValidationError};
use crate::network::PRODUCTS_PATH;

/// Sub-client for product operations. Nothing is cached: every call hits the
/// exchange.
pub struct Products<'a> {
    pub(crate) client: &'a DeltaClient,
}

impl<'a> Products<'a> {
    /// List every product.
    ///
    /// Entries that cannot be normalized (no id, no symbol, wrong shape) are
    /// skipped with a warning rather than failing the whole listing.
    pub async fn list(&self) -> Result<Vec<Product>, SdkError> {
        self.fetch("").await
    }

    /// List products matching a server-side filter.
    pub async fn list_filtered(&self, filter: &ProductFilter) -> Result<Vec<Product>, SdkError> {
        self.fetch(&filter.to_query()).await
    }

    /// List products tradable under the client's tradability policy.
    pub async fn list_tradable(&self) -> Result<Vec<Product>, SdkError> {
        let products = self.list().await?;
        let total = products.len();
        let tradable = product::filter_tradable(products, self.client.tradability);
        tracing::debug!(
            total,
            tradable = tradable.len(),
            policy = %self.client.tradability,
            "Filtered tradable products"
        );
        Ok(tradable)
    }

    /// Get a single product by symbol.
    pub async fn get(&self, symbol: &str) -> Result<Product, SdkError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(ValidationError::EmptySymbol.into());
        }
        // A dot segment would be resolved away by the URL parser, so the
        // path sent would not be the path signed.
        if symbol == "." || symbol == ".." {
            return Err(ValidationError::InvalidSymbol(symbol.to_string()).into());
        }

        let path = format!("{}/{}", PRODUCTS_PATH, urlencoding::encode(symbol));
        let resp: ProductResponse = self.client.http.get("get_product", &path, "").await?;
        resp.try_into().map_err(|e: product::ProductValidationError| {
            SdkError::from(TransportError::Decode {
                operation: "get_product",
                reason: e.to_string(),
            })
        })
    }

    async fn fetch(&self, query: &str) -> Result<Vec<Product>, SdkError> {
        let raw: Vec<serde_json::Value> = self
            .client
            .http
            .get("list_products", PRODUCTS_PATH, query)
            .await?;

        let mut products = Vec::with_capacity(raw.len());
        for entry in raw {
            let converted = serde_json::from_value::<ProductResponse>(entry)
                .map_err(|e| e.to_string())
                .and_then(|wire| Product::try_from(wire).map_err(|e| e.to_string()));
            match converted {
                Ok(p) => products.push(p),
                Err(reason) => tracing::warn!(%reason, "Skipping malformed product"),
            }
        }

        tracing::debug!(count = products.len(), query, "Listed products");
        Ok(products)
    }
}
