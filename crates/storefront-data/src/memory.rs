//! In-memory content store.

use std::collections::HashMap;

use async_trait::async_trait;
use storefront_commerce::catalog::{Discount, Product, ProductDetail};
use storefront_commerce::ProductId;

use crate::{ContentError, ContentStore};

/// A discount and the products it applies to.
#[derive(Debug, Clone)]
struct DiscountEntry {
    discount: Discount,
    applicable: Vec<ProductId>,
}

/// Content store held in memory, for local development and tests.
///
/// Discounts are matched in insertion order; the first whose applicable
/// products include the requested identifier wins.
#[derive(Debug, Default, Clone)]
pub struct InMemoryContentStore {
    products: HashMap<ProductId, Product>,
    discounts: Vec<DiscountEntry>,
}

impl InMemoryContentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a product.
    pub fn with_product(mut self, product: Product) -> Self {
        self.products.insert(product.id.clone(), product);
        self
    }

    /// Add a discount applicable to the given products.
    pub fn with_discount<I, P>(mut self, discount: Discount, applicable: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ProductId>,
    {
        self.discounts.push(DiscountEntry {
            discount,
            applicable: applicable.into_iter().map(Into::into).collect(),
        });
        self
    }

    fn lookup(&self, id: &ProductId) -> Result<ProductDetail, ContentError> {
        let product = self
            .products
            .get(id)
            .cloned()
            .ok_or_else(|| ContentError::NotFound(id.clone()))?;

        let discount = self
            .discounts
            .iter()
            .find(|entry| entry.applicable.contains(id))
            .map(|entry| entry.discount.clone());

        Ok(ProductDetail::new(product, discount))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ContentStore for InMemoryContentStore {
    async fn fetch_product_with_discount(&self, id: &ProductId) -> Result<ProductDetail, ContentError> {
        if id.as_str().is_empty() {
            return Err(ContentError::MissingIdentifier);
        }
        self.lookup(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InMemoryContentStore {
        InMemoryContentStore::new()
            .with_product(Product::new("a", "Armchair", 120.0))
            .with_product(Product::new("b", "Bench", 80.0))
            .with_discount(Discount::new(10.0, "FIRST"), ["b"])
            .with_discount(Discount::new(25.0, "SECOND"), ["a", "b"])
    }

    #[tokio::test]
    async fn test_first_matching_discount_wins() {
        let detail = store().fetch_product_with_discount(&ProductId::new("b")).await.unwrap();
        assert_eq!(detail.discount.map(|d| d.code), Some("FIRST".to_string()));

        let detail = store().fetch_product_with_discount(&ProductId::new("a")).await.unwrap();
        assert_eq!(detail.discount.map(|d| d.code), Some("SECOND".to_string()));
    }

    #[tokio::test]
    async fn test_product_without_discount() {
        let store = InMemoryContentStore::new().with_product(Product::new("c", "Chair", 10.0));
        let detail = store.fetch_product_with_discount(&ProductId::new("c")).await.unwrap();
        assert!(detail.discount.is_none());
    }

    #[tokio::test]
    async fn test_unknown_product() {
        let err = store().fetch_product_with_discount(&ProductId::new("zzz")).await.unwrap_err();
        assert_eq!(err, ContentError::NotFound(ProductId::new("zzz")));
    }
}
