//! Cart line items and the cart collection interface.

use std::sync::Mutex;

use crate::catalog::ProductDetail;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// A product placed in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The product, with the discount it was shown with.
    #[serde(flatten)]
    pub detail: ProductDetail,
    /// Number of units.
    pub quantity: u32,
}

impl CartItem {
    /// A single unit of a product.
    pub fn single(detail: ProductDetail) -> Self {
        Self {
            detail,
            quantity: 1,
        }
    }

    /// The product identifier.
    pub fn product_id(&self) -> &ProductId {
        &self.detail.product.id
    }
}

/// An externally owned cart collection.
///
/// The product page only ever appends; how the cart is persisted is up to
/// the implementation.
pub trait CartStore: Send + Sync {
    /// Append an item to the cart.
    fn add_to_cart(&self, item: CartItem) -> Result<(), CommerceError>;
}

/// Process-local cart, merging repeated products into one line.
#[derive(Debug, Default)]
pub struct MemoryCart {
    items: Mutex<Vec<CartItem>>,
}

impl MemoryCart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current lines.
    pub fn items(&self) -> Vec<CartItem> {
        self.items
            .lock()
            .map(|items| items.clone())
            .unwrap_or_default()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items().iter().map(|i| i.quantity as u64).sum()
    }
}

impl CartStore for MemoryCart {
    fn add_to_cart(&self, item: CartItem) -> Result<(), CommerceError> {
        if item.quantity == 0 {
            return Err(CommerceError::InvalidQuantity(item.quantity));
        }

        let mut items = self
            .items
            .lock()
            .map_err(|e| CommerceError::StorageUnavailable(e.to_string()))?;

        if let Some(existing) = items.iter_mut().find(|i| i.product_id() == item.product_id()) {
            let new_quantity = existing
                .quantity
                .checked_add(item.quantity)
                .ok_or(CommerceError::Overflow)?;

            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }

            existing.quantity = new_quantity;
            return Ok(());
        }

        if item.quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                item.quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        items.push(item);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn detail(id: &str) -> ProductDetail {
        ProductDetail::new(Product::new(id, "Chair", 10.0), None)
    }

    #[test]
    fn test_add_new_item() {
        let cart = MemoryCart::new();
        cart.add_to_cart(CartItem::single(detail("a"))).unwrap();

        let items = cart.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 1);
        assert_eq!(items[0].product_id().as_str(), "a");
    }

    #[test]
    fn test_repeated_product_merges() {
        let cart = MemoryCart::new();
        cart.add_to_cart(CartItem::single(detail("a"))).unwrap();
        cart.add_to_cart(CartItem::single(detail("a"))).unwrap();
        cart.add_to_cart(CartItem::single(detail("b"))).unwrap();

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let cart = MemoryCart::new();
        let item = CartItem {
            detail: detail("a"),
            quantity: 0,
        };
        assert_eq!(cart.add_to_cart(item), Err(CommerceError::InvalidQuantity(0)));
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_quantity_limit() {
        let cart = MemoryCart::new();
        let item = CartItem {
            detail: detail("a"),
            quantity: MAX_QUANTITY_PER_ITEM,
        };
        cart.add_to_cart(item).unwrap();

        let result = cart.add_to_cart(CartItem::single(detail("a")));
        assert_eq!(
            result,
            Err(CommerceError::QuantityExceedsLimit(MAX_QUANTITY_PER_ITEM + 1, MAX_QUANTITY_PER_ITEM))
        );
        assert_eq!(cart.item_count(), MAX_QUANTITY_PER_ITEM as u64);
    }

    #[test]
    fn test_cart_item_wire_shape() {
        let json = serde_json::to_value(CartItem::single(detail("a"))).unwrap();
        assert_eq!(json["_id"], "a");
        assert_eq!(json["quantity"], 1);
        assert_eq!(json["title"], "Chair");
    }
}
