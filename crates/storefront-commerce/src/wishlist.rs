//! Wishlist collection interface.

use std::sync::Mutex;

use crate::catalog::ProductDetail;
use crate::error::CommerceError;

/// An externally owned wishlist collection.
pub trait WishlistStore: Send + Sync {
    /// Add a product to the wishlist.
    fn add_to_wishlist(&self, detail: ProductDetail) -> Result<(), CommerceError>;
}

/// Process-local wishlist. Adding a product twice keeps one entry.
#[derive(Debug, Default)]
pub struct MemoryWishlist {
    items: Mutex<Vec<ProductDetail>>,
}

impl MemoryWishlist {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the saved products.
    pub fn items(&self) -> Vec<ProductDetail> {
        self.items
            .lock()
            .map(|items| items.clone())
            .unwrap_or_default()
    }
}

impl WishlistStore for MemoryWishlist {
    fn add_to_wishlist(&self, detail: ProductDetail) -> Result<(), CommerceError> {
        let mut items = self
            .items
            .lock()
            .map_err(|e| CommerceError::StorageUnavailable(e.to_string()))?;

        if !items.iter().any(|i| i.product.id == detail.product.id) {
            items.push(detail);
        }
        Ok(())
    }
}
