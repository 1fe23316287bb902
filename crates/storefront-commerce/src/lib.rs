//! E-commerce domain types for the storefront product pages.
//!
//! - **Catalog**: products and their applicable discount
//! - **Cart** / **Wishlist**: the collections a product page appends to
//! - **Money**: cents-based prices for display
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let detail = ProductDetail::new(
//!     Product::new("chair-1", "Library Stool Chair", 50.0),
//!     Some(Discount::new(20.0, "SAVE20")),
//! );
//! assert_eq!(detail.final_price(Currency::USD).display(), "$40.00");
//!
//! let cart = MemoryCart::new();
//! cart.add_to_cart(CartItem::single(detail)).unwrap();
//! assert_eq!(cart.item_count(), 1);
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod wishlist;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{CartItem, CartStore, MemoryCart, MAX_QUANTITY_PER_ITEM};
    pub use crate::catalog::{Discount, Product, ProductDetail};
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};
    pub use crate::wishlist::{MemoryWishlist, WishlistStore};
}
