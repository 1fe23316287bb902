//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in cart and wishlist operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(u32, u32),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in quantity calculation")]
    Overflow,

    /// The backing collection could not be reached.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}
