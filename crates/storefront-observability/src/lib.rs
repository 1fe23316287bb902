//! Observability infrastructure for the storefront product pages.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with request context
//! - `LogBuilder` - Fluent construction of entries with typed fields

mod logging;

pub use logging::*;

// Re-export RequestId from storefront-core for convenience
pub use storefront_core::RequestId;
