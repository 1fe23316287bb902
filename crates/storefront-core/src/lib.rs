//! Core abstractions for the storefront product pages.
//!
//! This crate provides:
//! - `RequestContext` - Typed request parameters
//! - `ProductRoute` - Product identifier and page URL resolution
//! - `PdpConfig` - Page configuration

mod config;
mod context;
mod route;

pub use config::*;
pub use context::*;
pub use route::*;
