//! Content store access for the storefront product pages.
//!
//! This crate provides:
//! - `FetchClient` - Outbound HTTP over a pluggable `HttpTransport`
//! - `ContentStore` - Product-with-discount lookups, with distinct failure kinds
//! - `ContentClient` - The hosted query API implementation
//! - `InMemoryContentStore` - Local fixture store

mod client;
mod content;
mod error;
mod memory;
mod request;
mod response;
mod transport;

pub use client::*;
pub use content::*;
pub use error::FetchError;
pub use memory::*;
pub use request::RequestBuilder;
pub use response::Response;
pub use transport::*;
