//! Product detail page workload.
//!
//! Loads one product and its applicable discount from the content store,
//! renders price, images and tags, and offers add-to-cart, add-to-wishlist
//! and share actions.
//!
//! - `ProductDetailView` - Interactive view model with owned fetch and banner tasks
//! - `render_page` - Full HTML document for a resolved state
//! - On `wasm32`, a Spin HTTP component serving `GET /product/{id}`

mod sections;
mod share;
mod shell;
mod state;

#[cfg(not(target_arch = "wasm32"))]
mod banner;
#[cfg(not(target_arch = "wasm32"))]
mod view;

#[cfg(target_arch = "wasm32")]
mod handler;

pub use sections::{
    render_banner, render_not_found, render_product_details, render_share_links, render_view,
    RenderContext,
};
pub use share::*;
pub use shell::*;
pub use state::*;

#[cfg(not(target_arch = "wasm32"))]
pub use banner::ConfirmationBanner;
#[cfg(not(target_arch = "wasm32"))]
pub use view::*;

/// Workload name used in logs.
pub const WORKLOAD: &str = "product-detail";

/// Configuration embedded into the component.
pub const PDP_CONFIG: &str = include_str!("../pdp.toml");

/// Parse the embedded configuration.
pub fn embedded_config() -> anyhow::Result<storefront_core::PdpConfig> {
    use anyhow::Context;
    storefront_core::PdpConfig::from_toml(PDP_CONFIG).context("Invalid embedded pdp.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = embedded_config().unwrap();
        assert_eq!(config.site.name, "Store");
        assert_eq!(config.banner.duration_ms, 3000);
        assert!(config.content.use_cdn);
    }
}
