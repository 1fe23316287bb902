//! Section renderers for the product detail page.

mod banner;
mod details;
mod not_found;
mod share;

pub use banner::*;
pub use details::*;
pub use not_found::*;
pub use share::*;

use storefront_commerce::Currency;

use crate::state::{BannerKind, ViewState};

/// Values the renderers need beyond the view state.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Absolute URL of the current page.
    pub page_url: &'a str,
    /// Currency prices are shown in.
    pub currency: Currency,
}

/// Render the page body for the current state.
///
/// Without a product only the not-found message is rendered.
pub fn render_view(state: &ViewState, ctx: &RenderContext<'_>) -> String {
    let Some(detail) = &state.product else {
        return render_not_found();
    };

    let mut html = String::new();
    for kind in [BannerKind::Cart, BannerKind::Wishlist] {
        if state.message_visible(kind) {
            html.push_str(&render_banner(kind, &detail.product));
            html.push('\n');
        }
    }
    html.push_str(&render_product_details(detail, ctx.currency));
    html.push('\n');
    html.push_str(&render_share_links(ctx.page_url, &detail.product.title));
    html
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::catalog::{Discount, Product, ProductDetail};
    use storefront_commerce::ProductId;
    use storefront_data::ContentError;

    fn ctx() -> RenderContext<'static> {
        RenderContext {
            page_url: "https://shop.example/product/lamp",
            currency: Currency::USD,
        }
    }

    fn loaded() -> ViewState {
        ViewState::resolved(
            Some(ProductId::new("lamp")),
            Ok(ProductDetail::new(
                Product::new("lamp", "Desk Lamp", 50.0).with_image("https://cdn.example/lamp.png"),
                Some(Discount::new(20.0, "SAVE20")),
            )),
        )
    }

    #[test]
    fn test_not_found_has_no_actions() {
        let state = ViewState::resolved(
            Some(ProductId::new("X")),
            Err(ContentError::NotFound(ProductId::new("X"))),
        );
        let html = render_view(&state, &ctx());
        assert!(html.contains("Product not found"));
        assert!(!html.contains("Add To Cart"));
        assert!(!html.contains("Add To Wishlist"));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_loaded_renders_details_and_share() {
        let html = render_view(&loaded(), &ctx());
        assert!(html.contains("$40.00"));
        assert!(html.contains("Add To Cart"));
        assert!(html.contains("https://wa.me/?text="));
        assert!(!html.contains("Added to cart!"));
    }

    #[test]
    fn test_banners_follow_flags() {
        let mut state = loaded();
        state.wishlist_message = true;
        let html = render_view(&state, &ctx());
        assert!(html.contains("Added to wishlist!"));
        assert!(!html.contains("Added to cart!"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
