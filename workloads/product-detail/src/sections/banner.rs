//! Confirmation banner renderer.

use storefront_commerce::catalog::Product;

use super::escape_html;
use crate::state::BannerKind;

/// Render a confirmation banner with the product thumbnail and title.
pub fn render_banner(kind: BannerKind, product: &Product) -> String {
    let title = escape_html(&product.title);
    format!(
        r#"<div class="confirmation confirmation--{name}" role="status">
    <img src="{image}" alt="{title}" width="40" height="40" class="confirmation-thumb">
    <span class="confirmation-title">{title}</span>
    <span class="confirmation-message">{message}</span>
</div>"#,
        name = kind.name(),
        image = escape_html(&product.image_url),
        title = title,
        message = kind.message(),
    )
}
