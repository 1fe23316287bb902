//! Not-found section renderer.

/// Render the message shown whenever the product is unavailable.
pub fn render_not_found() -> String {
    r#"<section class="product-detail product-detail--missing" data-section="details">
    <p class="not-found">Product not found</p>
</section>"#
        .to_string()
}
