//! Share links section renderer.

use super::escape_html;
use crate::share::share_links;

/// Render the outbound share links.
pub fn render_share_links(page_url: &str, title: &str) -> String {
    let links: String = share_links(page_url, title)
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" class="share share--{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                escape_html(&link.href),
                link.network.slug(),
                link.network.label()
            )
        })
        .collect();

    format!(
        r#"<section class="product-share" data-section="share">
    <p class="share-label">Share this product with your friends on social media:</p>
    {}
</section>"#,
        links
    )
}
