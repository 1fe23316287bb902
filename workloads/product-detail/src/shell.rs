//! HTML document shell around the rendered view.

use crate::sections::{escape_html, render_view, RenderContext};
use crate::state::ViewState;

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title, unescaped.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Inline styles.
    pub styles: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add inline CSS.
    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(css.to_string());
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::new();

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                escape_html(name),
                escape_html(content)
            ));
            html.push('\n');
        }

        for css in &self.styles {
            html.push_str(&format!("<style>{}</style>\n", css));
        }

        html
    }
}

/// Document template wrapping a page body.
#[derive(Debug, Clone)]
pub struct Shell {
    pub head: HeadContent,
    pub body_start: String,
    pub body_end: String,
}

impl Shell {
    /// Create a shell with a bare `<main>` wrapper.
    pub fn new(head: HeadContent) -> Self {
        Self {
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "\n</main>\n</body>\n</html>".to_string(),
        }
    }

    /// Set custom body start HTML.
    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Set custom body end HTML.
    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Render the full document around `body`.
    pub fn render(&self, body: &str) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);
        html.push_str(body);
        html.push_str(&self.body_end);
        html
    }
}

/// Document title for the current state.
pub fn page_title(state: &ViewState, site_name: &str) -> String {
    match &state.product {
        Some(detail) => format!("{} | {}", detail.product.title, site_name),
        None => format!("Product not found | {}", site_name),
    }
}

/// Render the complete product page document.
pub fn render_page(state: &ViewState, ctx: &RenderContext<'_>, site_name: &str) -> String {
    let shell = Shell::new(
        HeadContent::new(page_title(state, site_name))
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style(PDP_STYLES),
    )
    .with_body_start(format!(
        r#"<body>
    <header class="site-header">
        <nav><a href="/">{}</a></nav>
    </header>
    <main class="pdp-container">
"#,
        escape_html(site_name)
    ))
    .with_body_end(
        r#"
    </main>
</body>
</html>"#,
    );

    shell.render(&render_view(state, ctx))
}

/// CSS styles for the product page.
const PDP_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #f5f5f5; }
.site-header { background: #333; color: white; padding: 1rem 2rem; }
.site-header a { color: #fff; text-decoration: none; }
.pdp-container { max-width: 1200px; margin: 0 auto; padding: 2rem; }
.product-detail { display: grid; grid-template-columns: 300px 1fr; gap: 2rem; background: white; padding: 2rem; border-radius: 8px; }
.product-image-main { object-fit: cover; border-radius: 8px; }
.product-name { font-size: 2rem; margin: 0 0 0.5rem; }
.tag { display: inline-block; padding: 0.2rem 0.6rem; margin-right: 0.5rem; border-radius: 4px; font-size: 0.8rem; }
.tag--new { background: #e0f2fe; color: #075985; }
.tag--sale { background: #fee2e2; color: #991b1b; }
.price-current { font-size: 1.75rem; font-weight: bold; }
.price-original s { color: #888; }
.price-discount { color: #16a34a; }
.product-actions { display: flex; gap: 1rem; margin-top: 1.5rem; }
.action { padding: 0.75rem 1.5rem; border: none; border-radius: 4px; cursor: pointer; }
.action--cart { background: #111; color: white; }
.action--wishlist { background: #eee; }
.confirmation { position: fixed; top: 1rem; right: 1rem; display: flex; align-items: center; gap: 0.75rem; background: white; padding: 0.75rem 1rem; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.15); }
.confirmation--wishlist { top: 5rem; }
.confirmation-thumb { object-fit: cover; border-radius: 4px; }
.product-share { margin-top: 1rem; display: flex; gap: 1rem; align-items: center; }
.not-found { font-size: 1.5rem; text-align: center; }
"#;
