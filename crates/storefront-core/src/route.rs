//! Product route resolution.

use crate::context::RequestContext;

/// Path prefix served by the product detail page.
pub const PRODUCT_PATH_PREFIX: &str = "/product/";

/// Name of the route parameter carrying the product identifier.
pub const PRODUCT_ID_PARAM: &str = "id";

/// What the routing layer knows about the current product page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRoute {
    /// Product identifier, if the route supplied one.
    pub product_id: Option<String>,
    /// Absolute URL of the current page, query included, used for share links.
    pub page_url: String,
}

impl ProductRoute {
    /// Resolve the route from a request context.
    ///
    /// The `id` route parameter wins; otherwise the identifier is taken from a
    /// `/product/{id}` path and percent-decoded. Empty identifiers count as absent.
    pub fn resolve(ctx: &RequestContext, base_url: &str) -> Self {
        let product_id = match ctx.param(PRODUCT_ID_PARAM) {
            Some(id) => Some(id.to_string()),
            None => extract_product_id(&ctx.path).map(decode_path_segment),
        }
        .filter(|id| !id.is_empty());

        Self {
            product_id,
            page_url: page_url(base_url, &ctx.path_and_query()),
        }
    }
}

/// Extract the product ID from a path like `/product/123`.
pub fn extract_product_id(path: &str) -> Option<&str> {
    path.strip_prefix(PRODUCT_PATH_PREFIX)
        .and_then(|s| s.split('?').next())
        .and_then(|s| s.split('/').next())
}

/// Percent-decode one path segment.
///
/// `+` is literal in paths. Segments that do not decode to UTF-8 are kept raw.
pub fn decode_path_segment(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

/// Join a site base URL and a request path, which may carry a query.
pub fn page_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
