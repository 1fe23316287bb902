//! HTTP request builder.

use std::collections::HashMap;

/// A builder for GET requests against the content store.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBuilder {
    pub(crate) url: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: HashMap<String, String>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
            headers: HashMap::new(),
        }
    }

    /// Append a query parameter. Key and value are percent-encoded on `full_url`.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(self, token: impl AsRef<str>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.as_ref()))
    }

    /// The headers set so far.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Get a query parameter value by key, unencoded.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The URL with the encoded query string appended.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }

        let query: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.url, separator, query.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_url_without_query() {
        let req = RequestBuilder::new("https://api.example/data");
        assert_eq!(req.full_url(), "https://api.example/data");
    }

    #[test]
    fn test_full_url_encodes_query() {
        let req = RequestBuilder::new("https://api.example/q")
            .query("query", "*[_id == $id]")
            .query("$id", "\"abc\"");
        assert_eq!(
            req.full_url(),
            "https://api.example/q?query=%2A%5B_id%20%3D%3D%20%24id%5D&%24id=%22abc%22"
        );
    }

    #[test]
    fn test_full_url_appends_to_existing_query() {
        let req = RequestBuilder::new("https://api.example/q?tag=pdp").query("a", "b");
        assert_eq!(req.full_url(), "https://api.example/q?tag=pdp&a=b");
    }

    #[test]
    fn test_bearer_auth() {
        let req = RequestBuilder::new("https://x").bearer_auth("tok");
        assert_eq!(req.headers().get("Authorization").map(String::as_str), Some("Bearer tok"));
    }
}
