//! Product queries against the hosted content store.

use async_trait::async_trait;
use serde::Deserialize;
use storefront_commerce::{catalog::ProductDetail, ProductId};
use storefront_core::ContentConfig;

use crate::{FetchClient, FetchError};

/// GROQ query for one product and the first discount that lists it.
pub const PRODUCT_WITH_DISCOUNT_QUERY: &str = r#"*[_type == "products" && _id == $id][0] {
  _id,
  title,
  price,
  "imageUrl": image.asset->url,
  originalPrice,
  isNew,
  isSale,
  description,
  "discount": *[_type == "discounts" && $id in applicableProducts[]->_id][0] {
    percentage,
    code
  }
}"#;

/// Why a product could not be loaded.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentError {
    /// The route did not supply an identifier.
    #[error("No product identifier supplied")]
    MissingIdentifier,

    /// The query succeeded but matched no product.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The query could not be completed.
    #[error("Content query failed: {0}")]
    Transport(#[from] FetchError),

    /// The store answered with something that is not a product.
    #[error("Invalid content response: {0}")]
    InvalidResponse(String),
}

impl ContentError {
    /// Short machine-readable cause, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingIdentifier => "missing_identifier",
            Self::NotFound(_) => "not_found",
            Self::Transport(_) => "transport",
            Self::InvalidResponse(_) => "invalid_response",
        }
    }
}

/// Read-only access to product records.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ContentStore: Send + Sync {
    /// Fetch a product's fields, resolved image URL and first applicable discount.
    async fn fetch_product_with_discount(&self, id: &ProductId) -> Result<ProductDetail, ContentError>;
}

/// Query API response envelope.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Option<serde_json::Value>,
}

/// Content store client speaking the hosted query HTTP API.
#[derive(Debug, Clone)]
pub struct ContentClient {
    client: FetchClient,
    config: ContentConfig,
}

impl ContentClient {
    /// Create a client for the configured project and dataset.
    ///
    /// Requests go to the project's API host and ask for JSON.
    pub fn new(client: FetchClient, config: ContentConfig) -> Self {
        let client = client
            .with_base_url(api_root(&config))
            .with_default_header("Accept", "application/json");
        Self { client, config }
    }

    /// Absolute URL of the query endpoint for the configured dataset.
    pub fn query_url(&self) -> String {
        format!("{}{}", api_root(&self.config), query_path(&self.config))
    }

    /// Build the product query request.
    ///
    /// Query parameters are passed as JSON literals, so the identifier is
    /// sent as a quoted string.
    pub fn product_request(&self, id: &ProductId) -> Result<crate::RequestBuilder, ContentError> {
        let id_literal = serde_json::to_string(id.as_str())
            .map_err(|e| ContentError::InvalidResponse(e.to_string()))?;

        let mut request = self
            .client
            .get(query_path(&self.config))
            .query("query", PRODUCT_WITH_DISCOUNT_QUERY)
            .query("$id", id_literal);

        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        Ok(request)
    }
}

fn api_root(config: &ContentConfig) -> String {
    let host = if config.use_cdn { "apicdn" } else { "api" };
    format!(
        "https://{}.{}.sanity.io/v{}",
        config.project_id, host, config.api_version
    )
}

fn query_path(config: &ContentConfig) -> String {
    format!("/data/query/{}", config.dataset)
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ContentStore for ContentClient {
    async fn fetch_product_with_discount(&self, id: &ProductId) -> Result<ProductDetail, ContentError> {
        if id.as_str().is_empty() {
            return Err(ContentError::MissingIdentifier);
        }

        let request = self.product_request(id)?;
        let response: QueryResponse = self.client.fetch_json(request).await?;

        match response.result {
            None | Some(serde_json::Value::Null) => Err(ContentError::NotFound(id.clone())),
            Some(value) => serde_json::from_value(value)
                .map_err(|e| ContentError::InvalidResponse(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HttpTransport, RequestBuilder, Response};
    use std::sync::{Arc, Mutex};

    struct Canned {
        status: u16,
        body: serde_json::Value,
        sent: Mutex<Vec<RequestBuilder>>,
    }

    impl Canned {
        fn new(status: u16, body: serde_json::Value) -> Arc<Self> {
            Arc::new(Self {
                status,
                body,
                sent: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl HttpTransport for Canned {
        async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
            self.sent.lock().unwrap().push(request);
            Ok(Response::json_body(self.status, &self.body))
        }
    }

    fn config() -> ContentConfig {
        ContentConfig {
            project_id: "proj1".to_string(),
            token: Some("read-token".to_string()),
            ..Default::default()
        }
    }

    fn client(transport: Arc<Canned>) -> ContentClient {
        ContentClient::new(FetchClient::new(transport), config())
    }

    #[test]
    fn test_query_url() {
        let transport = Canned::new(200, serde_json::Value::Null);
        let mut cfg = config();
        assert_eq!(
            ContentClient::new(FetchClient::new(transport.clone()), cfg.clone()).query_url(),
            "https://proj1.apicdn.sanity.io/v2024-01-01/data/query/production"
        );
        cfg.use_cdn = false;
        assert_eq!(
            ContentClient::new(FetchClient::new(transport), cfg).query_url(),
            "https://proj1.api.sanity.io/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn test_product_request_params() {
        let c = client(Canned::new(200, serde_json::Value::Null));
        let req = c.product_request(&ProductId::new("abc")).unwrap();

        assert_eq!(
            req.full_url().split('?').next(),
            Some("https://proj1.apicdn.sanity.io/v2024-01-01/data/query/production")
        );
        assert_eq!(req.headers().get("Accept").map(String::as_str), Some("application/json"));
        assert_eq!(req.query_param("$id"), Some("\"abc\""));
        assert_eq!(req.query_param("query"), Some(PRODUCT_WITH_DISCOUNT_QUERY));
        assert_eq!(
            req.headers().get("Authorization").map(String::as_str),
            Some("Bearer read-token")
        );
    }

    #[tokio::test]
    async fn test_fetch_found() {
        let transport = Canned::new(
            200,
            serde_json::json!({
                "ms": 3,
                "result": {
                    "_id": "abc",
                    "title": "Desk Lamp",
                    "price": 50,
                    "imageUrl": "https://cdn.example/lamp.png",
                    "discount": {"percentage": 20, "code": "SAVE20"}
                }
            }),
        );
        let c = client(transport.clone());

        let detail = c.fetch_product_with_discount(&ProductId::new("abc")).await.unwrap();
        assert_eq!(detail.product.title, "Desk Lamp");
        assert_eq!(detail.discount.map(|d| d.code), Some("SAVE20".to_string()));
        assert_eq!(transport.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_null_result_is_not_found() {
        let c = client(Canned::new(200, serde_json::json!({"result": null})));
        let err = c.fetch_product_with_discount(&ProductId::new("X")).await.unwrap_err();
        assert_eq!(err, ContentError::NotFound(ProductId::new("X")));
        assert_eq!(err.kind(), "not_found");
    }

    #[tokio::test]
    async fn test_fetch_http_failure_is_transport() {
        let c = client(Canned::new(500, serde_json::json!({"error": "down"})));
        let err = c.fetch_product_with_discount(&ProductId::new("X")).await.unwrap_err();
        assert!(matches!(err, ContentError::Transport(FetchError::Status { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_fetch_malformed_record() {
        let c = client(Canned::new(200, serde_json::json!({"result": {"title": 7}})));
        let err = c.fetch_product_with_discount(&ProductId::new("X")).await.unwrap_err();
        assert_eq!(err.kind(), "invalid_response");
    }

    #[tokio::test]
    async fn test_empty_identifier_skips_query() {
        let transport = Canned::new(200, serde_json::Value::Null);
        let c = client(transport.clone());
        let err = c.fetch_product_with_discount(&ProductId::new("")).await.unwrap_err();
        assert_eq!(err, ContentError::MissingIdentifier);
        assert!(transport.sent.lock().unwrap().is_empty());
    }
}
