//! Outbound HTTP transport.

use async_trait::async_trait;

use crate::{FetchError, RequestBuilder, Response};

/// Sends a built request and returns the raw response.
///
/// Status codes are not interpreted here; see [`Response::error_for_status`].
/// Spin's outbound futures are not `Send`, so on `wasm32` neither are these.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait HttpTransport: Send + Sync {
    /// Send the request.
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError>;
}

/// Transport backed by Spin's outbound HTTP.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SpinTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl HttpTransport for SpinTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        use spin_sdk::http::{Method as SpinMethod, Request};

        let mut builder = Request::builder();
        builder.method(SpinMethod::Get);
        builder.uri(request.full_url());
        for (key, value) in &request.headers {
            builder.header(key.as_str(), value.as_str());
        }

        let response: spin_sdk::http::Response = spin_sdk::http::send(builder.build())
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Response::new(*response.status(), response.body().to_vec()))
    }
}
