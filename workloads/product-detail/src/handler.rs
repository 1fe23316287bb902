//! Spin HTTP entry point.

use std::sync::Arc;

use futures::SinkExt;
use spin_sdk::http::{Fields, IncomingRequest, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use storefront_commerce::{Currency, ProductId};
use storefront_core::{PdpConfig, ProductRoute, RequestContext};
use storefront_data::{ContentClient, FetchClient, SpinTransport};
use storefront_observability::StructuredLogger;

use crate::sections::RenderContext;
use crate::shell::render_page;
use crate::state::{fetch_detail, ViewState};
use crate::{embedded_config, WORKLOAD};

/// Render `GET /product/{id}`.
#[http_component]
async fn handle(req: IncomingRequest, response_out: ResponseOutparam) {
    let ctx = RequestContext::new(req.path_with_query().unwrap_or_default());
    let request_id = ctx.request_id.clone();

    let config = match embedded_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[{}] invalid embedded config: {:#}", request_id, e);
            PdpConfig::default()
        }
    };

    let logger = StructuredLogger::from_config(request_id.clone(), &config.logging)
        .with_workload(WORKLOAD)
        .with_route(&ctx.path);

    let route = ProductRoute::resolve(&ctx, &config.site.base_url);
    let product_id = route.product_id.clone().map(ProductId::from);

    logger
        .info_builder("PDP request started")
        .field("product_id", route.product_id.as_deref().unwrap_or(""))
        .emit();

    let content = ContentClient::new(
        FetchClient::new(Arc::new(SpinTransport)),
        config.content.clone(),
    );
    let result = fetch_detail(&content, product_id.as_ref()).await;
    if let Err(e) = &result {
        logger
            .warn_builder("Product unavailable")
            .field("reason", e.kind())
            .field("error", e.to_string())
            .emit();
    }

    let state = ViewState::resolved(product_id, result);
    let status = if state.product.is_some() { 200 } else { 404 };
    let render_ctx = RenderContext {
        page_url: &route.page_url,
        currency: Currency::from_code(&config.site.currency).unwrap_or_default(),
    };
    let html = render_page(&state, &render_ctx, &config.site.name);

    let header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), "text/html; charset=utf-8".into()),
        ("x-request-id".to_owned(), request_id.to_string().into()),
    ];
    let headers = match Fields::from_list(&header_list) {
        Ok(headers) => headers,
        Err(e) => {
            logger
                .error_builder("Invalid response headers")
                .field("error", format!("{:?}", e))
                .emit();
            Fields::new()
        }
    };

    let response = OutgoingResponse::new(headers);
    if response.set_status_code(status).is_err() {
        logger.error("Failed to set status code");
    }

    let mut body = response.take_body();
    response_out.set(response);
    if let Err(e) = body.send(html.into_bytes()).await {
        logger
            .error_builder("Failed to send page")
            .field("error", e.to_string())
            .emit();
        return;
    }

    logger
        .info_builder("PDP request complete")
        .field_u64("status", status as u64)
        .field_u64("elapsed_us", logger.elapsed_us())
        .emit();
}
