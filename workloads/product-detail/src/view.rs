//! The product detail view model.

use std::sync::Arc;
use std::time::Duration;

use storefront_commerce::cart::{CartItem, CartStore};
use storefront_commerce::catalog::ProductDetail;
use storefront_commerce::wishlist::WishlistStore;
use storefront_commerce::{Currency, ProductId};
use storefront_core::PdpConfig;
use storefront_data::{ContentError, ContentStore};
use storefront_observability::StructuredLogger;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::banner::ConfirmationBanner;
use crate::sections::{render_view, RenderContext};
use crate::state::{fetch_detail, BannerKind, LoadStatus, ViewState};

/// External collaborators of the view.
#[derive(Clone)]
pub struct PageServices {
    pub content: Arc<dyn ContentStore>,
    pub cart: Arc<dyn CartStore>,
    pub wishlist: Arc<dyn WishlistStore>,
}

impl PageServices {
    pub fn new(
        content: Arc<dyn ContentStore>,
        cart: Arc<dyn CartStore>,
        wishlist: Arc<dyn WishlistStore>,
    ) -> Self {
        Self {
            content,
            cart,
            wishlist,
        }
    }
}

/// Tunables for one view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    /// How long a confirmation banner stays visible.
    pub banner_duration: Duration,
    /// Currency prices are shown in.
    pub currency: Currency,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            banner_duration: Duration::from_millis(3000),
            currency: Currency::USD,
        }
    }
}

impl ViewSettings {
    /// Settings from the `[banner]` and `[site]` sections.
    ///
    /// An unknown currency code falls back to USD.
    pub fn from_config(config: &PdpConfig) -> Self {
        Self {
            banner_duration: config.banner.duration(),
            currency: Currency::from_code(&config.site.currency).unwrap_or_default(),
        }
    }
}

/// Product detail page for one mounted route.
///
/// Owns its state, the in-flight fetch and both banner timers. Dropping
/// the view cancels all of them. Must be used from within a Tokio runtime.
pub struct ProductDetailView {
    services: PageServices,
    logger: StructuredLogger,
    settings: ViewSettings,
    state: Arc<watch::Sender<ViewState>>,
    fetch: Option<JoinHandle<()>>,
    cart_banner: ConfirmationBanner,
    wishlist_banner: ConfirmationBanner,
}

impl ProductDetailView {
    /// Create an unmounted view.
    pub fn new(services: PageServices, logger: StructuredLogger, settings: ViewSettings) -> Self {
        Self {
            services,
            logger,
            settings,
            state: Arc::new(watch::Sender::new(ViewState::new())),
            fetch: None,
            cart_banner: ConfirmationBanner::new(BannerKind::Cart, settings.banner_duration),
            wishlist_banner: ConfirmationBanner::new(BannerKind::Wishlist, settings.banner_duration),
        }
    }

    /// Create a view and start loading `product_id`.
    pub fn mount(
        services: PageServices,
        logger: StructuredLogger,
        settings: ViewSettings,
        product_id: Option<ProductId>,
    ) -> Self {
        let mut view = Self::new(services, logger, settings);
        view.set_product_id(product_id);
        view
    }

    /// Point the view at a product identifier.
    ///
    /// Starts one fetch when the identifier differs from the current one,
    /// aborting any fetch still in flight. Returns whether a fetch started.
    pub fn set_product_id(&mut self, product_id: Option<ProductId>) -> bool {
        {
            let current = self.state.borrow();
            if current.status != LoadStatus::Idle && current.product_id == product_id {
                return false;
            }
        }

        if let Some(task) = self.fetch.take() {
            task.abort();
        }
        self.cart_banner.cancel();
        self.wishlist_banner.cancel();

        let mut generation = 0;
        self.state.send_modify(|s| generation = s.begin(product_id.clone()));

        self.logger
            .info_builder("Product fetch started")
            .field("product_id", product_id.as_ref().map(ProductId::as_str).unwrap_or(""))
            .field_u64("generation", generation)
            .emit();

        let state = Arc::clone(&self.state);
        let content = Arc::clone(&self.services.content);
        let logger = self.logger.clone();
        self.fetch = Some(tokio::spawn(async move {
            let result = fetch_detail(content.as_ref(), product_id.as_ref()).await;
            apply_fetch_result(&state, &logger, generation, result);
        }));

        true
    }

    /// Add the current product to the cart with quantity 1.
    ///
    /// Returns `false` without touching the cart when no product is loaded,
    /// or when the cart rejects the item.
    pub fn add_to_cart(&mut self) -> bool {
        let product = self.state.borrow().product.clone();
        let Some(detail) = product else {
            self.logger.debug("Add to cart ignored, no product");
            return false;
        };
        let product_id = detail.product.id.clone();

        if let Err(err) = self.services.cart.add_to_cart(CartItem::single(detail)) {
            self.logger
                .warn_builder("Add to cart failed")
                .field("product_id", product_id.as_str())
                .field("error", err.to_string())
                .emit();
            return false;
        }

        self.logger
            .info_builder("Added to cart")
            .field("product_id", product_id.as_str())
            .field_u64("quantity", 1)
            .emit();
        self.cart_banner.show(&self.state);
        true
    }

    /// Add the current product to the wishlist.
    ///
    /// Same guards as [`add_to_cart`](Self::add_to_cart).
    pub fn add_to_wishlist(&mut self) -> bool {
        let product = self.state.borrow().product.clone();
        let Some(detail) = product else {
            self.logger.debug("Add to wishlist ignored, no product");
            return false;
        };
        let product_id = detail.product.id.clone();

        if let Err(err) = self.services.wishlist.add_to_wishlist(detail) {
            self.logger
                .warn_builder("Add to wishlist failed")
                .field("product_id", product_id.as_str())
                .field("error", err.to_string())
                .emit();
            return false;
        }

        self.logger
            .info_builder("Added to wishlist")
            .field("product_id", product_id.as_str())
            .emit();
        self.wishlist_banner.show(&self.state);
        true
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Watch state transitions.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Render the page body for the current state.
    pub fn render(&self, page_url: &str) -> String {
        let ctx = RenderContext {
            page_url,
            currency: self.settings.currency,
        };
        render_view(&self.state.borrow(), &ctx)
    }

    /// Tear the view down, cancelling the fetch and both banner timers.
    pub fn unmount(self) {
        self.logger.debug("Product view unmounted");
    }
}

impl Drop for ProductDetailView {
    fn drop(&mut self) {
        if let Some(task) = self.fetch.take() {
            task.abort();
        }
        self.cart_banner.cancel();
        self.wishlist_banner.cancel();
    }
}

/// Store a fetch outcome unless a newer fetch has started since.
fn apply_fetch_result(
    state: &watch::Sender<ViewState>,
    logger: &StructuredLogger,
    generation: u64,
    result: Result<ProductDetail, ContentError>,
) -> bool {
    let failure = result.as_ref().err().cloned();

    let applied = state.send_if_modified(|s| {
        if s.generation() != generation {
            return false;
        }
        s.apply(result);
        true
    });

    if !applied {
        logger
            .debug_builder("Discarded stale product response")
            .field_u64("generation", generation)
            .emit();
        return false;
    }

    match failure {
        None => logger
            .info_builder("Product loaded")
            .field_u64("generation", generation)
            .emit(),
        Some(err) => logger
            .warn_builder("Product unavailable")
            .field("reason", err.kind())
            .field("error", err.to_string())
            .emit(),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::catalog::{Product, ProductDetail};
    use storefront_core::RequestId;
    use storefront_observability::LogLevel;

    fn logger() -> StructuredLogger {
        StructuredLogger::new(RequestId::from_string("test"))
            .with_min_level(LogLevel::Trace)
            .with_capture()
    }

    fn detail(id: &str) -> ProductDetail {
        ProductDetail::new(Product::new(id, id.to_uppercase(), 10.0), None)
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let state = watch::Sender::new(ViewState::new());
        let logger = logger();
        let first = {
            let mut g = 0;
            state.send_modify(|s| g = s.begin(Some(ProductId::new("a"))));
            g
        };
        state.send_modify(|s| {
            s.begin(Some(ProductId::new("b")));
        });

        assert!(!apply_fetch_result(&state, &logger, first, Ok(detail("a"))));
        assert!(state.borrow().product.is_none());

        let captured = logger.captured();
        assert_eq!(captured.last().map(|e| e.message.as_str()), Some("Discarded stale product response"));
    }

    #[test]
    fn test_current_result_is_applied() {
        let state = watch::Sender::new(ViewState::new());
        let logger = logger();
        let mut generation = 0;
        state.send_modify(|s| generation = s.begin(Some(ProductId::new("a"))));

        assert!(apply_fetch_result(&state, &logger, generation, Ok(detail("a"))));
        assert_eq!(state.borrow().product, Some(detail("a")));
    }

    #[test]
    fn test_unavailable_logs_warn_with_reason() {
        let state = watch::Sender::new(ViewState::new());
        let logger = logger();
        let mut generation = 0;
        state.send_modify(|s| generation = s.begin(None));

        apply_fetch_result(&state, &logger, generation, Err(ContentError::MissingIdentifier));

        let entry = logger.captured().pop().unwrap();
        assert_eq!(entry.level, LogLevel::Warn);
        assert_eq!(entry.field_str("reason"), Some("missing_identifier"));
    }

    #[test]
    fn test_settings_from_config() {
        let config = PdpConfig::from_toml("[site]\ncurrency = \"EUR\"\n[banner]\nduration_ms = 1500\n").unwrap();
        let settings = ViewSettings::from_config(&config);
        assert_eq!(settings.currency, Currency::EUR);
        assert_eq!(settings.banner_duration, Duration::from_millis(1500));
    }
}
