//! View state for the product detail page.

use storefront_commerce::catalog::ProductDetail;
use storefront_commerce::ProductId;
use storefront_data::{ContentError, ContentStore};

/// Progress of the product lookup.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A query is in flight.
    Loading,
    /// The product is available.
    Loaded,
    /// The product could not be shown.
    Unavailable(ContentError),
}

/// Which confirmation banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerKind {
    Cart,
    Wishlist,
}

impl BannerKind {
    /// Confirmation text.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Cart => "Added to cart!",
            Self::Wishlist => "Added to wishlist!",
        }
    }

    /// Name used in logs and CSS classes.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cart => "cart",
            Self::Wishlist => "wishlist",
        }
    }
}

/// Everything the page renders from.
///
/// Owned by one view; rebuilt from the content store whenever the
/// identifier changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    /// Identifier the state belongs to.
    pub product_id: Option<ProductId>,
    /// Lookup progress.
    pub status: LoadStatus,
    /// The product and its discount, once loaded.
    pub product: Option<ProductDetail>,
    /// Cart confirmation banner visible.
    pub cart_message: bool,
    /// Wishlist confirmation banner visible.
    pub wishlist_message: bool,
    generation: u64,
}

impl ViewState {
    /// Empty state, before any lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// State for a lookup that has already completed.
    pub fn resolved(product_id: Option<ProductId>, result: Result<ProductDetail, ContentError>) -> Self {
        let mut state = Self {
            product_id,
            ..Self::default()
        };
        state.apply(result);
        state
    }

    /// Lookup generation this state belongs to. Bumped on every identifier change.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the given banner is showing.
    pub fn message_visible(&self, kind: BannerKind) -> bool {
        match kind {
            BannerKind::Cart => self.cart_message,
            BannerKind::Wishlist => self.wishlist_message,
        }
    }

    /// Show or hide a banner.
    pub(crate) fn set_message(&mut self, kind: BannerKind, visible: bool) {
        match kind {
            BannerKind::Cart => self.cart_message = visible,
            BannerKind::Wishlist => self.wishlist_message = visible,
        }
    }

    /// Start a new lookup for `product_id`, dropping everything tied to the old one.
    pub(crate) fn begin(&mut self, product_id: Option<ProductId>) -> u64 {
        self.generation += 1;
        self.product_id = product_id;
        self.status = LoadStatus::Loading;
        self.product = None;
        self.cart_message = false;
        self.wishlist_message = false;
        self.generation
    }

    /// Record the lookup outcome.
    pub(crate) fn apply(&mut self, result: Result<ProductDetail, ContentError>) {
        match result {
            Ok(detail) => {
                self.product = Some(detail);
                self.status = LoadStatus::Loaded;
            }
            Err(err) => {
                self.product = None;
                self.status = LoadStatus::Unavailable(err);
            }
        }
    }
}

/// Look up a product, treating an absent identifier as its own failure.
pub async fn fetch_detail(
    store: &dyn ContentStore,
    product_id: Option<&ProductId>,
) -> Result<ProductDetail, ContentError> {
    match product_id {
        Some(id) if !id.as_str().is_empty() => store.fetch_product_with_discount(id).await,
        _ => Err(ContentError::MissingIdentifier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::catalog::Product;

    #[test]
    fn test_begin_resets_and_bumps_generation() {
        let mut state = ViewState::resolved(
            Some(ProductId::new("a")),
            Ok(ProductDetail::new(Product::new("a", "A", 1.0), None)),
        );
        state.cart_message = true;

        let generation = state.begin(Some(ProductId::new("b")));
        assert_eq!(generation, 1);
        assert_eq!(state.status, LoadStatus::Loading);
        assert!(state.product.is_none());
        assert!(!state.cart_message);
        assert_eq!(state.product_id, Some(ProductId::new("b")));
    }

    #[test]
    fn test_resolved_error() {
        let state = ViewState::resolved(None, Err(ContentError::MissingIdentifier));
        assert_eq!(state.status, LoadStatus::Unavailable(ContentError::MissingIdentifier));
        assert!(state.product.is_none());
    }

    #[test]
    fn test_messages_are_independent() {
        let mut state = ViewState::new();
        state.set_message(BannerKind::Wishlist, true);
        assert!(state.message_visible(BannerKind::Wishlist));
        assert!(!state.message_visible(BannerKind::Cart));
    }
}
