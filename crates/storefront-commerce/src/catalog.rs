//! Product and discount records as served by the content store.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Deserializer, Serialize};

/// A product document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Base price in currency units (e.g., dollars).
    pub price: f64,
    /// Resolved URL of the product image.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    /// Price before markdown, shown struck through.
    #[serde(default)]
    pub original_price: Option<f64>,
    /// Show the "New Arrival" tag.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_new: bool,
    /// Show the "On Sale" tag.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_sale: bool,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    /// Create a product with only the required fields set.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            image_url: String::new(),
            original_price: None,
            is_new: false,
            is_sale: false,
            description: None,
        }
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Set the original (pre-markdown) price.
    pub fn with_original_price(mut self, price: f64) -> Self {
        self.original_price = Some(price);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the new/sale flags.
    pub fn with_tags(mut self, is_new: bool, is_sale: bool) -> Self {
        self.is_new = is_new;
        self.is_sale = is_sale;
        self
    }
}

/// A percentage discount applicable to a set of products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Discount {
    /// Percentage off (0.0 - 100.0).
    pub percentage: f64,
    /// Redemption code (e.g., "SAVE20").
    pub code: String,
}

impl Discount {
    /// Create a new percentage discount.
    pub fn new(percentage: f64, code: impl Into<String>) -> Self {
        Self {
            percentage,
            code: code.into(),
        }
    }

    /// Percentage clamped into 0..=100. NaN counts as no discount.
    pub fn effective_percentage(&self) -> f64 {
        if self.percentage.is_nan() {
            0.0
        } else {
            self.percentage.clamp(0.0, 100.0)
        }
    }
}

/// A product together with the first discount that applies to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDetail {
    /// The product fields.
    #[serde(flatten)]
    pub product: Product,
    /// Applicable discount, if any.
    #[serde(default)]
    pub discount: Option<Discount>,
}

impl ProductDetail {
    /// Create a detail record.
    pub fn new(product: Product, discount: Option<Discount>) -> Self {
        Self { product, discount }
    }

    /// Base price as money.
    pub fn base_price(&self, currency: Currency) -> Money {
        Money::from_decimal(self.product.price, currency)
    }

    /// Price after the discount, or the base price when there is none.
    pub fn final_price(&self, currency: Currency) -> Money {
        let base = self.base_price(currency);
        match &self.discount {
            Some(discount) => base.percentage_off(discount.effective_percentage()),
            None => base,
        }
    }

    /// Original price as money, if set.
    pub fn original_price(&self, currency: Currency) -> Option<Money> {
        self.product
            .original_price
            .map(|price| Money::from_decimal(price, currency))
    }
}

/// Deserialize `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
