//! Product details section renderer.

use storefront_commerce::catalog::ProductDetail;
use storefront_commerce::Currency;

use super::escape_html;

/// Render the product image, price, tags, description and action controls.
pub fn render_product_details(detail: &ProductDetail, currency: Currency) -> String {
    let product = &detail.product;
    let title = escape_html(&product.title);

    let original_price = match detail.original_price(currency) {
        Some(price) => format!(
            r#"<p class="price-original">Original Price: <s>{}</s></p>"#,
            price.display()
        ),
        None => String::new(),
    };

    let discount = match &detail.discount {
        Some(discount) => format!(
            r#"<p class="price-discount">Discount: {}% off (Code: {})</p>"#,
            discount.effective_percentage(),
            escape_html(&discount.code)
        ),
        None => String::new(),
    };

    let mut tags = String::new();
    if product.is_new {
        tags.push_str(r#"<span class="tag tag--new">New Arrival</span>"#);
    }
    if product.is_sale {
        tags.push_str(r#"<span class="tag tag--sale">On Sale!</span>"#);
    }

    let description = escape_html(product.description.as_deref().unwrap_or_default());

    format!(
        r#"<section class="product-detail" data-section="details">
    <div class="product-gallery">
        <img src="{image}" alt="{title}" width="300" height="500" class="product-image-main">
    </div>
    <div class="product-info">
        <h1 class="product-name">{title}</h1>
        <div class="product-tags">{tags}</div>
        <p class="price-current">{price}</p>
        {original_price}
        {discount}
        <p class="product-description">{description}</p>
        <div class="product-actions">
            <button type="button" class="action action--cart" data-action="add-to-cart">Add To Cart</button>
            <button type="button" class="action action--wishlist" data-action="add-to-wishlist">Add To Wishlist</button>
        </div>
    </div>
</section>"#,
        image = escape_html(&product.image_url),
        title = title,
        tags = tags,
        price = detail.final_price(currency).display(),
        original_price = original_price,
        discount = discount,
        description = description,
    )
}
