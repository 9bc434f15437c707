//! Display formatter: the fixed per-record projection.

use trove_core::models::FormattedProduct;
use trove_core::product::Product;

/// Project a record for display. Always a fresh copy; the source record
/// is never touched.
///
/// With a query, `highlighted_fields` names each of `product_name`,
/// `category`, and `about_product` whose raw value contains the query
/// case-insensitively — computed per field against the raw record, so a
/// description highlight is still reported in compact mode even though
/// the description value itself is omitted.
pub fn format_product(product: &Product, query: Option<&str>, compact: bool) -> FormattedProduct {
    let highlighted_fields = query.map(|q| {
        let q_lower = q.to_lowercase();
        let mut fields = Vec::new();
        if contains(&product.product_name, &q_lower) {
            fields.push("product_name".to_string());
        }
        if contains(&product.category, &q_lower) {
            fields.push("category".to_string());
        }
        if contains(&product.about_product, &q_lower) {
            fields.push("about_product".to_string());
        }
        fields
    });

    FormattedProduct {
        product_id: product.product_id.clone(),
        product_name: product.product_name.clone(),
        category: product.category.clone(),
        discounted_price: product.discounted_price.clone(),
        actual_price: product.actual_price.clone(),
        discount_percentage: product.discount_percentage.clone(),
        rating: product.rating.clone(),
        rating_count: product.rating_count.clone(),
        img_link: product.img_link.clone(),
        product_link: product.product_link.clone(),
        about_product: (!compact).then(|| product.about_product.clone()),
        highlighted_fields,
    }
}

fn contains(raw: &str, query_lower: &str) -> bool {
    !raw.is_empty() && raw.to_lowercase().contains(query_lower)
}
