//! The product record and its create/update payloads.

use serde::{Deserialize, Serialize};

use crate::parse;

/// One row of the catalog dataset.
///
/// Display fields keep their original formatted strings so the persisted
/// file round-trips byte-for-byte. The `*_value` projections are derived
/// once at ingestion and never re-parsed on the filter hot path; `None`
/// means the raw value was absent or unparseable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub product_id: String,
    pub product_name: String,
    /// Hierarchical category, segments joined by `|`.
    pub category: String,
    /// Currency-formatted display string, e.g. `"₹1,299"`.
    pub discounted_price: String,
    pub actual_price: String,
    /// Percentage-formatted display string, e.g. `"50%"`.
    pub discount_percentage: String,
    /// Frequently empty or non-numeric.
    pub rating: String,
    /// May contain thousands separators.
    pub rating_count: String,
    pub about_product: String,
    pub img_link: String,
    pub product_link: String,

    #[serde(skip)]
    pub price_value: Option<f64>,
    #[serde(skip)]
    pub actual_price_value: Option<f64>,
    #[serde(skip)]
    pub discount_value: Option<f64>,
    #[serde(skip)]
    pub rating_value: Option<f64>,
    #[serde(skip)]
    pub rating_count_value: Option<f64>,
}

impl Product {
    /// Derive the numeric projections from the raw display strings.
    /// Called once when a row enters a dataset snapshot.
    pub fn derive_projections(&mut self) {
        self.price_value = parse::parse_currency(&self.discounted_price);
        self.actual_price_value = parse::parse_currency(&self.actual_price);
        self.discount_value = parse::parse_percent(&self.discount_percentage);
        self.rating_value = parse::parse_rating(&self.rating);
        self.rating_count_value = parse::parse_count(&self.rating_count);
    }
}

/// Payload for creating a product. A missing `product_id` is generated
/// by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDraft {
    pub product_id: Option<String>,
    pub product_name: String,
    pub category: String,
    pub discounted_price: String,
    pub actual_price: String,
    pub discount_percentage: String,
    pub rating: String,
    pub rating_count: String,
    pub about_product: String,
    pub img_link: String,
    pub product_link: String,
}

impl ProductDraft {
    /// Build the full record under the given id.
    pub fn into_product(self, id: String) -> Product {
        let mut product = Product {
            product_id: id,
            product_name: self.product_name,
            category: self.category,
            discounted_price: self.discounted_price,
            actual_price: self.actual_price,
            discount_percentage: self.discount_percentage,
            rating: self.rating,
            rating_count: self.rating_count,
            about_product: self.about_product,
            img_link: self.img_link,
            product_link: self.product_link,
            ..Product::default()
        };
        product.derive_projections();
        product
    }
}

/// Partial update payload. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPatch {
    pub product_name: Option<String>,
    pub category: Option<String>,
    pub discounted_price: Option<String>,
    pub actual_price: Option<String>,
    pub discount_percentage: Option<String>,
    pub rating: Option<String>,
    pub rating_count: Option<String>,
    pub about_product: Option<String>,
    pub img_link: Option<String>,
    pub product_link: Option<String>,
}

impl ProductPatch {
    /// Apply the provided fields onto an existing record and re-derive
    /// its numeric projections.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(v) = &self.product_name {
            product.product_name = v.clone();
        }
        if let Some(v) = &self.category {
            product.category = v.clone();
        }
        if let Some(v) = &self.discounted_price {
            product.discounted_price = v.clone();
        }
        if let Some(v) = &self.actual_price {
            product.actual_price = v.clone();
        }
        if let Some(v) = &self.discount_percentage {
            product.discount_percentage = v.clone();
        }
        if let Some(v) = &self.rating {
            product.rating = v.clone();
        }
        if let Some(v) = &self.rating_count {
            product.rating_count = v.clone();
        }
        if let Some(v) = &self.about_product {
            product.about_product = v.clone();
        }
        if let Some(v) = &self.img_link {
            product.img_link = v.clone();
        }
        if let Some(v) = &self.product_link {
            product.product_link = v.clone();
        }
        product.derive_projections();
    }
}
