//! Request and response models for the search, details, and
//! recommendation entry points.

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Parameters of a catalog search. Everything is optional; `page`, `size`,
/// and `compact` carry the documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    /// Free-text query.
    pub q: Option<String>,
    /// Category substring filter.
    pub category: Option<String>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_discount: Option<f64>,
    /// 1-indexed page.
    pub page: usize,
    pub size: usize,
    /// Omit the description field from results.
    pub compact: bool,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            q: None,
            category: None,
            min_rating: None,
            max_rating: None,
            min_price: None,
            max_price: None,
            min_discount: None,
            page: 1,
            size: defaults::DEFAULT_PAGE_SIZE,
            compact: false,
        }
    }
}

/// The fixed per-record projection returned to callers. Always a fresh
/// copy of the source record's display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedProduct {
    pub product_id: String,
    pub product_name: String,
    pub category: String,
    pub discounted_price: String,
    pub actual_price: String,
    pub discount_percentage: String,
    pub rating: String,
    pub rating_count: String,
    pub img_link: String,
    pub product_link: String,
    /// Full description; omitted in compact mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_product: Option<String>,
    /// Names of projected fields whose raw value contains the query.
    /// Present only when the request carried a text query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_fields: Option<Vec<String>>,
}

/// Page metadata computed before slicing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub size: usize,
    pub total_results: usize,
    pub total_pages: usize,
    pub has_more: bool,
}

/// Echo of the filters the request activated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FiltersApplied {
    pub search_query: Option<String>,
    pub category: Option<String>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_discount: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMeta {
    pub search_time_ms: f64,
    pub results_on_page: usize,
}

/// Fallback content for a text query with zero matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestions {
    pub original_query: String,
    pub similar_categories: Vec<String>,
    pub popular_products: Vec<FormattedProduct>,
    pub did_you_mean: Vec<String>,
}

/// The full search response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub products: Vec<FormattedProduct>,
    pub pagination: Pagination,
    pub filters_applied: FiltersApplied,
    pub meta: SearchMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Suggestions>,
}

/// A single product with its related items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetails {
    pub product: FormattedProduct,
    pub related: Vec<FormattedProduct>,
}

/// One recommendation with its token-overlap score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedProduct {
    #[serde(flatten)]
    pub product: FormattedProduct,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub query: String,
    pub items: Vec<RecommendedProduct>,
    /// Count of all records that scored above zero, not just the returned
    /// prefix.
    pub total_matched: usize,
}
