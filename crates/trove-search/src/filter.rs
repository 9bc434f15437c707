//! Query filter pipeline: text match, structured predicates, and the
//! per-record match flags the ranker and formatter consume.

use regex::Regex;

use trove_core::models::SearchRequest;
use trove_core::product::Product;

/// Which fields the text query matched on one record. The word-boundary
/// flags are ranking signals only; they never gate inclusion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchFields {
    pub name: bool,
    pub description: bool,
    pub category: bool,
    pub name_word: bool,
    pub category_word: bool,
}

/// A record that survived every active filter.
#[derive(Debug)]
pub struct MatchedProduct<'a> {
    pub product: &'a Product,
    pub fields: MatchFields,
}

/// Whole-word matcher over an escaped query. The pattern is fully
/// escaped, so it always compiles; `None` only degrades the word
/// signals to false.
struct WordMatcher(Option<Regex>);

impl WordMatcher {
    fn new(query: &str) -> Self {
        Self(Regex::new(&format!(r"(?i)\b{}\b", regex::escape(query))).ok())
    }

    fn is_match(&self, text: &str) -> bool {
        self.0.as_ref().is_some_and(|re| re.is_match(text))
    }
}

/// Apply every active filter to the snapshot's rows. Filters combine
/// with AND; the text match itself is an OR across name, description,
/// and category. Records whose numeric projection is missing are
/// excluded while the corresponding bound is active.
pub fn apply<'a>(
    products: &'a [Product],
    request: &SearchRequest,
    query: Option<&str>,
) -> Vec<MatchedProduct<'a>> {
    let query_lower = query.map(str::to_lowercase);
    let word_matcher = query.map(WordMatcher::new);
    let category_filter = request
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_lowercase);

    let mut matched = Vec::new();
    for product in products {
        let mut fields = MatchFields::default();

        if let Some(q) = &query_lower {
            fields.name = contains_ci(&product.product_name, q);
            fields.description = contains_ci(&product.about_product, q);
            fields.category = contains_ci(&product.category, q);
            if !(fields.name || fields.description || fields.category) {
                continue;
            }
            if let Some(words) = &word_matcher {
                fields.name_word = fields.name && words.is_match(&product.product_name);
                fields.category_word = fields.category && words.is_match(&product.category);
            }
        }

        if let Some(category) = &category_filter {
            if !contains_ci(&product.category, category) {
                continue;
            }
        }
        if !within(product.rating_value, request.min_rating, request.max_rating) {
            continue;
        }
        if !within(product.price_value, request.min_price, request.max_price) {
            continue;
        }
        if let Some(min) = request.min_discount {
            if !product.discount_value.is_some_and(|d| d >= min) {
                continue;
            }
        }

        matched.push(MatchedProduct { product, fields });
    }
    matched
}

/// Case-insensitive substring containment. An empty field never matches.
fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    !haystack.is_empty() && haystack.to_lowercase().contains(needle_lower)
}

/// Bound check against an optional projection. With no active bound the
/// record always passes; with a bound, a missing projection fails it.
fn within(value: Option<f64>, min: Option<f64>, max: Option<f64>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    let Some(v) = value else {
        return false;
    };
    min.map_or(true, |m| v >= m) && max.map_or(true, |m| v <= m)
}
