//! Suggestion fallback for text queries with zero matches: similar
//! categories, popular products, and "did you mean" terms.

use std::cmp::Ordering;

use tracing::debug;

use trove_core::config::CatalogConfig;
use trove_core::models::Suggestions;
use trove_core::product::Product;
use trove_core::snapshot::DatasetSnapshot;

use crate::format;

/// Build the full fallback payload for a query that matched nothing.
pub fn build(snapshot: &DatasetSnapshot, query: &str, config: &CatalogConfig) -> Suggestions {
    let suggestions = Suggestions {
        original_query: query.to_string(),
        similar_categories: similar_categories(snapshot, query, config.suggestion_limit),
        popular_products: popular(snapshot, config.suggestion_limit)
            .iter()
            .map(|p| format::format_product(p, None, true))
            .collect(),
        did_you_mean: did_you_mean(snapshot, query, config.did_you_mean_limit),
    };
    debug!(
        query = %query,
        categories = suggestions.similar_categories.len(),
        popular = suggestions.popular_products.len(),
        terms = suggestions.did_you_mean.len(),
        "built zero-result suggestions"
    );
    suggestions
}

/// Distinct category values containing the query, first-seen order.
pub fn similar_categories(snapshot: &DatasetSnapshot, query: &str, limit: usize) -> Vec<String> {
    let query_lower = query.to_lowercase();
    snapshot
        .categories()
        .into_iter()
        .filter(|c| c.to_lowercase().contains(&query_lower))
        .take(limit)
        .collect()
}

/// Top records by parsed rating count, descending. Records whose count
/// does not parse sort as zero.
pub fn popular(snapshot: &DatasetSnapshot, limit: usize) -> Vec<&Product> {
    let mut by_count: Vec<&Product> = snapshot.products().iter().collect();
    by_count.sort_by(|a, b| {
        b.rating_count_value
            .unwrap_or(0.0)
            .partial_cmp(&a.rating_count_value.unwrap_or(0.0))
            .unwrap_or(Ordering::Equal)
    });
    by_count.truncate(limit);
    by_count
}

/// Vocabulary terms close to the query: containment either way, or the
/// crude position-aligned similarity test. Intentionally not edit
/// distance — the imprecision is an accepted trade-off.
pub fn did_you_mean(snapshot: &DatasetSnapshot, query: &str, limit: usize) -> Vec<String> {
    let query_lower = query.to_lowercase();
    snapshot
        .vocabulary()
        .iter()
        .filter(|term| {
            term.contains(&query_lower)
                || query_lower.contains(term.as_str())
                || crude_similarity(&query_lower, term)
        })
        .take(limit)
        .cloned()
        .collect()
}

/// Lengths within 2 of each other, and more than 70% of position-aligned
/// characters identical (relative to the shorter term).
fn crude_similarity(a: &str, b: &str) -> bool {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    if a_len.abs_diff(b_len) > 2 {
        return false;
    }
    let shorter = a_len.min(b_len);
    if shorter == 0 {
        return false;
    }
    let aligned = a.chars().zip(b.chars()).filter(|(x, y)| x == y).count();
    aligned as f64 / shorter as f64 > 0.7
}
