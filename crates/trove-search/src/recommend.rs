//! Token-overlap recommendation scorer. Independent of the search
//! pipeline; consumes the same dataset snapshot.

use std::cmp::Ordering;
use std::collections::HashSet;

use trove_core::product::Product;

/// Substring bonuses per field, and the bonus per shared token.
const NAME_BONUS: f64 = 3.0;
const CATEGORY_BONUS: f64 = 2.0;
const DESCRIPTION_BONUS: f64 = 1.0;
const TOKEN_BONUS: f64 = 0.5;

/// One recommendation candidate with its score.
#[derive(Debug)]
pub struct Recommendation<'a> {
    pub product: &'a Product,
    pub score: f64,
}

/// Score every record against the query and keep those above zero.
/// Returns the top `limit` by descending score plus the count of all
/// records that scored, not just the returned prefix. A blank query
/// recommends nothing.
pub fn recommend<'a>(
    products: &'a [Product],
    query: &str,
    limit: usize,
) -> (Vec<Recommendation<'a>>, usize) {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return (Vec::new(), 0);
    }
    let query_tokens: HashSet<&str> = query_lower.split_whitespace().collect();

    let mut scored: Vec<Recommendation<'a>> = products
        .iter()
        .filter_map(|product| {
            let score = score_product(product, &query_lower, &query_tokens);
            (score > 0.0).then_some(Recommendation { product, score })
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let total_matched = scored.len();
    scored.truncate(limit);
    (scored, total_matched)
}

fn score_product(product: &Product, query_lower: &str, query_tokens: &HashSet<&str>) -> f64 {
    let name = product.product_name.to_lowercase();
    let category = product.category.to_lowercase();
    let description = product.about_product.to_lowercase();

    let mut score = 0.0;
    if name.contains(query_lower) {
        score += NAME_BONUS;
    }
    if category.contains(query_lower) {
        score += CATEGORY_BONUS;
    }
    if description.contains(query_lower) {
        score += DESCRIPTION_BONUS;
    }

    let mut item_tokens: HashSet<&str> = name.split_whitespace().collect();
    item_tokens.extend(category.split_whitespace());
    item_tokens.extend(description.split_whitespace());

    let shared = query_tokens
        .iter()
        .filter(|t| item_tokens.contains(**t))
        .count();
    score += shared as f64 * TOKEN_BONUS;

    // Keep the exposed score at display precision.
    (score * 100.0).round() / 100.0
}
