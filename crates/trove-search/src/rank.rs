//! Relevance ranker: deterministic weighted-heuristic scoring for
//! text-query results. Runs only when a query is present; without one the
//! dataset order is preserved untouched.

use std::cmp::Ordering;

use trove_core::constants::CATEGORY_DELIMITER;

use crate::filter::MatchedProduct;

/// Weights for the six scoring signals.
#[derive(Debug, Clone)]
pub struct RankWeights {
    pub name_word: f64,
    pub name: f64,
    pub category_word: f64,
    pub category: f64,
    pub description: f64,
    pub main_product: f64,
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            name_word: 10.0,
            name: 3.0,
            category_word: 5.0,
            category: 2.0,
            description: 1.0,
            main_product: 5.0,
        }
    }
}

/// Root product types, matched as a whole category segment.
const MAIN_PRODUCT_KEYWORDS: &[&str] = &[
    "laptop",
    "laptops",
    "smartphone",
    "smartphones",
    "tablet",
    "tablets",
    "television",
    "televisions",
    "camera",
    "cameras",
    "monitor",
    "monitors",
    "desktop",
    "desktops",
    "smartwatch",
    "smartwatches",
];

/// Accessory markers, matched as a substring of the whole category.
const ACCESSORY_KEYWORDS: &[&str] = &[
    "accessories",
    "accessory",
    "charger",
    "chargers",
    "cable",
    "cables",
    "bag",
    "bags",
    "sleeve",
    "sleeves",
    "cover",
    "covers",
    "case",
    "cases",
    "stand",
    "stands",
    "mount",
    "mounts",
    "adapter",
    "adapters",
];

/// A filtered record with its relevance score attached.
#[derive(Debug)]
pub struct ScoredProduct<'a> {
    pub candidate: MatchedProduct<'a>,
    pub score: f64,
}

/// Score and order candidates: descending score, ties broken by
/// descending numeric rating (missing rating sorts last).
pub fn rank<'a>(candidates: Vec<MatchedProduct<'a>>, weights: &RankWeights) -> Vec<ScoredProduct<'a>> {
    let mut scored: Vec<ScoredProduct<'a>> = candidates
        .into_iter()
        .map(|candidate| {
            let f = candidate.fields;
            let category = &candidate.product.category;
            let boost = is_main_product_category(category) && !is_accessory_category(category);

            let score = weights.name_word * flag(f.name_word)
                + weights.name * flag(f.name)
                + weights.category_word * flag(f.category_word)
                + weights.category * flag(f.category)
                + weights.description * flag(f.description)
                + weights.main_product * flag(boost);

            ScoredProduct { candidate, score }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                effective_rating(b)
                    .partial_cmp(&effective_rating(a))
                    .unwrap_or(Ordering::Equal)
            })
    });

    scored
}

fn flag(signal: bool) -> f64 {
    if signal {
        1.0
    } else {
        0.0
    }
}

fn effective_rating(entry: &ScoredProduct<'_>) -> f64 {
    entry
        .candidate
        .product
        .rating_value
        .unwrap_or(f64::NEG_INFINITY)
}

/// Whole-segment match against the main-product keyword set.
pub fn is_main_product_category(category: &str) -> bool {
    category
        .split(CATEGORY_DELIMITER)
        .map(str::trim)
        .any(|segment| {
            MAIN_PRODUCT_KEYWORDS
                .iter()
                .any(|k| segment.eq_ignore_ascii_case(k))
        })
}

/// Substring match against the accessory keyword set.
pub fn is_accessory_category(category: &str) -> bool {
    let lower = category.to_lowercase();
    ACCESSORY_KEYWORDS.iter().any(|k| lower.contains(k))
}
