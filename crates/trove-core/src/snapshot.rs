//! Immutable view of the dataset at one point in time.
//!
//! All read-path operations (filter, rank, suggest, recommend) run against
//! a single snapshot, so a request never observes a half-applied mutation.

use std::collections::HashSet;

use once_cell::sync::OnceCell;

use crate::constants::{VOCABULARY_MIN_TOKEN_LEN, VOCABULARY_STOPWORDS};
use crate::product::Product;

/// One consistent version of the dataset. Mutations produce a new snapshot
/// and atomically replace the previous one; readers keep whatever snapshot
/// they already hold.
#[derive(Debug, Default)]
pub struct DatasetSnapshot {
    products: Vec<Product>,
    /// Suggestion vocabulary, built at most once per snapshot.
    vocabulary: OnceCell<Vec<String>>,
}

impl DatasetSnapshot {
    /// Wrap a row set, deriving every record's numeric projections.
    pub fn new(mut products: Vec<Product>) -> Self {
        for product in &mut products {
            product.derive_projections();
        }
        Self {
            products,
            vocabulary: OnceCell::new(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct category values in first-seen dataset order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .filter(|p| !p.category.is_empty() && seen.insert(p.category.as_str()))
            .map(|p| p.category.clone())
            .collect()
    }

    /// Lowercased "did you mean" vocabulary: alphanumeric tokens of
    /// `product_name` longer than three characters, minus stopwords.
    /// Built lazily, once per snapshot.
    pub fn vocabulary(&self) -> &[String] {
        self.vocabulary.get_or_init(|| {
            let mut seen = HashSet::new();
            let mut terms = Vec::new();
            for product in &self.products {
                for token in product.product_name.split_whitespace() {
                    let term: String = token
                        .chars()
                        .filter(|c| c.is_alphanumeric())
                        .flat_map(char::to_lowercase)
                        .collect();
                    if term.len() <= VOCABULARY_MIN_TOKEN_LEN
                        || VOCABULARY_STOPWORDS.contains(&term.as_str())
                    {
                        continue;
                    }
                    if seen.insert(term.clone()) {
                        terms.push(term);
                    }
                }
            }
            terms
        })
    }
}
