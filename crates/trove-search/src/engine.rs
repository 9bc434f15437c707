//! CatalogEngine: orchestrates the full read path against one snapshot.
//!
//! search: validate → snapshot → filter → rank (text queries only) →
//! paginate → format, with the suggestion fallback on zero results.
//! details and recommend are parallel entry points over the same store.

use std::time::Instant;

use tracing::{debug, info};

use trove_core::config::CatalogConfig;
use trove_core::errors::{CatalogResult, QueryError};
use trove_core::models::{
    FiltersApplied, ProductDetails, RecommendationResponse, RecommendedProduct, SearchMeta,
    SearchRequest, SearchResponse,
};
use trove_core::product::Product;
use trove_core::traits::IProductStore;

use crate::rank::RankWeights;
use crate::{filter, format, page, rank, recommend, suggest};

/// The catalog read engine. Borrows the store; every request runs
/// against whatever snapshot is current when it starts.
pub struct CatalogEngine<'a> {
    store: &'a dyn IProductStore,
    config: CatalogConfig,
    weights: RankWeights,
}

impl<'a> CatalogEngine<'a> {
    pub fn new(store: &'a dyn IProductStore, config: CatalogConfig) -> Self {
        Self {
            store,
            config,
            weights: RankWeights::default(),
        }
    }

    /// Override the ranking weights (defaults match the documented
    /// scoring formula).
    pub fn with_weights(mut self, weights: RankWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Run a full catalog search and assemble the response envelope.
    pub fn search(&self, request: &SearchRequest) -> CatalogResult<SearchResponse> {
        let started = Instant::now();
        page::validate(request.page, request.size)?;

        let query = request
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty());

        let snapshot = self.store.snapshot();
        let candidates = filter::apply(snapshot.products(), request, query);
        debug!(candidates = candidates.len(), query = ?query, "filter pipeline complete");

        // Text queries are relevance-ordered; everything else keeps
        // dataset order.
        let ordered: Vec<&Product> = if query.is_some() {
            rank::rank(candidates, &self.weights)
                .into_iter()
                .map(|s| s.candidate.product)
                .collect()
        } else {
            candidates.into_iter().map(|c| c.product).collect()
        };

        let (window, pagination) = page::paginate(&ordered, request.page, request.size);
        let products: Vec<_> = window
            .iter()
            .map(|p| format::format_product(p, query, request.compact))
            .collect();

        let suggestions = match query {
            Some(q) if pagination.total_results == 0 => {
                info!(query = %q, "no results, building suggestions");
                Some(suggest::build(&snapshot, q, &self.config))
            }
            _ => None,
        };

        let meta = SearchMeta {
            search_time_ms: started.elapsed().as_secs_f64() * 1000.0,
            results_on_page: products.len(),
        };
        info!(
            total = pagination.total_results,
            page = pagination.page,
            elapsed_ms = meta.search_time_ms,
            "search complete"
        );

        Ok(SearchResponse {
            products,
            pagination,
            filters_applied: FiltersApplied {
                search_query: request.q.clone(),
                category: request.category.clone(),
                min_rating: request.min_rating,
                max_rating: request.max_rating,
                min_price: request.min_price,
                max_price: request.max_price,
                min_discount: request.min_discount,
            },
            meta,
            suggestions,
        })
    }

    /// One product plus its related items (same category, excluding the
    /// product itself).
    pub fn details(&self, id: &str) -> CatalogResult<ProductDetails> {
        let snapshot = self.store.snapshot();
        let product = snapshot
            .products()
            .iter()
            .find(|p| p.product_id == id)
            .ok_or_else(|| QueryError::NotFound { id: id.to_string() })?;

        let related: Vec<_> = snapshot
            .products()
            .iter()
            .filter(|p| p.category == product.category && p.product_id != id)
            .take(self.config.related_limit)
            .map(|p| format::format_product(p, None, false))
            .collect();

        Ok(ProductDetails {
            product: format::format_product(product, None, false),
            related,
        })
    }

    /// Token-overlap recommendations for a free-text query.
    pub fn recommend(&self, query: &str, limit: usize) -> CatalogResult<RecommendationResponse> {
        let snapshot = self.store.snapshot();
        let (items, total_matched) = recommend::recommend(snapshot.products(), query, limit);
        debug!(query = %query, total_matched, returned = items.len(), "recommendation scan complete");

        Ok(RecommendationResponse {
            query: query.to_string(),
            items: items
                .into_iter()
                .map(|r| RecommendedProduct {
                    product: format::format_product(r.product, None, false),
                    score: r.score,
                })
                .collect(),
            total_matched,
        })
    }
}
