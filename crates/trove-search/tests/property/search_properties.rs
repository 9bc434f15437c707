//! Property tests: pagination invariants and ranking order.

use proptest::prelude::*;

use trove_core::models::SearchRequest;
use trove_core::product::Product;
use trove_search::filter::apply;
use trove_search::page::paginate;
use trove_search::rank::{rank, RankWeights};

fn make_product(i: usize, price: f64) -> Product {
    let mut product = Product {
        product_id: format!("P{i:08}"),
        product_name: format!("Widget {i} cable"),
        category: "Electronics|Widgets".to_string(),
        discounted_price: format!("₹{price}"),
        rating: format!("{:.1}", (i % 50) as f64 / 10.0),
        about_product: "A widget".to_string(),
        ..Product::default()
    };
    product.derive_projections();
    product
}

proptest! {
    #[test]
    fn prop_total_results_is_window_independent(
        len in 0usize..120,
        page in 1usize..30,
        size in 1usize..20,
    ) {
        let items: Vec<usize> = (0..len).collect();
        let (_, pagination) = paginate(&items, page, size);

        prop_assert_eq!(pagination.total_results, len);
        prop_assert_eq!(pagination.total_pages, len.div_ceil(size));
        prop_assert_eq!(pagination.has_more, page < pagination.total_pages);
    }

    #[test]
    fn prop_every_valid_page_has_the_expected_size(
        len in 1usize..120,
        size in 1usize..20,
    ) {
        let items: Vec<usize> = (0..len).collect();
        let total_pages = len.div_ceil(size);

        for page in 1..=total_pages {
            let (window, _) = paginate(&items, page, size);
            if page < total_pages {
                prop_assert_eq!(window.len(), size);
            } else {
                prop_assert_eq!(window.len(), len - size * (total_pages - 1));
            }
        }
    }

    #[test]
    fn prop_pages_partition_the_result_set(
        len in 0usize..120,
        size in 1usize..20,
    ) {
        let items: Vec<usize> = (0..len).collect();
        let total_pages = len.div_ceil(size);

        let mut reassembled = Vec::new();
        for page in 1..=total_pages {
            let (window, _) = paginate(&items, page, size);
            reassembled.extend_from_slice(window);
        }
        prop_assert_eq!(reassembled, items);
    }

    #[test]
    fn prop_price_bounds_hold_on_every_survivor(
        prices in proptest::collection::vec(1.0f64..100_000.0, 0..40),
        min in 0.0f64..50_000.0,
        span in 0.0f64..50_000.0,
    ) {
        let products: Vec<Product> = prices
            .iter()
            .enumerate()
            .map(|(i, p)| make_product(i, p.floor()))
            .collect();
        let request = SearchRequest {
            min_price: Some(min),
            max_price: Some(min + span),
            ..SearchRequest::default()
        };

        let survivors = apply(&products, &request, None);
        for survivor in &survivors {
            let price = survivor.product.price_value.expect("fixture prices parse");
            prop_assert!(price >= min && price <= min + span);
        }

        let expected = prices
            .iter()
            .filter(|p| p.floor() >= min && p.floor() <= min + span)
            .count();
        prop_assert_eq!(survivors.len(), expected);
    }

    #[test]
    fn prop_ranked_scores_are_monotonically_decreasing(
        len in 0usize..60,
    ) {
        let products: Vec<Product> = (0..len).map(|i| make_product(i, 100.0)).collect();
        let request = SearchRequest {
            q: Some("cable".to_string()),
            ..SearchRequest::default()
        };

        let candidates = apply(&products, &request, Some("cable"));
        let ranked = rank(candidates, &RankWeights::default());

        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}
