//! Snapshot-derived views: distinct categories and the suggestion
//! vocabulary.

use trove_core::product::Product;
use trove_core::snapshot::DatasetSnapshot;

fn make_product(id: &str, name: &str, category: &str) -> Product {
    Product {
        product_id: id.to_string(),
        product_name: name.to_string(),
        category: category.to_string(),
        ..Product::default()
    }
}

#[test]
fn categories_are_distinct_in_first_seen_order() {
    let snapshot = DatasetSnapshot::new(vec![
        make_product("P1", "USB Cable", "Electronics|Cables"),
        make_product("P2", "HDMI Cable", "Electronics|Cables"),
        make_product("P3", "Headphones", "Electronics|Audio"),
        make_product("P4", "Mouse", ""),
    ]);

    assert_eq!(
        snapshot.categories(),
        vec!["Electronics|Cables".to_string(), "Electronics|Audio".to_string()]
    );
}

#[test]
fn vocabulary_keeps_long_tokens_lowercased() {
    let snapshot = DatasetSnapshot::new(vec![
        make_product("P1", "Wireless Mouse", "A"),
        make_product("P2", "USB Cable", "A"),
    ]);

    let vocab = snapshot.vocabulary();
    assert!(vocab.contains(&"wireless".to_string()));
    assert!(vocab.contains(&"mouse".to_string()));
    assert!(vocab.contains(&"cable".to_string()));
    // "USB" is three characters, too short for the vocabulary.
    assert!(!vocab.contains(&"usb".to_string()));
}

#[test]
fn vocabulary_excludes_stopwords_and_duplicates() {
    let snapshot = DatasetSnapshot::new(vec![
        make_product("P1", "Pack with Cable", "A"),
        make_product("P2", "Cable from Somewhere", "A"),
    ]);

    let vocab = snapshot.vocabulary();
    assert!(!vocab.contains(&"pack".to_string()));
    assert!(!vocab.contains(&"with".to_string()));
    assert!(!vocab.contains(&"from".to_string()));
    assert_eq!(vocab.iter().filter(|t| t.as_str() == "cable").count(), 1);
}

#[test]
fn vocabulary_strips_punctuation_from_tokens() {
    let snapshot = DatasetSnapshot::new(vec![make_product("P1", "Type-C (braided)", "A")]);

    let vocab = snapshot.vocabulary();
    assert!(vocab.contains(&"typec".to_string()));
    assert!(vocab.contains(&"braided".to_string()));
}

#[test]
fn projections_derived_on_construction() {
    let mut product = make_product("P1", "Cable", "A");
    product.discounted_price = "₹1,299".to_string();
    product.rating = "4.5".to_string();
    let snapshot = DatasetSnapshot::new(vec![product]);

    let row = &snapshot.products()[0];
    assert_eq!(row.price_value, Some(1299.0));
    assert_eq!(row.rating_value, Some(4.5));
}
