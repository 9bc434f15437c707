//! Dataset store tests: load, CRUD round-trips, id generation,
//! persistence across reopen, snapshot isolation.

use std::collections::HashSet;
use std::path::PathBuf;

use tempfile::TempDir;

use trove_core::errors::{CatalogError, StoreError};
use trove_core::product::{Product, ProductDraft, ProductPatch};
use trove_core::traits::IProductStore;
use trove_store::{codec, CsvStore};

fn make_product(id: &str, name: &str, category: &str, price: &str) -> Product {
    Product {
        product_id: id.to_string(),
        product_name: name.to_string(),
        category: category.to_string(),
        discounted_price: price.to_string(),
        actual_price: price.to_string(),
        discount_percentage: "10%".to_string(),
        rating: "4.0".to_string(),
        rating_count: "1,000".to_string(),
        about_product: format!("About {name}"),
        img_link: "img".to_string(),
        product_link: "link".to_string(),
        ..Product::default()
    }
}

fn fixture_rows() -> Vec<Product> {
    vec![
        make_product("P00000001", "USB Cable", "Electronics|Cables", "₹299"),
        make_product("P00000002", "HDMI Cable", "Electronics|Cables", "₹599"),
        make_product("P00000003", "Power Bank", "Electronics|PowerBanks", "₹899"),
        make_product("P00000004", "Wireless Mouse", "Electronics|Accessories", "₹499"),
        make_product("P00000005", "Headphones", "Electronics|Audio", "₹1,299"),
    ]
}

fn seeded_store() -> (TempDir, PathBuf, CsvStore) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("products.csv");
    codec::write_products(&path, &fixture_rows()).expect("seed fixture");
    let store = CsvStore::open(&path).expect("open store");
    (dir, path, store)
}

// ── Load ──────────────────────────────────────────────────────────────────

#[test]
fn open_loads_all_rows_with_projections() {
    let (_dir, _path, store) = seeded_store();
    let snapshot = store.snapshot();

    assert_eq!(snapshot.len(), 5);
    assert_eq!(snapshot.products()[4].price_value, Some(1299.0));
    assert_eq!(snapshot.products()[0].rating_count_value, Some(1000.0));
}

#[test]
fn missing_file_is_unavailable_not_empty() {
    let dir = TempDir::new().expect("temp dir");
    let err = CsvStore::open(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Store(StoreError::Unavailable { .. })
    ));
}

#[test]
fn from_config_resolves_the_dataset_path() {
    let (_dir, path, _store) = seeded_store();
    let config = trove_core::CatalogConfig {
        data_path: path,
        ..trove_core::CatalogConfig::default()
    };
    let store = CsvStore::from_config(&config).expect("open via config");
    assert_eq!(store.snapshot().len(), 5);
}

// ── Direct lookup ─────────────────────────────────────────────────────────

#[test]
fn get_by_id() {
    let (_dir, _path, store) = seeded_store();
    assert_eq!(
        store.get("P00000002").map(|p| p.product_name),
        Some("HDMI Cable".to_string())
    );
    assert!(store.get("P99999999").is_none());
}

#[test]
fn get_bulk_returns_dataset_order() {
    let (_dir, _path, store) = seeded_store();
    let ids: HashSet<String> = ["P00000004", "P00000002"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let found = store.get_bulk(&ids);
    let found_ids: Vec<&str> = found.iter().map(|p| p.product_id.as_str()).collect();
    assert_eq!(found_ids, vec!["P00000002", "P00000004"]);

    assert!(store.get_bulk(&HashSet::new()).is_empty());
}

#[test]
fn all_is_a_window_over_the_dataset() {
    let (_dir, _path, store) = seeded_store();
    let window = store.all(2, 1);
    let ids: Vec<&str> = window.iter().map(|p| p.product_id.as_str()).collect();
    assert_eq!(ids, vec!["P00000002", "P00000003"]);
}

// ── Create ────────────────────────────────────────────────────────────────

#[test]
fn create_then_get_roundtrip() {
    let (_dir, _path, store) = seeded_store();
    let created = store
        .create(ProductDraft {
            product_id: Some("NEW1".to_string()),
            product_name: "Laptop Sleeve".to_string(),
            category: "Electronics|Sleeves".to_string(),
            discounted_price: "₹749".to_string(),
            ..ProductDraft::default()
        })
        .expect("create");

    let fetched = store.get("NEW1").expect("fetch after create");
    assert_eq!(fetched, created);
    assert_eq!(fetched.price_value, Some(749.0));
}

#[test]
fn create_generates_padded_ids() {
    let (_dir, _path, store) = seeded_store();
    let created = store
        .create(ProductDraft {
            product_name: "Anything".to_string(),
            ..ProductDraft::default()
        })
        .expect("create");
    assert_eq!(created.product_id, "P00000006");
}

#[test]
fn generated_ids_skip_collisions_after_deletes() {
    let (_dir, _path, store) = seeded_store();
    assert!(store.delete("P00000002").expect("delete"));
    // Four rows remain; the naive next id P00000005 already exists.
    let created = store
        .create(ProductDraft {
            product_name: "Anything".to_string(),
            ..ProductDraft::default()
        })
        .expect("create");
    assert_eq!(created.product_id, "P00000006");
}

#[test]
fn duplicate_id_is_rejected() {
    let (_dir, _path, store) = seeded_store();
    let err = store
        .create(ProductDraft {
            product_id: Some("P00000001".to_string()),
            product_name: "Clone".to_string(),
            ..ProductDraft::default()
        })
        .unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Store(StoreError::DuplicateId { .. })
    ));
    assert_eq!(store.snapshot().len(), 5);
}

// ── Update / delete ───────────────────────────────────────────────────────

#[test]
fn update_patches_only_provided_fields() {
    let (_dir, _path, store) = seeded_store();
    let updated = store
        .update(
            "P00000001",
            &ProductPatch {
                discounted_price: Some("₹199".to_string()),
                ..ProductPatch::default()
            },
        )
        .expect("update")
        .expect("known id");

    assert_eq!(updated.discounted_price, "₹199");
    assert_eq!(updated.price_value, Some(199.0));
    assert_eq!(updated.product_name, "USB Cable");
}

#[test]
fn update_unknown_id_is_none() {
    let (_dir, _path, store) = seeded_store();
    let result = store
        .update("P99999999", &ProductPatch::default())
        .expect("update");
    assert!(result.is_none());
}

#[test]
fn delete_reports_whether_anything_was_removed() {
    let (_dir, _path, store) = seeded_store();
    assert!(store.delete("P00000003").expect("delete"));
    assert!(store.get("P00000003").is_none());
    assert!(!store.delete("P00000003").expect("second delete"));
    assert_eq!(store.snapshot().len(), 4);
}

// ── Persistence ───────────────────────────────────────────────────────────

#[test]
fn mutations_survive_reopen() {
    let (_dir, path, store) = seeded_store();
    store
        .create(ProductDraft {
            product_id: Some("NEW1".to_string()),
            product_name: "Laptop Sleeve".to_string(),
            discounted_price: "₹749".to_string(),
            ..ProductDraft::default()
        })
        .expect("create");
    store.delete("P00000001").expect("delete");
    drop(store);

    let reopened = CsvStore::open(&path).expect("reopen");
    assert_eq!(reopened.snapshot().len(), 5);
    assert!(reopened.get("P00000001").is_none());
    let restored = reopened.get("NEW1").expect("created row persisted");
    assert_eq!(restored.discounted_price, "₹749");
    assert_eq!(restored.price_value, Some(749.0));
}

#[test]
fn persist_leaves_no_temp_file_behind() {
    let (dir, _path, store) = seeded_store();
    store.delete("P00000001").expect("delete");

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .expect("read dir")
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

// ── Snapshot isolation ────────────────────────────────────────────────────

#[test]
fn readers_keep_their_snapshot_across_mutations() {
    let (_dir, _path, store) = seeded_store();
    let before = store.snapshot();

    store.delete("P00000005").expect("delete");

    // The old snapshot still holds the deleted row; a fresh one does not.
    assert_eq!(before.len(), 5);
    assert!(before
        .products()
        .iter()
        .any(|p| p.product_id == "P00000005"));
    assert_eq!(store.snapshot().len(), 4);
}
