//! The seam between the dataset store and everything that consumes it.

use std::collections::HashSet;
use std::sync::Arc;

use crate::errors::CatalogResult;
use crate::product::{Product, ProductDraft, ProductPatch};
use crate::snapshot::DatasetSnapshot;

/// Repository contract for the product dataset.
///
/// The read path is lock-free: `snapshot()` hands out the current dataset
/// version and every derived read operates on it. Mutations serialize
/// against each other, rewrite the backing file in full, then publish a
/// new snapshot. Readers racing a writer see the previous version —
/// stale, never torn.
pub trait IProductStore: Send + Sync {
    // --- Read path ---

    /// The current dataset version.
    fn snapshot(&self) -> Arc<DatasetSnapshot>;

    /// Direct lookup by id.
    fn get(&self, id: &str) -> Option<Product>;

    /// All records whose id is in `ids`, in dataset order (stable for a
    /// given snapshot).
    fn get_bulk(&self, ids: &HashSet<String>) -> Vec<Product>;

    /// A pagination window over the raw dataset.
    fn all(&self, limit: usize, offset: usize) -> Vec<Product>;

    // --- Mutation path (serialized, persists on success) ---

    /// Insert a record, generating an id when the draft has none.
    /// Rejects duplicate ids.
    fn create(&self, draft: ProductDraft) -> CatalogResult<Product>;

    /// Patch the provided fields. `None` when the id is unknown.
    fn update(&self, id: &str, patch: &ProductPatch) -> CatalogResult<Option<Product>>;

    /// Remove a record. `false` when the id is unknown.
    fn delete(&self, id: &str) -> CatalogResult<bool>;
}
