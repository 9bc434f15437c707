//! CsvStore — owns the dataset, implements IProductStore.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::{debug, info};

use trove_core::config::CatalogConfig;
use trove_core::errors::{CatalogResult, StoreError};
use trove_core::product::{Product, ProductDraft, ProductPatch};
use trove_core::snapshot::DatasetSnapshot;
use trove_core::traits::IProductStore;

use crate::codec;

/// Repository over one flat CSV file.
///
/// Readers grab the current snapshot through a brief read lock and then
/// run lock-free against it. Mutations take the writer mutex for the full
/// read-modify-write-persist sequence; the snapshot swap at the end is the
/// only point a reader can block, and only for the duration of an `Arc`
/// store. Writers are serialized; readers never wait on the file rewrite.
#[derive(Debug)]
pub struct CsvStore {
    path: PathBuf,
    current: RwLock<Arc<DatasetSnapshot>>,
    writer: Mutex<()>,
}

impl CsvStore {
    /// Load the dataset and build the initial snapshot.
    pub fn open(path: impl Into<PathBuf>) -> CatalogResult<Self> {
        let path = path.into();
        let products = codec::read_products(&path)?;
        info!(rows = products.len(), path = %path.display(), "dataset loaded");
        Ok(Self {
            path,
            current: RwLock::new(Arc::new(DatasetSnapshot::new(products))),
            writer: Mutex::new(()),
        })
    }

    /// Open the store at the configured dataset path.
    pub fn from_config(config: &CatalogConfig) -> CatalogResult<Self> {
        Self::open(config.data_path.clone())
    }

    fn current(&self) -> Arc<DatasetSnapshot> {
        // A poisoned lock means a writer panicked between persist and swap;
        // the snapshot inside is still a complete, consistent version.
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn install(&self, products: Vec<Product>) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(DatasetSnapshot::new(products));
    }

    /// Run one serialized mutation: clone the current rows, apply `op`,
    /// persist the full set, then publish the new snapshot. `op` reports
    /// whether it changed anything; a no-op skips the rewrite.
    fn mutate<T>(
        &self,
        op: impl FnOnce(&mut Vec<Product>) -> CatalogResult<(T, bool)>,
    ) -> CatalogResult<T> {
        let _serialized = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let mut rows = self.current().products().to_vec();
        let (out, changed) = op(&mut rows)?;
        if changed {
            codec::write_products(&self.path, &rows)?;
            debug!(rows = rows.len(), path = %self.path.display(), "dataset persisted");
            self.install(rows);
        }
        Ok(out)
    }

    /// Next free generated id, `P`-prefixed and zero-padded like the
    /// dataset's own ids. Starts at row-count + 1 and skips collisions
    /// left behind by deletions.
    fn generate_id(rows: &[Product]) -> String {
        let mut n = rows.len() + 1;
        loop {
            let candidate = format!("P{n:08}");
            if !rows.iter().any(|p| p.product_id == candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

impl IProductStore for CsvStore {
    fn snapshot(&self) -> Arc<DatasetSnapshot> {
        self.current()
    }

    fn get(&self, id: &str) -> Option<Product> {
        self.current()
            .products()
            .iter()
            .find(|p| p.product_id == id)
            .cloned()
    }

    fn get_bulk(&self, ids: &HashSet<String>) -> Vec<Product> {
        if ids.is_empty() {
            return Vec::new();
        }
        self.current()
            .products()
            .iter()
            .filter(|p| ids.contains(&p.product_id))
            .cloned()
            .collect()
    }

    fn all(&self, limit: usize, offset: usize) -> Vec<Product> {
        self.current()
            .products()
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }

    fn create(&self, draft: ProductDraft) -> CatalogResult<Product> {
        self.mutate(|rows| {
            let id = match draft.product_id.as_deref() {
                Some(id) if !id.is_empty() => {
                    if rows.iter().any(|p| p.product_id == id) {
                        return Err(StoreError::DuplicateId { id: id.to_string() }.into());
                    }
                    id.to_string()
                }
                _ => Self::generate_id(rows),
            };
            let product = draft.into_product(id.clone());
            rows.push(product.clone());
            info!(id = %id, "product created");
            Ok((product, true))
        })
    }

    fn update(&self, id: &str, patch: &ProductPatch) -> CatalogResult<Option<Product>> {
        self.mutate(|rows| {
            let Some(row) = rows.iter_mut().find(|p| p.product_id == id) else {
                debug!(id = %id, "update on unknown id");
                return Ok((None, false));
            };
            patch.apply_to(row);
            info!(id = %id, "product updated");
            Ok((Some(row.clone()), true))
        })
    }

    fn delete(&self, id: &str) -> CatalogResult<bool> {
        self.mutate(|rows| {
            let before = rows.len();
            rows.retain(|p| p.product_id != id);
            let removed = rows.len() < before;
            if removed {
                info!(id = %id, "product deleted");
            }
            Ok((removed, removed))
        })
    }
}
