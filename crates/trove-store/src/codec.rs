//! Reading and writing the flat dataset file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use trove_core::errors::StoreError;
use trove_core::product::Product;

/// Load every row of the dataset. A missing or unreadable file is
/// `StoreError::Unavailable` — callers must surface this distinctly from
/// a legitimately empty result set. Missing optional columns deserialize
/// to empty strings; short rows are tolerated.
pub fn read_products(path: &Path) -> Result<Vec<Product>, StoreError> {
    let file = File::open(path).map_err(|e| StoreError::Unavailable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut products = Vec::new();
    for row in reader.deserialize() {
        let product: Product = row.map_err(|e| StoreError::Csv {
            message: e.to_string(),
        })?;
        products.push(product);
    }
    Ok(products)
}

/// Serialize the complete row set back to disk. Writes a sibling temp
/// file first, then atomically renames it over the destination so a
/// racing reader never observes a partial file.
pub fn write_products(path: &Path, products: &[Product]) -> Result<(), StoreError> {
    let tmp_path = path.with_extension("csv.tmp");

    let mut writer = csv::Writer::from_path(&tmp_path).map_err(|e| StoreError::Csv {
        message: e.to_string(),
    })?;
    for product in products {
        writer.serialize(product).map_err(|e| StoreError::Csv {
            message: e.to_string(),
        })?;
    }
    writer.flush().map_err(|e| StoreError::Io {
        message: e.to_string(),
    })?;
    drop(writer);

    std::fs::rename(&tmp_path, path).map_err(|e| StoreError::Io {
        message: e.to_string(),
    })
}
