//! Engine configuration, loadable from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{CatalogError, CatalogResult};

/// Compile-time defaults, overridable per field in the config file.
pub mod defaults {
    pub const DATA_PATH: &str = "data/products.csv";
    pub const DEFAULT_PAGE_SIZE: usize = 10;
    pub const SUGGESTION_LIMIT: usize = 5;
    pub const DID_YOU_MEAN_LIMIT: usize = 3;
    pub const RELATED_LIMIT: usize = 4;
}

/// Catalog engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path of the flat dataset file.
    pub data_path: PathBuf,
    /// Cap on similar categories and popular products in the fallback.
    pub suggestion_limit: usize,
    /// Cap on "did you mean" terms.
    pub did_you_mean_limit: usize,
    /// Cap on related products in the details view.
    pub related_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(defaults::DATA_PATH),
            suggestion_limit: defaults::SUGGESTION_LIMIT,
            did_you_mean_limit: defaults::DID_YOU_MEAN_LIMIT,
            related_limit: defaults::RELATED_LIMIT,
        }
    }
}

impl CatalogConfig {
    /// Parse a TOML document. Missing fields fall back to defaults.
    pub fn from_toml_str(raw: &str) -> CatalogResult<Self> {
        toml::from_str(raw).map_err(|e| CatalogError::Config {
            message: e.to_string(),
        })
    }

    /// Load from a TOML file on disk.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::Config {
            message: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml_str(&raw)
    }
}
