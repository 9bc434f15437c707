//! # trove-core
//!
//! Foundation crate for the Trove catalog engine.
//! Defines the product record, request/response models, errors, config,
//! constants, and the store trait. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod parse;
pub mod product;
pub mod snapshot;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CatalogConfig;
pub use errors::{CatalogError, CatalogResult, QueryError, StoreError};
pub use product::{Product, ProductDraft, ProductPatch};
pub use snapshot::DatasetSnapshot;
pub use traits::IProductStore;
