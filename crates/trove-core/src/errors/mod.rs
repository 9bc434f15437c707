//! Error taxonomy for the catalog engine.
//!
//! Malformed *data values* inside the dataset are never errors — they are
//! absorbed as missing numeric projections. Errors here cover malformed
//! *requests* and an unavailable backing store.

mod query_error;
mod store_error;

pub use query_error::QueryError;
pub use store_error::StoreError;

/// Top-level error type aggregating all subsystems.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("configuration error: {message}")]
    Config { message: String },
}

/// Convenience alias used throughout the workspace.
pub type CatalogResult<T> = Result<T, CatalogError>;
