//! # trove-store
//!
//! The dataset store: owns the in-memory row collection, loads it from a
//! delimited flat file, and rewrites the file in full on every mutation.

pub mod codec;
pub mod store;

pub use store::CsvStore;
