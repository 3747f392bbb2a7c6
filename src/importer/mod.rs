// ==========================================
// Retail Stock Rebalancer - Importer Module
// ==========================================
// Loads external snapshot exports into domain data.
// ==========================================

pub mod error;
pub mod snapshot_reader;

pub use error::{ImportError, ImportResult};
pub use snapshot_reader::SnapshotReader;
