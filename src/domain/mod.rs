// ==========================================
// Retail Stock Rebalancer - Domain Model Layer
// ==========================================
// Defines the entities and value types moved through the
// pipeline. No file access, no engine logic.
// ==========================================

pub mod diagnostics;
pub mod records;
pub mod snapshot;
pub mod transfer;
pub mod types;

// Re-export the core types
pub use diagnostics::{DestinationDiagnostic, OriginDiagnostic};
pub use records::{DemandRecord, SupplyRecord};
pub use snapshot::{SnapshotSet, StoreProductSnapshot};
pub use transfer::{AggregateRollup, RollupRow, TransferDraft, TransferInstruction, TOTAL_KEY};
pub use types::{RollupDimension, TransferMode};
