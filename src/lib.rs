// ==========================================
// Retail Stock Rebalancer - Core Library
// ==========================================
// Reads per-store inventory snapshots, finds overstocked and
// understocked positions, and emits store-to-store transfer
// instructions with valuation rollups and stock diagnostics.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Engine layer - business rules
pub mod engine;

// Importer layer - external data
pub mod importer;

// Config layer - run parameters
pub mod config;

// Report layer - run output files
pub mod report;

// Logging
pub mod logging;

// ==========================================
// Core type re-exports
// ==========================================

// Domain types
pub use domain::types::{RollupDimension, TransferMode};

// Domain entities
pub use domain::{
    AggregateRollup, DemandRecord, DestinationDiagnostic, OriginDiagnostic, RollupRow,
    SnapshotSet, StoreProductSnapshot, SupplyRecord, TransferDraft, TransferInstruction,
};

// Config
pub use config::{ParameterError, ParameterResult, RunParameters};

// Engines
pub use engine::{
    AllocationMatcher, DemandEvaluator, DiagnosticsProjector, RebalanceOrchestrator,
    RebalanceResult, SupplyEvaluator, ValuationEngine,
};

// Importer and report
pub use importer::{ImportError, ImportResult, SnapshotReader};
pub use report::{ReportError, ReportResult, ReportWriter};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Application name
pub const APP_NAME: &str = "Retail Stock Rebalancer";

// ==========================================
// Compile-time checks
// ==========================================
