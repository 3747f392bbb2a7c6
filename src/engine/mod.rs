// ==========================================
// Retail Stock Rebalancer - Engine Module
// ==========================================
// Pure computation layer. Every engine is stateless and side-effect
// free: snapshots in, records and instructions out.
// ==========================================

pub mod demand;
pub mod diagnostics;
pub mod matcher;
pub mod orchestrator;
pub mod supply;
pub mod valuation;

pub use demand::DemandEvaluator;
pub use diagnostics::DiagnosticsProjector;
pub use matcher::AllocationMatcher;
pub use orchestrator::{RebalanceOrchestrator, RebalanceResult};
pub use supply::SupplyEvaluator;
pub use valuation::{ValuationEngine, UNKNOWN_BUYER};
