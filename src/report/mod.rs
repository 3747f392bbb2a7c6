// ==========================================
// Retail Stock Rebalancer - Report Module
// ==========================================
// Renders run results to files for review and downstream tooling.
// ==========================================

pub mod error;
pub mod writer;

pub use error::{ReportError, ReportResult};
pub use writer::ReportWriter;
