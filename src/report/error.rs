// ==========================================
// Retail Stock Rebalancer - Report Errors
// ==========================================

use thiserror::Error;

/// Errors raised while writing run reports.
#[derive(Error, Debug)]
pub enum ReportError {
    // ===== I/O errors =====
    #[error("failed to write report file: {0}")]
    Io(String),

    #[error("failed to write CSV: {0}")]
    CsvWriteError(String),

    #[error("failed to serialize report JSON: {0}")]
    JsonError(String),

    // ===== catch-all =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Io(err.to_string())
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        ReportError::CsvWriteError(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::JsonError(err.to_string())
    }
}

/// Result alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;
