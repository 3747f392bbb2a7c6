// ==========================================
// Retail Stock Rebalancer - Importer Errors
// ==========================================

use thiserror::Error;

/// Errors raised while loading the snapshot file.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== file errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("failed to read file: {0}")]
    FileReadError(String),

    #[error("failed to parse CSV: {0}")]
    CsvParseError(String),

    // ===== schema errors =====
    #[error("required column missing: {column}")]
    MissingColumn { column: String },

    // ===== value errors =====
    #[error("invalid value (row {row}, column {column}): {value}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("duplicate snapshot (row {row}): store {store}, product {product_code}")]
    DuplicateSnapshot {
        row: usize,
        store: String,
        product_code: String,
    },

    // ===== catch-all =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result alias for importer operations.
pub type ImportResult<T> = Result<T, ImportError>;
