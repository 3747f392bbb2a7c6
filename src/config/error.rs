// ==========================================
// Retail Stock Rebalancer - Parameter Error Types
// ==========================================
// Surfaced before any engine runs; the engines themselves
// return plain values.
// ==========================================

use thiserror::Error;

/// Run-parameter loading and validation errors
#[derive(Error, Debug)]
pub enum ParameterError {
    // ===== file errors =====
    #[error("parameters file not found: {0}")]
    FileNotFound(String),

    #[error("failed to read parameters file: {0}")]
    FileReadError(String),

    #[error("failed to parse parameters JSON: {0}")]
    JsonParseError(String),

    // ===== value errors =====
    #[error("parameter {field} must be a finite number, got {value}")]
    NonFiniteNumber { field: &'static str, value: f64 },

    #[error("parameter {field} must not be negative, got {value}")]
    NegativeNumber { field: &'static str, value: f64 },

    // ===== mode errors =====
    #[error("STORE_TO_STORE mode requires a non-empty {role} store set")]
    EmptyStoreSet { role: &'static str },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ParameterError {
    fn from(err: std::io::Error) -> Self {
        ParameterError::FileReadError(err.to_string())
    }
}

impl From<serde_json::Error> for ParameterError {
    fn from(err: serde_json::Error) -> Self {
        ParameterError::JsonParseError(err.to_string())
    }
}

/// Result type alias
pub type ParameterResult<T> = Result<T, ParameterError>;
