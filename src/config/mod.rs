// ==========================================
// Retail Stock Rebalancer - Configuration Layer
// ==========================================
// One immutable RunParameters value per run; validation happens
// before any engine touches the data.
// ==========================================

pub mod error;
pub mod run_parameters;

// Re-export the configuration surface
pub use error::{ParameterError, ParameterResult};
pub use run_parameters::RunParameters;
