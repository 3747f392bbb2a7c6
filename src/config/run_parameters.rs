// ==========================================
// Retail Stock Rebalancer - Run Parameters
// ==========================================
// One immutable value per run, passed explicitly into the
// engines. No process-wide parameter state anywhere.
// ==========================================

use crate::config::error::{ParameterError, ParameterResult};
use crate::domain::types::TransferMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Reallocation run configuration.
///
/// Loaded from a JSON document; omitted fields take the defaults
/// below. Validate before running the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunParameters {
    /// Days of projected sales an origin must keep on hand.
    #[serde(default = "default_min_days_out")]
    pub min_days_out: f64,

    /// Days of projected sales a destination is topped up to.
    #[serde(default = "default_target_days_in")]
    pub target_days_in: f64,

    /// Smallest quantity worth shipping; smaller matches are discarded,
    /// never rounded up.
    #[serde(default = "default_min_movement_qty")]
    pub min_movement_qty: i64,

    /// Net pending purchase orders into both supply and demand.
    #[serde(default)]
    pub include_pending_orders: bool,

    /// Which stores may ship and which may receive.
    #[serde(default = "default_transfer_mode")]
    pub transfer_mode: TransferMode,

    /// Eligible origin stores (STORE_TO_STORE mode only).
    #[serde(default)]
    pub origin_stores: Vec<String>,

    /// Eligible destination stores (STORE_TO_STORE mode only).
    #[serde(default)]
    pub destination_stores: Vec<String>,
}

fn default_min_days_out() -> f64 {
    7.0
}

fn default_target_days_in() -> f64 {
    14.0
}

fn default_min_movement_qty() -> i64 {
    1
}

fn default_transfer_mode() -> TransferMode {
    TransferMode::AllToAll
}

impl Default for RunParameters {
    fn default() -> Self {
        Self {
            min_days_out: default_min_days_out(),
            target_days_in: default_target_days_in(),
            min_movement_qty: default_min_movement_qty(),
            include_pending_orders: false,
            transfer_mode: default_transfer_mode(),
            origin_stores: Vec::new(),
            destination_stores: Vec::new(),
        }
    }
}

impl RunParameters {
    /// Loads and validates parameters from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ParameterResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ParameterError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let params: RunParameters = serde_json::from_str(&content)?;
        params.validate()?;
        Ok(params)
    }

    /// Checks value ranges and mode consistency.
    ///
    /// Empty supply or demand later on is a business condition, not an
    /// error; an empty eligible set in STORE_TO_STORE mode is a
    /// configuration mistake and is rejected here.
    pub fn validate(&self) -> ParameterResult<()> {
        check_finite_non_negative("min_days_out", self.min_days_out)?;
        check_finite_non_negative("target_days_in", self.target_days_in)?;

        if self.min_movement_qty < 0 {
            return Err(ParameterError::NegativeNumber {
                field: "min_movement_qty",
                value: self.min_movement_qty as f64,
            });
        }

        if self.transfer_mode == TransferMode::StoreToStore {
            if self.origin_stores.is_empty() {
                return Err(ParameterError::EmptyStoreSet { role: "origin" });
            }
            if self.destination_stores.is_empty() {
                return Err(ParameterError::EmptyStoreSet { role: "destination" });
            }
        }

        Ok(())
    }

    /// Whether a store may ship under these parameters.
    pub fn is_eligible_origin(&self, store: &str) -> bool {
        match self.transfer_mode {
            TransferMode::AllToAll => true,
            TransferMode::StoreToStore => self.origin_stores.iter().any(|s| s == store),
        }
    }

    /// Whether a store may receive under these parameters.
    pub fn is_eligible_destination(&self, store: &str) -> bool {
        match self.transfer_mode {
            TransferMode::AllToAll => true,
            TransferMode::StoreToStore => self.destination_stores.iter().any(|s| s == store),
        }
    }
}

fn check_finite_non_negative(field: &'static str, value: f64) -> ParameterResult<()> {
    if !value.is_finite() {
        return Err(ParameterError::NonFiniteNumber { field, value });
    }
    if value < 0.0 {
        return Err(ParameterError::NegativeNumber { field, value });
    }
    Ok(())
}
