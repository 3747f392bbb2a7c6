// ==========================================
// Retail Stock Rebalancer - Domain Types
// ==========================================
// Serialized form: SCREAMING_SNAKE_CASE (matches the
// parameters document and the exported report tables)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Transfer Mode
// ==========================================
// Controls which stores may ship and which may receive.
// ALL_TO_ALL ignores the explicit store sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferMode {
    StoreToStore, // restricted to the configured origin/destination sets
    AllToAll,     // every snapshot store is both origin and destination
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferMode::StoreToStore => write!(f, "STORE_TO_STORE"),
            TransferMode::AllToAll => write!(f, "ALL_TO_ALL"),
        }
    }
}

// ==========================================
// Rollup Dimension
// ==========================================
// The key a valuation rollup groups instruction values by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RollupDimension {
    Buyer,            // buyer label from the origin master row
    OriginStore,      // shipping store
    DestinationStore, // receiving store
}

impl fmt::Display for RollupDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollupDimension::Buyer => write!(f, "BUYER"),
            RollupDimension::OriginStore => write!(f, "ORIGIN_STORE"),
            RollupDimension::DestinationStore => write!(f, "DESTINATION_STORE"),
        }
    }
}
