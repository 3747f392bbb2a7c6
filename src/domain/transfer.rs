// ==========================================
// Retail Stock Rebalancer - Transfer Domain Model
// ==========================================
// The matcher emits drafts; valuation enriches them 1:1 into
// full instructions and rolls values up per dimension.
// ==========================================

use crate::domain::types::RollupDimension;
use serde::{Deserialize, Serialize};

/// Key label of the synthesized grand-total row appended to every rollup.
pub const TOTAL_KEY: &str = "TOTAL";

// ==========================================
// TransferDraft - matcher output, pre-valuation
// ==========================================
// Carries only what the greedy pass decides; master data is
// attached afterwards by the valuation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferDraft {
    pub product_code: String,      // product being moved
    pub origin_store: String,      // shipping store
    pub destination_store: String, // receiving store
    pub quantity: i64,             // units moved (>= movement threshold)
}

// ==========================================
// TransferInstruction - final output row
// ==========================================
// Invariant: origin_store != destination_store,
// quantity >= movement threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferInstruction {
    // ===== product =====
    pub product_code: String, // product code
    pub product_name: String, // display name from the origin master row
    pub package_unit: String, // package-unit label

    // ===== movement =====
    pub quantity: i64,             // units moved
    pub origin_store: String,      // shipping store
    pub destination_store: String, // receiving store

    // ===== valuation =====
    pub unit_cost: f64, // origin master cost (0 when absent)
    pub buyer: String,  // origin master buyer ("N/A" when absent)
    pub value: f64,     // quantity * unit_cost
}

// ==========================================
// AggregateRollup - per-dimension value totals
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollupRow {
    pub key: String,      // dimension value, or TOTAL for the trailing row
    pub total_value: f64, // summed instruction value
}

/// Rows are ordered ascending by key with the TOTAL row appended last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRollup {
    pub dimension: RollupDimension, // what the keys mean
    pub rows: Vec<RollupRow>,       // per-key sums + trailing TOTAL
}

impl AggregateRollup {
    /// The grand total carried by the trailing TOTAL row, 0 when empty.
    pub fn grand_total(&self) -> f64 {
        self.rows
            .iter()
            .find(|r| r.key == TOTAL_KEY)
            .map(|r| r.total_value)
            .unwrap_or(0.0)
    }
}
