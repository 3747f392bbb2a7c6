// ==========================================
// Retail Stock Rebalancer - Derived Evaluation Records
// ==========================================
// Scratch rows produced by the supply/demand evaluators and
// consumed by the matcher. Rebuilt on every run, never persisted.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// SupplyRecord - releasable surplus at one store
// ==========================================
// releasable = round(on_hand - avg_daily_sales * min_days_out
//                    (+ pending_po when netting is on)),
// clamped at 0 and dropped when below the movement threshold.
// Only records with releasable > 0 leave the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyRecord {
    pub store: String,        // origin store
    pub product_code: String, // product code
    pub releasable: i64,      // units the store may give up (> 0)
}

// ==========================================
// DemandRecord - deficit against the target level at one store
// ==========================================
// needed = ceil(avg_daily_sales * target_days_in - on_hand
//               (- pending_po when netting is on)),
// dropped when below the movement threshold.
// Rounded up, unlike supply's round-to-nearest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandRecord {
    pub store: String,        // destination store
    pub product_code: String, // product code
    pub needed: i64,          // units short of the target level (> 0)
    pub target_level: i64,    // ceil(avg_daily_sales * target_days_in), diagnostics only
}
