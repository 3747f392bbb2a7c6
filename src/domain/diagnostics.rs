// ==========================================
// Retail Stock Rebalancer - Diagnostics Rows
// ==========================================
// Read-only projections derived from the instruction list for
// reporting. Days-of-stock fields stay None when a store has no
// recorded average sales; never divided by zero.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// OriginDiagnostic - origin-side pre/post stock picture
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginDiagnostic {
    pub store: String,                    // origin store
    pub product_code: String,             // product code
    pub on_hand_before: f64,              // snapshot on-hand
    pub releasable: i64,                  // evaluator output
    pub shipped: i64,                     // sum of instruction quantities out
    pub on_hand_after: f64,               // on_hand_before - shipped
    pub days_of_stock_before: Option<f64>, // on_hand_before / avg sales
    pub days_of_stock_after: Option<f64>,  // on_hand_after / avg sales
}

// ==========================================
// DestinationDiagnostic - destination-side target vs. actual
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationDiagnostic {
    pub store: String,        // destination store
    pub product_code: String, // product code
    pub on_hand_before: f64,  // snapshot on-hand
    pub target_level: i64,    // desired units (days-of-sales target)
    pub needed: i64,          // evaluator output
    pub received: i64,        // sum of instruction quantities in
    pub on_hand_after: f64,   // on_hand_before + received
}
