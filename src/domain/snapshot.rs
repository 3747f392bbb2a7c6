// ==========================================
// Retail Stock Rebalancer - Snapshot Domain Model
// ==========================================
// One row per (store, product). Written by the import layer,
// read-only for the engine layer.
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// StoreProductSnapshot - stock picture of one product at one store
// ==========================================
// Invariant: at most one snapshot per (store, product) pair.
// The importer rejects duplicates before the engines run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreProductSnapshot {
    // ===== key =====
    pub store: String,        // store identifier
    pub product_code: String, // product code

    // ===== descriptive master data =====
    pub product_name: String, // product display name
    pub package_unit: String, // package-unit label (CX/UN/...)

    // ===== stock picture =====
    pub on_hand: f64,         // quantity available
    pub pending_po: f64,      // pending purchase-order quantity
    pub avg_daily_sales: f64, // average daily sales

    // ===== valuation master data =====
    pub unit_cost: f64, // unit gross cost (0 when unknown)
    pub buyer: String,  // buyer label ("N/A" when unknown)
}

impl StoreProductSnapshot {
    /// Composite key used by indexes and diagnostics.
    pub fn key(&self) -> (String, String) {
        (self.store.clone(), self.product_code.clone())
    }
}

// ==========================================
// SnapshotSet - engine-facing container
// ==========================================
// Owns the rows plus a (store, product) index for master lookups
// during valuation and diagnostics. Built once per run, never mutated.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSet {
    rows: Vec<StoreProductSnapshot>,
    index: HashMap<(String, String), usize>,
}

impl SnapshotSet {
    /// Builds the set from imported rows.
    ///
    /// Precondition: at most one row per (store, product). The importer
    /// enforces this; a duplicate passed here would shadow the earlier
    /// row in the lookup index.
    pub fn from_rows(rows: Vec<StoreProductSnapshot>) -> Self {
        let mut index = HashMap::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            index.insert(row.key(), i);
        }
        Self { rows, index }
    }

    pub fn rows(&self) -> &[StoreProductSnapshot] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Master lookup by (store, product).
    pub fn lookup(&self, store: &str, product_code: &str) -> Option<&StoreProductSnapshot> {
        self.index
            .get(&(store.to_string(), product_code.to_string()))
            .map(|&i| &self.rows[i])
    }
}
