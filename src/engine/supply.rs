// ==========================================
// Retail Stock Rebalancer - Supply Evaluator
// ==========================================
// Turns eligible origin snapshots into releasable quantities.
// Never mutates the input snapshots.
// ==========================================

use crate::config::RunParameters;
use crate::domain::records::SupplyRecord;
use crate::domain::snapshot::SnapshotSet;
use tracing::debug;

// ==========================================
// SupplyEvaluator
// ==========================================
pub struct SupplyEvaluator {
    // stateless engine, nothing to inject
}

impl SupplyEvaluator {
    pub fn new() -> Self {
        Self {}
    }

    /// Evaluates releasable surplus for every eligible origin snapshot.
    ///
    /// Only records with releasable > 0 are returned, ordered by
    /// (store, product_code) ascending. The matcher treats that
    /// ordering as part of its public contract.
    ///
    /// # Arguments
    /// - snapshots: immutable master snapshot set
    /// - params: run configuration (eligibility, days, threshold)
    pub fn evaluate(&self, snapshots: &SnapshotSet, params: &RunParameters) -> Vec<SupplyRecord> {
        let mut records = Vec::new();

        for snap in snapshots.rows() {
            if !params.is_eligible_origin(&snap.store) {
                continue;
            }

            let releasable = Self::releasable_quantity(
                snap.on_hand,
                snap.pending_po,
                snap.avg_daily_sales,
                params.min_days_out,
                params.min_movement_qty,
                params.include_pending_orders,
            );
            if releasable <= 0 {
                continue;
            }

            records.push(SupplyRecord {
                store: snap.store.clone(),
                product_code: snap.product_code.clone(),
                releasable,
            });
        }

        records.sort_by(|a, b| {
            (a.store.as_str(), a.product_code.as_str())
                .cmp(&(b.store.as_str(), b.product_code.as_str()))
        });

        debug!(supply_records = records.len(), "supply evaluation finished");
        records
    }

    /// Releasable-quantity formula, pure.
    ///
    /// releasable = round(on_hand - avg_daily_sales * min_days_out
    ///                    (+ pending_po when netting is on)).
    /// Negative results clamp to 0; results below the movement
    /// threshold drop to 0 (discarded, never rounded up).
    pub fn releasable_quantity(
        on_hand: f64,
        pending_po: f64,
        avg_daily_sales: f64,
        min_days_out: f64,
        min_movement_qty: i64,
        include_pending_orders: bool,
    ) -> i64 {
        let mut raw = on_hand - avg_daily_sales * min_days_out;
        if include_pending_orders {
            raw += pending_po;
        }

        let rounded = raw.round() as i64;
        if rounded < 0 {
            return 0;
        }
        if rounded < min_movement_qty {
            return 0;
        }
        rounded
    }
}

impl Default for SupplyEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
