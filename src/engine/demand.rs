// ==========================================
// Retail Stock Rebalancer - Demand Evaluator
// ==========================================
// Turns eligible destination snapshots into needed quantities
// against a days-of-sales target level.
// ==========================================

use crate::config::RunParameters;
use crate::domain::records::DemandRecord;
use crate::domain::snapshot::SnapshotSet;
use tracing::debug;

// ==========================================
// DemandEvaluator
// ==========================================
pub struct DemandEvaluator {
    // stateless engine, nothing to inject
}

impl DemandEvaluator {
    pub fn new() -> Self {
        Self {}
    }

    /// Evaluates the deficit of every eligible destination snapshot.
    ///
    /// Only records with needed > 0 are returned, ordered by
    /// (store, product_code) ascending. Each record carries the
    /// target stock level for the diagnostics projector.
    ///
    /// # Arguments
    /// - snapshots: immutable master snapshot set
    /// - params: run configuration (eligibility, days, threshold)
    pub fn evaluate(&self, snapshots: &SnapshotSet, params: &RunParameters) -> Vec<DemandRecord> {
        let mut records = Vec::new();

        for snap in snapshots.rows() {
            if !params.is_eligible_destination(&snap.store) {
                continue;
            }

            let needed = Self::needed_quantity(
                snap.on_hand,
                snap.pending_po,
                snap.avg_daily_sales,
                params.target_days_in,
                params.min_movement_qty,
                params.include_pending_orders,
            );
            if needed <= 0 {
                continue;
            }

            records.push(DemandRecord {
                store: snap.store.clone(),
                product_code: snap.product_code.clone(),
                needed,
                target_level: Self::target_level(snap.avg_daily_sales, params.target_days_in),
            });
        }

        records.sort_by(|a, b| {
            (a.store.as_str(), a.product_code.as_str())
                .cmp(&(b.store.as_str(), b.product_code.as_str()))
        });

        debug!(demand_records = records.len(), "demand evaluation finished");
        records
    }

    /// Needed-quantity formula, pure.
    ///
    /// needed = ceil(avg_daily_sales * target_days_in - on_hand
    ///               (- pending_po when netting is on)).
    /// Always rounds up, unlike supply's round-to-nearest. Negative
    /// results clamp to 0; results below the movement threshold drop
    /// to 0.
    pub fn needed_quantity(
        on_hand: f64,
        pending_po: f64,
        avg_daily_sales: f64,
        target_days_in: f64,
        min_movement_qty: i64,
        include_pending_orders: bool,
    ) -> i64 {
        let mut raw = avg_daily_sales * target_days_in - on_hand;
        if include_pending_orders {
            raw -= pending_po;
        }

        let needed = raw.ceil() as i64;
        if needed < 0 {
            return 0;
        }
        if needed < min_movement_qty {
            return 0;
        }
        needed
    }

    /// Target stock level in units: ceil(avg_daily_sales * target_days_in).
    /// Diagnostics only; the matcher never reads it.
    pub fn target_level(avg_daily_sales: f64, target_days_in: f64) -> i64 {
        (avg_daily_sales * target_days_in).ceil() as i64
    }
}

impl Default for DemandEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
