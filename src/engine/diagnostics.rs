// ==========================================
// Retail Stock Rebalancer - Diagnostics Projector
// ==========================================
// Pre/post-transfer projections for reporting. Read-only over the
// matcher's output: shipped/received sums are recomputed from the
// instruction list, never taken from matcher scratch.
// ==========================================

use crate::domain::diagnostics::{DestinationDiagnostic, OriginDiagnostic};
use crate::domain::records::{DemandRecord, SupplyRecord};
use crate::domain::snapshot::SnapshotSet;
use crate::domain::transfer::TransferInstruction;
use std::collections::HashMap;

// ==========================================
// DiagnosticsProjector
// ==========================================
pub struct DiagnosticsProjector {
    // stateless engine, nothing to inject
}

impl DiagnosticsProjector {
    pub fn new() -> Self {
        Self {}
    }

    /// Origin-side pre/post stock and days-of-stock, one row per
    /// SupplyRecord in the evaluator's order.
    ///
    /// Days-of-stock stays None when the store has no recorded
    /// average sales; the projection never divides by zero.
    pub fn project_origins(
        &self,
        snapshots: &SnapshotSet,
        supply: &[SupplyRecord],
        instructions: &[TransferInstruction],
    ) -> Vec<OriginDiagnostic> {
        let shipped = sum_by_key(
            instructions
                .iter()
                .map(|i| (i.origin_store.as_str(), i.product_code.as_str(), i.quantity)),
        );

        supply
            .iter()
            .map(|record| {
                let (on_hand, avg_daily_sales) =
                    match snapshots.lookup(&record.store, &record.product_code) {
                        Some(snap) => (snap.on_hand, snap.avg_daily_sales),
                        // supply rows derive from snapshots; a missing
                        // master row projects as empty stock
                        None => (0.0, 0.0),
                    };
                let shipped_qty = shipped
                    .get(&(record.store.clone(), record.product_code.clone()))
                    .copied()
                    .unwrap_or(0);
                let on_hand_after = on_hand - shipped_qty as f64;

                OriginDiagnostic {
                    store: record.store.clone(),
                    product_code: record.product_code.clone(),
                    on_hand_before: on_hand,
                    releasable: record.releasable,
                    shipped: shipped_qty,
                    on_hand_after,
                    days_of_stock_before: days_of_stock(on_hand, avg_daily_sales),
                    days_of_stock_after: days_of_stock(on_hand_after, avg_daily_sales),
                }
            })
            .collect()
    }

    /// Destination-side target vs. actual, one row per DemandRecord
    /// in the evaluator's order.
    pub fn project_destinations(
        &self,
        snapshots: &SnapshotSet,
        demand: &[DemandRecord],
        instructions: &[TransferInstruction],
    ) -> Vec<DestinationDiagnostic> {
        let received = sum_by_key(instructions.iter().map(|i| {
            (
                i.destination_store.as_str(),
                i.product_code.as_str(),
                i.quantity,
            )
        }));

        demand
            .iter()
            .map(|record| {
                let on_hand = snapshots
                    .lookup(&record.store, &record.product_code)
                    .map(|snap| snap.on_hand)
                    .unwrap_or(0.0);
                let received_qty = received
                    .get(&(record.store.clone(), record.product_code.clone()))
                    .copied()
                    .unwrap_or(0);

                DestinationDiagnostic {
                    store: record.store.clone(),
                    product_code: record.product_code.clone(),
                    on_hand_before: on_hand,
                    target_level: record.target_level,
                    needed: record.needed,
                    received: received_qty,
                    on_hand_after: on_hand + received_qty as f64,
                }
            })
            .collect()
    }
}

impl Default for DiagnosticsProjector {
    fn default() -> Self {
        Self::new()
    }
}

/// days = quantity / average daily sales; None when sales is 0.
fn days_of_stock(quantity: f64, avg_daily_sales: f64) -> Option<f64> {
    if avg_daily_sales > 0.0 {
        Some(quantity / avg_daily_sales)
    } else {
        None
    }
}

fn sum_by_key<'a>(
    entries: impl Iterator<Item = (&'a str, &'a str, i64)>,
) -> HashMap<(String, String), i64> {
    let mut sums: HashMap<(String, String), i64> = HashMap::new();
    for (store, product_code, quantity) in entries {
        *sums
            .entry((store.to_string(), product_code.to_string()))
            .or_insert(0) += quantity;
    }
    sums
}

// ==========================================
// Tests
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::snapshot::StoreProductSnapshot;

    // ==========================================
    // Test helpers
    // ==========================================

    fn create_test_snapshot(
        store: &str,
        product_code: &str,
        on_hand: f64,
        avg_daily_sales: f64,
    ) -> StoreProductSnapshot {
        StoreProductSnapshot {
            store: store.to_string(),
            product_code: product_code.to_string(),
            product_name: format!("Product {}", product_code),
            package_unit: "UN".to_string(),
            on_hand,
            pending_po: 0.0,
            avg_daily_sales,
            unit_cost: 1.0,
            buyer: "BUYER-01".to_string(),
        }
    }

    fn create_test_instruction(
        product_code: &str,
        origin: &str,
        destination: &str,
        quantity: i64,
    ) -> TransferInstruction {
        TransferInstruction {
            product_code: product_code.to_string(),
            product_name: format!("Product {}", product_code),
            package_unit: "UN".to_string(),
            quantity,
            origin_store: origin.to_string(),
            destination_store: destination.to_string(),
            unit_cost: 1.0,
            buyer: "BUYER-01".to_string(),
            value: quantity as f64,
        }
    }

    // ==========================================
    // Origin-side tests
    // ==========================================

    #[test]
    fn test_origin_projection_pre_post_stock() {
        let projector = DiagnosticsProjector::new();
        let snapshots = SnapshotSet::from_rows(vec![create_test_snapshot("SX", "P001", 100.0, 5.0)]);
        let supply = vec![SupplyRecord {
            store: "SX".to_string(),
            product_code: "P001".to_string(),
            releasable: 65,
        }];
        let instructions = vec![
            create_test_instruction("P001", "SX", "SY", 40),
            create_test_instruction("P001", "SX", "SZ", 20),
        ];

        let rows = projector.project_origins(&snapshots, &supply, &instructions);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.on_hand_before, 100.0);
        assert_eq!(row.shipped, 60);
        assert_eq!(row.on_hand_after, 40.0);
        assert_eq!(row.days_of_stock_before, Some(20.0));
        assert_eq!(row.days_of_stock_after, Some(8.0));
    }

    #[test]
    fn test_origin_projection_zero_sales_leaves_days_undefined() {
        let projector = DiagnosticsProjector::new();
        let snapshots = SnapshotSet::from_rows(vec![create_test_snapshot("SX", "P001", 100.0, 0.0)]);
        let supply = vec![SupplyRecord {
            store: "SX".to_string(),
            product_code: "P001".to_string(),
            releasable: 100,
        }];

        let rows = projector.project_origins(&snapshots, &supply, &[]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].days_of_stock_before, None);
        assert_eq!(rows[0].days_of_stock_after, None);
        assert_eq!(rows[0].shipped, 0);
        assert_eq!(rows[0].on_hand_after, 100.0);
    }

    #[test]
    fn test_origin_projection_ignores_other_stores_shipments() {
        let projector = DiagnosticsProjector::new();
        let snapshots = SnapshotSet::from_rows(vec![
            create_test_snapshot("SX", "P001", 50.0, 1.0),
            create_test_snapshot("SW", "P001", 50.0, 1.0),
        ]);
        let supply = vec![SupplyRecord {
            store: "SX".to_string(),
            product_code: "P001".to_string(),
            releasable: 40,
        }];
        let instructions = vec![create_test_instruction("P001", "SW", "SY", 30)];

        let rows = projector.project_origins(&snapshots, &supply, &instructions);

        assert_eq!(rows[0].shipped, 0);
        assert_eq!(rows[0].on_hand_after, 50.0);
    }

    // ==========================================
    // Destination-side tests
    // ==========================================

    #[test]
    fn test_destination_projection_target_vs_actual() {
        let projector = DiagnosticsProjector::new();
        let snapshots = SnapshotSet::from_rows(vec![create_test_snapshot("SY", "P001", 30.0, 5.0)]);
        let demand = vec![DemandRecord {
            store: "SY".to_string(),
            product_code: "P001".to_string(),
            needed: 40,
            target_level: 70,
        }];
        let instructions = vec![create_test_instruction("P001", "SX", "SY", 25)];

        let rows = projector.project_destinations(&snapshots, &demand, &instructions);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.on_hand_before, 30.0);
        assert_eq!(row.target_level, 70);
        assert_eq!(row.needed, 40);
        assert_eq!(row.received, 25);
        assert_eq!(row.on_hand_after, 55.0);
    }

    #[test]
    fn test_destination_projection_nothing_received() {
        let projector = DiagnosticsProjector::new();
        let snapshots = SnapshotSet::from_rows(vec![create_test_snapshot("SY", "P001", 10.0, 2.0)]);
        let demand = vec![DemandRecord {
            store: "SY".to_string(),
            product_code: "P001".to_string(),
            needed: 18,
            target_level: 28,
        }];

        let rows = projector.project_destinations(&snapshots, &demand, &[]);

        assert_eq!(rows[0].received, 0);
        assert_eq!(rows[0].on_hand_after, 10.0);
    }
}
