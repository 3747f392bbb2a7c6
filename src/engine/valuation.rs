// ==========================================
// Retail Stock Rebalancer - Valuation & Aggregation Engine
// ==========================================
// Enriches matcher drafts with origin master data and rolls
// instruction values up per dimension. Missing master rows are
// defaulted, never errors: a complete transfer plan beats strict
// lookup validation here, the caller audits separately.
// ==========================================

use crate::domain::snapshot::SnapshotSet;
use crate::domain::transfer::{AggregateRollup, RollupRow, TransferDraft, TransferInstruction, TOTAL_KEY};
use crate::domain::types::RollupDimension;
use std::collections::BTreeMap;
use tracing::debug;

/// Buyer placeholder when the origin master row is missing.
pub const UNKNOWN_BUYER: &str = "N/A";

// ==========================================
// ValuationEngine
// ==========================================
pub struct ValuationEngine {
    // stateless engine, nothing to inject
}

impl ValuationEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// Enriches drafts 1:1 into priced instructions, order-preserving.
    ///
    /// Master data comes from the origin's snapshot keyed by
    /// (store, product). A missing key defaults to unit cost 0 and
    /// buyer "N/A"; the name falls back to the product code and the
    /// package unit to "".
    pub fn enrich(
        &self,
        drafts: &[TransferDraft],
        snapshots: &SnapshotSet,
    ) -> Vec<TransferInstruction> {
        drafts
            .iter()
            .map(|draft| match snapshots.lookup(&draft.origin_store, &draft.product_code) {
                Some(master) => TransferInstruction {
                    product_code: draft.product_code.clone(),
                    product_name: master.product_name.clone(),
                    package_unit: master.package_unit.clone(),
                    quantity: draft.quantity,
                    origin_store: draft.origin_store.clone(),
                    destination_store: draft.destination_store.clone(),
                    unit_cost: master.unit_cost,
                    buyer: master.buyer.clone(),
                    value: draft.quantity as f64 * master.unit_cost,
                },
                None => {
                    debug!(
                        origin = %draft.origin_store,
                        product_code = %draft.product_code,
                        "origin master row missing, defaulting cost/buyer"
                    );
                    TransferInstruction {
                        product_code: draft.product_code.clone(),
                        product_name: draft.product_code.clone(),
                        package_unit: String::new(),
                        quantity: draft.quantity,
                        origin_store: draft.origin_store.clone(),
                        destination_store: draft.destination_store.clone(),
                        unit_cost: 0.0,
                        buyer: UNKNOWN_BUYER.to_string(),
                        value: 0.0,
                    }
                }
            })
            .collect()
    }

    /// Sums instruction values per dimension key.
    ///
    /// Rows come back ascending by key with a trailing TOTAL row equal
    /// to the sum of the emitted rows. Pure aggregation: re-running
    /// over the same instructions yields identical totals.
    pub fn rollup(
        &self,
        instructions: &[TransferInstruction],
        dimension: RollupDimension,
    ) -> AggregateRollup {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();

        for instr in instructions {
            let key = match dimension {
                RollupDimension::Buyer => instr.buyer.clone(),
                RollupDimension::OriginStore => instr.origin_store.clone(),
                RollupDimension::DestinationStore => instr.destination_store.clone(),
            };
            *totals.entry(key).or_insert(0.0) += instr.value;
        }

        let mut rows: Vec<RollupRow> = totals
            .into_iter()
            .map(|(key, total_value)| RollupRow { key, total_value })
            .collect();
        // TOTAL is derived from the emitted rows, not re-summed from
        // the instruction stream; the written table always reconciles.
        let grand_total: f64 = rows.iter().map(|r| r.total_value).sum();
        rows.push(RollupRow {
            key: TOTAL_KEY.to_string(),
            total_value: grand_total,
        });

        AggregateRollup { dimension, rows }
    }
}

impl Default for ValuationEngine {
    fn default() -> Self {
        Self::new()
    }
}
