// ==========================================
// Retail Stock Rebalancer - Allocation Matcher
// ==========================================
// The core greedy pass: per product, destinations draw from
// origins under a minimum-movement threshold, never from
// themselves. Single pass, no backtracking; a consumed origin
// is never refilled.
// ==========================================
// Emission order is a public contract: product code ascending,
// destination store ascending, then origin store ascending
// within each destination. Input row order never matters.
// ==========================================

use crate::config::RunParameters;
use crate::domain::records::{DemandRecord, SupplyRecord};
use crate::domain::transfer::TransferDraft;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

// ==========================================
// AllocationMatcher
// ==========================================
pub struct AllocationMatcher {
    // stateless engine, nothing to inject
}

impl AllocationMatcher {
    pub fn new() -> Self {
        Self {}
    }

    /// Greedily matches demand against supply, one product at a time.
    ///
    /// Rules:
    /// 1) only products present in both supply and demand move;
    /// 2) a store never ships to itself;
    /// 3) qty = min(origin remaining, destination remaining need);
    /// 4) qty below the movement threshold is discarded, not rounded up;
    /// 5) capacities decrement in a scratch arena; the input records
    ///    stay untouched.
    ///
    /// # Arguments
    /// - supply: SupplyRecords, releasable > 0 each
    /// - demand: DemandRecords, needed > 0 each
    /// - params: run configuration (movement threshold)
    ///
    /// # Returns
    /// Ordered transfer drafts (see the ordering contract above)
    #[instrument(skip(self, supply, demand, params), fields(
        supply_count = supply.len(),
        demand_count = demand.len(),
        min_movement_qty = params.min_movement_qty
    ))]
    pub fn match_transfers(
        &self,
        supply: &[SupplyRecord],
        demand: &[DemandRecord],
        params: &RunParameters,
    ) -> Vec<TransferDraft> {
        let mut drafts = Vec::new();

        // Scratch arena: one remaining-capacity cell per supply record,
        // addressed by index. Iteration reads the records; only the
        // arena is written.
        let mut remaining: Vec<i64> = supply.iter().map(|s| s.releasable).collect();

        // Per-product visit order. BTreeMap keys make the outer loop
        // ascend product codes; the index lists are sorted by store.
        let supply_by_product = index_by_product_sorted_by_store(
            supply.iter().map(|r| (r.product_code.as_str(), r.store.as_str())),
        );
        let demand_by_product = index_by_product_sorted_by_store(
            demand.iter().map(|r| (r.product_code.as_str(), r.store.as_str())),
        );

        for (product_code, demand_idxs) in &demand_by_product {
            let supply_idxs = match supply_by_product.get(product_code) {
                Some(idxs) => idxs,
                // no releasable stock anywhere for this product
                None => continue,
            };

            for &d in demand_idxs {
                let destination = &demand[d];
                let mut remaining_need = destination.needed;

                for &s in supply_idxs {
                    if remaining_need <= 0 {
                        break;
                    }

                    let origin = &supply[s];
                    if origin.store == destination.store {
                        // self-transfer forbidden
                        continue;
                    }
                    if remaining[s] == 0 {
                        // consumed earlier in this pass
                        continue;
                    }

                    let qty = remaining[s].min(remaining_need);
                    if qty < params.min_movement_qty {
                        debug!(
                            product_code = %product_code,
                            origin = %origin.store,
                            destination = %destination.store,
                            qty,
                            min_movement_qty = params.min_movement_qty,
                            "below movement threshold, match discarded"
                        );
                        continue;
                    }

                    drafts.push(TransferDraft {
                        product_code: product_code.clone(),
                        origin_store: origin.store.clone(),
                        destination_store: destination.store.clone(),
                        quantity: qty,
                    });
                    remaining[s] -= qty;
                    remaining_need -= qty;
                }
            }
        }

        debug!(drafts = drafts.len(), "allocation matching finished");
        drafts
    }
}

impl Default for AllocationMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Groups record positions by product code (ascending) with each
/// group sorted by store identifier (ascending).
fn index_by_product_sorted_by_store<'a>(
    keys: impl Iterator<Item = (&'a str, &'a str)>,
) -> BTreeMap<String, Vec<usize>> {
    let mut by_product: BTreeMap<String, Vec<(usize, &'a str)>> = BTreeMap::new();
    for (i, (product_code, store)) in keys.enumerate() {
        by_product
            .entry(product_code.to_string())
            .or_default()
            .push((i, store));
    }

    by_product
        .into_iter()
        .map(|(product_code, mut entries)| {
            entries.sort_by(|a, b| a.1.cmp(b.1));
            (
                product_code,
                entries.into_iter().map(|(i, _)| i).collect(),
            )
        })
        .collect()
}
