// ==========================================
// Retail Stock Rebalancer - Engine Orchestrator
// ==========================================
// Coordinates the run pipeline: parameter validation, supply and
// demand evaluation, allocation matching, valuation, rollups,
// diagnostics. One immutable result value per run; the engines
// keep no state between runs.
// ==========================================

use crate::config::{ParameterResult, RunParameters};
use crate::domain::diagnostics::{DestinationDiagnostic, OriginDiagnostic};
use crate::domain::records::{DemandRecord, SupplyRecord};
use crate::domain::snapshot::SnapshotSet;
use crate::domain::transfer::{AggregateRollup, TransferInstruction};
use crate::domain::types::RollupDimension;
use crate::engine::{
    AllocationMatcher, DemandEvaluator, DiagnosticsProjector, SupplyEvaluator, ValuationEngine,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use uuid::Uuid;

// ==========================================
// RebalanceResult - run-scoped output
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RebalanceResult {
    // ===== run metadata =====
    pub run_id: Uuid,                // fresh v4 per run
    pub generated_at: DateTime<Utc>, // stamp at completion
    pub parameters: RunParameters,   // echoed for audit

    // ===== evaluator outputs =====
    pub supply_records: Vec<SupplyRecord>,
    pub demand_records: Vec<DemandRecord>,

    // ===== matcher + valuation outputs =====
    pub transfers: Vec<TransferInstruction>,
    pub rollup_by_buyer: AggregateRollup,
    pub rollup_by_origin: AggregateRollup,
    pub rollup_by_destination: AggregateRollup,

    // ===== diagnostics outputs =====
    pub origin_diagnostics: Vec<OriginDiagnostic>,
    pub destination_diagnostics: Vec<DestinationDiagnostic>,
}

impl RebalanceResult {
    /// Total monetary value moved by the run.
    pub fn total_transfer_value(&self) -> f64 {
        self.rollup_by_buyer.grand_total()
    }
}

// ==========================================
// RebalanceOrchestrator
// ==========================================
pub struct RebalanceOrchestrator {
    supply_evaluator: SupplyEvaluator,
    demand_evaluator: DemandEvaluator,
    matcher: AllocationMatcher,
    valuation: ValuationEngine,
    diagnostics: DiagnosticsProjector,
}

impl RebalanceOrchestrator {
    pub fn new() -> Self {
        Self {
            supply_evaluator: SupplyEvaluator::new(),
            demand_evaluator: DemandEvaluator::new(),
            matcher: AllocationMatcher::new(),
            valuation: ValuationEngine::new(),
            diagnostics: DiagnosticsProjector::new(),
        }
    }

    /// Executes one full reallocation run.
    ///
    /// Parameters are validated before anything else; every later
    /// stage is infallible. Empty supply, empty demand or no product
    /// intersection fall through to an empty (but complete) result.
    ///
    /// # Arguments
    /// - snapshots: immutable master snapshot set
    /// - params: immutable run configuration
    ///
    /// # Returns
    /// The run-scoped result, stamped with run id and timestamp
    #[instrument(skip(self, snapshots, params), fields(snapshot_rows = snapshots.len()))]
    pub fn run(
        &self,
        snapshots: &SnapshotSet,
        params: &RunParameters,
    ) -> ParameterResult<RebalanceResult> {
        params.validate()?;

        let run_id = Uuid::new_v4();
        info!(
            %run_id,
            transfer_mode = %params.transfer_mode,
            min_days_out = params.min_days_out,
            target_days_in = params.target_days_in,
            min_movement_qty = params.min_movement_qty,
            "rebalance run started"
        );

        // ==========================================
        // Step 1: supply evaluation
        // ==========================================
        debug!("step 1: supply evaluation");
        let supply_records = self.supply_evaluator.evaluate(snapshots, params);
        info!(supply_records = supply_records.len(), "supply evaluation complete");

        // ==========================================
        // Step 2: demand evaluation
        // ==========================================
        debug!("step 2: demand evaluation");
        let demand_records = self.demand_evaluator.evaluate(snapshots, params);
        info!(demand_records = demand_records.len(), "demand evaluation complete");

        // ==========================================
        // Step 3: allocation matching
        // ==========================================
        debug!("step 3: allocation matching");
        let drafts = self
            .matcher
            .match_transfers(&supply_records, &demand_records, params);
        info!(drafts = drafts.len(), "allocation matching complete");

        // ==========================================
        // Step 4: valuation
        // ==========================================
        debug!("step 4: valuation");
        let transfers = self.valuation.enrich(&drafts, snapshots);

        // ==========================================
        // Step 5: rollups
        // ==========================================
        debug!("step 5: rollups");
        let rollup_by_buyer = self.valuation.rollup(&transfers, RollupDimension::Buyer);
        let rollup_by_origin = self.valuation.rollup(&transfers, RollupDimension::OriginStore);
        let rollup_by_destination = self
            .valuation
            .rollup(&transfers, RollupDimension::DestinationStore);
        info!(
            transfers = transfers.len(),
            total_value = rollup_by_buyer.grand_total(),
            "valuation and rollups complete"
        );

        // ==========================================
        // Step 6: diagnostics
        // ==========================================
        debug!("step 6: diagnostics projection");
        let origin_diagnostics =
            self.diagnostics
                .project_origins(snapshots, &supply_records, &transfers);
        let destination_diagnostics =
            self.diagnostics
                .project_destinations(snapshots, &demand_records, &transfers);
        info!(
            origin_rows = origin_diagnostics.len(),
            destination_rows = destination_diagnostics.len(),
            "diagnostics projection complete"
        );

        info!(%run_id, "rebalance run finished");

        Ok(RebalanceResult {
            run_id,
            generated_at: Utc::now(),
            parameters: params.clone(),
            supply_records,
            demand_records,
            transfers,
            rollup_by_buyer,
            rollup_by_origin,
            rollup_by_destination,
            origin_diagnostics,
            destination_diagnostics,
        })
    }
}

impl Default for RebalanceOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
