// ==========================================
// Retail Stock Rebalancer - Report Writer
// ==========================================
// Renders one run result into an output directory: CSV files for
// spreadsheet review plus a full JSON dump for downstream tooling.
// ==========================================

use crate::domain::diagnostics::{DestinationDiagnostic, OriginDiagnostic};
use crate::domain::transfer::{AggregateRollup, TransferInstruction};
use crate::engine::RebalanceResult;
use crate::report::error::ReportResult;
use csv::Writer;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info, instrument};

const TRANSFER_HEADER: &[&str] = &[
    "product_code",
    "product_name",
    "package_unit",
    "quantity",
    "origin_store",
    "destination_store",
    "unit_cost",
    "buyer",
    "value",
];

const ORIGIN_DIAGNOSTIC_HEADER: &[&str] = &[
    "store",
    "product_code",
    "on_hand_before",
    "releasable",
    "shipped",
    "on_hand_after",
    "days_of_stock_before",
    "days_of_stock_after",
];

const DESTINATION_DIAGNOSTIC_HEADER: &[&str] = &[
    "store",
    "product_code",
    "on_hand_before",
    "target_level",
    "needed",
    "received",
    "on_hand_after",
];

pub struct ReportWriter;

impl ReportWriter {
    pub fn new() -> Self {
        Self
    }

    /// Writes the complete report set for one run.
    ///
    /// The directory is created if missing; existing files are
    /// overwritten.
    ///
    /// # Arguments
    /// - result: the run result to render
    /// - out_dir: target directory
    #[instrument(skip(self, result, out_dir), fields(run_id = %result.run_id))]
    pub fn write_all<P: AsRef<Path>>(
        &self,
        result: &RebalanceResult,
        out_dir: P,
    ) -> ReportResult<()> {
        let out_dir = out_dir.as_ref();
        std::fs::create_dir_all(out_dir)?;

        self.write_transfers(&result.transfers, &out_dir.join("transfers.csv"))?;
        self.write_rollup(
            &result.rollup_by_buyer,
            "buyer",
            &out_dir.join("rollup_by_buyer.csv"),
        )?;
        self.write_rollup(
            &result.rollup_by_origin,
            "origin_store",
            &out_dir.join("rollup_by_origin.csv"),
        )?;
        self.write_rollup(
            &result.rollup_by_destination,
            "destination_store",
            &out_dir.join("rollup_by_destination.csv"),
        )?;
        self.write_parameters(result, &out_dir.join("parameters.csv"))?;
        self.write_origin_diagnostics(
            &result.origin_diagnostics,
            &out_dir.join("origin_diagnostics.csv"),
        )?;
        self.write_destination_diagnostics(
            &result.destination_diagnostics,
            &out_dir.join("destination_diagnostics.csv"),
        )?;
        self.write_json(result, &out_dir.join("report.json"))?;

        info!(out_dir = %out_dir.display(), "report written");
        Ok(())
    }

    fn write_transfers(
        &self,
        transfers: &[TransferInstruction],
        path: &Path,
    ) -> ReportResult<()> {
        let mut wtr = Writer::from_writer(File::create(path)?);
        wtr.write_record(TRANSFER_HEADER)?;

        for transfer in transfers {
            wtr.write_record(&[
                transfer.product_code.clone(),
                transfer.product_name.clone(),
                transfer.package_unit.clone(),
                transfer.quantity.to_string(),
                transfer.origin_store.clone(),
                transfer.destination_store.clone(),
                format!("{:.2}", transfer.unit_cost),
                transfer.buyer.clone(),
                format!("{:.2}", transfer.value),
            ])?;
        }

        wtr.flush()?;
        debug!(rows = transfers.len(), path = %path.display(), "transfers written");
        Ok(())
    }

    fn write_rollup(
        &self,
        rollup: &AggregateRollup,
        key_column: &str,
        path: &Path,
    ) -> ReportResult<()> {
        let mut wtr = Writer::from_writer(File::create(path)?);
        wtr.write_record([key_column, "total_value"])?;

        for row in &rollup.rows {
            wtr.write_record(&[row.key.clone(), format!("{:.2}", row.total_value)])?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Echoes the run parameters so every report is self-describing.
    fn write_parameters(&self, result: &RebalanceResult, path: &Path) -> ReportResult<()> {
        let params = &result.parameters;
        let mut wtr = Writer::from_writer(File::create(path)?);
        wtr.write_record(["parameter", "value"])?;

        let rows = [
            ("run_id", result.run_id.to_string()),
            ("generated_at", result.generated_at.to_rfc3339()),
            ("min_days_out", params.min_days_out.to_string()),
            ("target_days_in", params.target_days_in.to_string()),
            ("min_movement_qty", params.min_movement_qty.to_string()),
            (
                "include_pending_orders",
                params.include_pending_orders.to_string(),
            ),
            ("transfer_mode", params.transfer_mode.to_string()),
            ("origin_stores", params.origin_stores.join(";")),
            ("destination_stores", params.destination_stores.join(";")),
        ];
        for (key, value) in rows {
            wtr.write_record([key, value.as_str()])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn write_origin_diagnostics(
        &self,
        diagnostics: &[OriginDiagnostic],
        path: &Path,
    ) -> ReportResult<()> {
        let mut wtr = Writer::from_writer(File::create(path)?);
        wtr.write_record(ORIGIN_DIAGNOSTIC_HEADER)?;

        for row in diagnostics {
            wtr.write_record(&[
                row.store.clone(),
                row.product_code.clone(),
                row.on_hand_before.to_string(),
                row.releasable.to_string(),
                row.shipped.to_string(),
                row.on_hand_after.to_string(),
                format_days(row.days_of_stock_before),
                format_days(row.days_of_stock_after),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn write_destination_diagnostics(
        &self,
        diagnostics: &[DestinationDiagnostic],
        path: &Path,
    ) -> ReportResult<()> {
        let mut wtr = Writer::from_writer(File::create(path)?);
        wtr.write_record(DESTINATION_DIAGNOSTIC_HEADER)?;

        for row in diagnostics {
            wtr.write_record(&[
                row.store.clone(),
                row.product_code.clone(),
                row.on_hand_before.to_string(),
                row.target_level.to_string(),
                row.needed.to_string(),
                row.received.to_string(),
                row.on_hand_after.to_string(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn write_json(&self, result: &RebalanceResult, path: &Path) -> ReportResult<()> {
        let json = serde_json::to_string_pretty(result)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Blank cell when days of stock is undefined (no sales history).
fn format_days(days: Option<f64>) -> String {
    match days {
        Some(value) => format!("{:.2}", value),
        None => String::new(),
    }
}
