// ==========================================
// Retail Stock Rebalancer - Snapshot Reader
// ==========================================
// Loads the per-store inventory snapshot from a CSV export.
// One row per (store, product); duplicates are rejected, not merged.
// ==========================================

use crate::domain::snapshot::{SnapshotSet, StoreProductSnapshot};
use crate::engine::UNKNOWN_BUYER;
use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Columns every snapshot export must carry.
const REQUIRED_COLUMNS: [&str; 7] = [
    "store",
    "product_code",
    "product_name",
    "package_unit",
    "on_hand",
    "pending_po",
    "avg_daily_sales",
];

pub struct SnapshotReader;

impl SnapshotReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a snapshot CSV into a validated snapshot set.
    ///
    /// Rows are numbered from 1 (header excluded) in error messages.
    /// Descriptive cells (`product_name`, `package_unit`) may be blank;
    /// only the key columns must hold text. `unit_cost` and `buyer` are
    /// optional columns; absent or blank cells fall back to 0.0 and
    /// "N/A".
    ///
    /// # Arguments
    /// - path: path to the CSV export
    ///
    /// # Returns
    /// The snapshot set, or the first schema/value error found
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> ImportResult<SnapshotSet> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(ImportError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }

        let mut rows: Vec<StoreProductSnapshot> = Vec::new();
        let mut seen: HashMap<(String, String), usize> = HashMap::new();

        for (idx, result) in reader.records().enumerate() {
            let row_number = idx + 1;
            let record = result?;

            let mut row_map: HashMap<String, String> = HashMap::new();
            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // skip fully blank rows
            if row_map.values().all(|v| v.is_empty()) {
                debug!(row_number, "skipping blank row");
                continue;
            }

            let snapshot = self.parse_row(&row_map, row_number)?;

            let key = snapshot.key();
            if let Some(first_row) = seen.get(&key) {
                debug!(row_number, first_row, "duplicate key");
                return Err(ImportError::DuplicateSnapshot {
                    row: row_number,
                    store: snapshot.store,
                    product_code: snapshot.product_code,
                });
            }
            seen.insert(key, row_number);
            rows.push(snapshot);
        }

        info!(rows = rows.len(), path = %path.display(), "snapshot file loaded");
        Ok(SnapshotSet::from_rows(rows))
    }

    fn parse_row(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<StoreProductSnapshot> {
        Ok(StoreProductSnapshot {
            store: self.required_string(row, "store", row_number)?,
            product_code: self.required_string(row, "product_code", row_number)?,
            product_name: row.get("product_name").cloned().unwrap_or_default(),
            package_unit: row.get("package_unit").cloned().unwrap_or_default(),
            on_hand: self.required_quantity(row, "on_hand", row_number)?,
            pending_po: self.required_quantity(row, "pending_po", row_number)?,
            avg_daily_sales: self.required_quantity(row, "avg_daily_sales", row_number)?,
            unit_cost: self.optional_quantity(row, "unit_cost", row_number)?,
            buyer: self.optional_label(row, "buyer", UNKNOWN_BUYER),
        })
    }

    fn required_string(
        &self,
        row: &HashMap<String, String>,
        column: &str,
        row_number: usize,
    ) -> ImportResult<String> {
        match row.get(column) {
            Some(value) if !value.is_empty() => Ok(value.clone()),
            _ => Err(ImportError::InvalidValue {
                row: row_number,
                column: column.to_string(),
                value: String::new(),
            }),
        }
    }

    /// Parses a non-negative numeric cell. Blank cells are invalid.
    fn required_quantity(
        &self,
        row: &HashMap<String, String>,
        column: &str,
        row_number: usize,
    ) -> ImportResult<f64> {
        let raw = row.get(column).map(String::as_str).unwrap_or("");
        self.parse_quantity(raw, column, row_number)
    }

    /// Parses a non-negative numeric cell, defaulting blanks to 0.0.
    fn optional_quantity(
        &self,
        row: &HashMap<String, String>,
        column: &str,
        row_number: usize,
    ) -> ImportResult<f64> {
        match row.get(column) {
            Some(raw) if !raw.is_empty() => self.parse_quantity(raw, column, row_number),
            _ => Ok(0.0),
        }
    }

    fn parse_quantity(&self, raw: &str, column: &str, row_number: usize) -> ImportResult<f64> {
        let parsed: f64 = raw.parse().map_err(|_| ImportError::InvalidValue {
            row: row_number,
            column: column.to_string(),
            value: raw.to_string(),
        })?;
        if !parsed.is_finite() || parsed < 0.0 {
            return Err(ImportError::InvalidValue {
                row: row_number,
                column: column.to_string(),
                value: raw.to_string(),
            });
        }
        Ok(parsed)
    }

    fn optional_label(
        &self,
        row: &HashMap<String, String>,
        column: &str,
        fallback: &str,
    ) -> String {
        match row.get(column) {
            Some(value) if !value.is_empty() => value.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl Default for SnapshotReader {
    fn default() -> Self {
        Self::new()
    }
}
