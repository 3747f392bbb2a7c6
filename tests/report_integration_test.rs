// ==========================================
// Report output integration tests
// ==========================================
// Runs a small reallocation and verifies the written report set:
// every file present, CSV contents consistent with the run, TOTAL
// rows reconciling with the instruction values.
// ==========================================

use std::path::Path;
use stock_rebalancer::config::RunParameters;
use stock_rebalancer::domain::snapshot::{SnapshotSet, StoreProductSnapshot};
use stock_rebalancer::engine::{RebalanceOrchestrator, RebalanceResult};
use stock_rebalancer::logging;
use stock_rebalancer::report::ReportWriter;
use tempfile::TempDir;

// ==========================================
// Test helpers
// ==========================================

fn create_test_snapshot(
    store: &str,
    product_code: &str,
    on_hand: f64,
    avg_daily_sales: f64,
    unit_cost: f64,
    buyer: &str,
) -> StoreProductSnapshot {
    StoreProductSnapshot {
        store: store.to_string(),
        product_code: product_code.to_string(),
        product_name: format!("Product {}", product_code),
        package_unit: "CX".to_string(),
        on_hand,
        pending_po: 0.0,
        avg_daily_sales,
        unit_cost,
        buyer: buyer.to_string(),
    }
}

fn run_small_rebalance() -> RebalanceResult {
    let snapshots = SnapshotSet::from_rows(vec![
        create_test_snapshot("S1", "P001", 100.0, 2.0, 2.0, "ANA"),
        create_test_snapshot("S2", "P001", 4.0, 3.0, 2.0, "ANA"),
        create_test_snapshot("S1", "P002", 3.0, 1.0, 4.0, "RUI"),
        create_test_snapshot("S2", "P002", 50.0, 1.0, 4.0, "RUI"),
    ]);
    let params = RunParameters {
        min_movement_qty: 5,
        ..RunParameters::default()
    };
    RebalanceOrchestrator::new()
        .run(&snapshots, &params)
        .expect("run should succeed")
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::Reader::from_path(path).expect("CSV should open");
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(|h| h.to_string())
        .collect();
    let mut rows = vec![headers];
    for record in reader.records() {
        rows.push(record.unwrap().iter().map(|f| f.to_string()).collect());
    }
    rows
}

// ==========================================
// Test 1: full report set is written
// ==========================================
#[test]
fn test_full_report_set_is_written() {
    logging::init_test();

    let result = run_small_rebalance();
    let dir = TempDir::new().unwrap();

    ReportWriter::new().write_all(&result, dir.path()).unwrap();

    for name in [
        "transfers.csv",
        "rollup_by_buyer.csv",
        "rollup_by_origin.csv",
        "rollup_by_destination.csv",
        "parameters.csv",
        "origin_diagnostics.csv",
        "destination_diagnostics.csv",
        "report.json",
    ] {
        assert!(dir.path().join(name).exists(), "missing report file {}", name);
    }
}

// ==========================================
// Test 2: transfers file matches the run
// ==========================================
#[test]
fn test_transfer_file_matches_run() {
    logging::init_test();

    let result = run_small_rebalance();
    let dir = TempDir::new().unwrap();
    ReportWriter::new().write_all(&result, dir.path()).unwrap();

    let rows = read_rows(&dir.path().join("transfers.csv"));

    assert_eq!(
        rows[0],
        vec![
            "product_code",
            "product_name",
            "package_unit",
            "quantity",
            "origin_store",
            "destination_store",
            "unit_cost",
            "buyer",
            "value",
        ],
        "header must be stable"
    );
    assert_eq!(rows.len() - 1, result.transfers.len());

    // P001: S1 -> S2, 38 units at 2.00; P002: S2 -> S1, 11 units at 4.00
    assert_eq!(rows[1][0], "P001");
    assert_eq!(rows[1][3], "38");
    assert_eq!(rows[1][8], "76.00");
    assert_eq!(rows[2][0], "P002");
    assert_eq!(rows[2][3], "11");
    assert_eq!(rows[2][8], "44.00");
}

// ==========================================
// Test 3: rollup files carry trailing TOTAL rows
// ==========================================
#[test]
fn test_rollup_files_carry_total_rows() {
    logging::init_test();

    let result = run_small_rebalance();
    let dir = TempDir::new().unwrap();
    ReportWriter::new().write_all(&result, dir.path()).unwrap();

    for (name, key_column) in [
        ("rollup_by_buyer.csv", "buyer"),
        ("rollup_by_origin.csv", "origin_store"),
        ("rollup_by_destination.csv", "destination_store"),
    ] {
        let rows = read_rows(&dir.path().join(name));
        assert_eq!(rows[0], vec![key_column, "total_value"], "{} header", name);

        let last = rows.last().unwrap();
        assert_eq!(last[0], "TOTAL", "{} must end with TOTAL", name);
        assert_eq!(last[1], "120.00", "{} grand total", name);
    }
}

// ==========================================
// Test 4: parameters file echoes the run configuration
// ==========================================
#[test]
fn test_parameter_file_echoes_run_configuration() {
    logging::init_test();

    let result = run_small_rebalance();
    let dir = TempDir::new().unwrap();
    ReportWriter::new().write_all(&result, dir.path()).unwrap();

    let rows = read_rows(&dir.path().join("parameters.csv"));
    let lookup = |key: &str| -> String {
        rows.iter()
            .find(|r| r[0] == key)
            .unwrap_or_else(|| panic!("missing parameter row {}", key))[1]
            .clone()
    };

    assert_eq!(lookup("run_id"), result.run_id.to_string());
    assert_eq!(lookup("min_days_out"), "7");
    assert_eq!(lookup("target_days_in"), "14");
    assert_eq!(lookup("min_movement_qty"), "5");
    assert_eq!(lookup("include_pending_orders"), "false");
    assert_eq!(lookup("transfer_mode"), "ALL_TO_ALL");
}

// ==========================================
// Test 5: diagnostics files render blanks for unknown days
// ==========================================
#[test]
fn test_diagnostics_render_blank_days_when_no_sales() {
    logging::init_test();

    // origin with zero average sales: days of stock are undefined
    let snapshots = SnapshotSet::from_rows(vec![
        create_test_snapshot("S1", "P001", 50.0, 0.0, 1.0, "ANA"),
        create_test_snapshot("S2", "P001", 0.0, 2.0, 1.0, "ANA"),
    ]);
    let result = RebalanceOrchestrator::new()
        .run(&snapshots, &RunParameters::default())
        .unwrap();

    let dir = TempDir::new().unwrap();
    ReportWriter::new().write_all(&result, dir.path()).unwrap();

    let rows = read_rows(&dir.path().join("origin_diagnostics.csv"));
    assert_eq!(rows.len(), 2, "one origin row expected");
    assert_eq!(rows[1][6], "", "days_of_stock_before blank without sales");
    assert_eq!(rows[1][7], "", "days_of_stock_after blank without sales");
}

// ==========================================
// Test 6: rewriting into the same directory is clean
// ==========================================
#[test]
fn test_rewrite_into_same_directory() {
    logging::init_test();

    let result = run_small_rebalance();
    let dir = TempDir::new().unwrap();

    let writer = ReportWriter::new();
    writer.write_all(&result, dir.path()).unwrap();
    writer.write_all(&result, dir.path()).unwrap();

    let rows = read_rows(&dir.path().join("transfers.csv"));
    assert_eq!(
        rows.len() - 1,
        result.transfers.len(),
        "second write must replace, not append"
    );
}
