// ==========================================
// Retail Stock Rebalancer - CLI Entry Point
// ==========================================
// Usage:
//   stock-rebalancer <snapshot.csv> [params.json] [out_dir]
//
// Reads the snapshot export, runs one reallocation pass and writes
// the report set to out_dir (default: rebalance_report).
// ==========================================

use stock_rebalancer::config::RunParameters;
use stock_rebalancer::engine::RebalanceOrchestrator;
use stock_rebalancer::importer::SnapshotReader;
use stock_rebalancer::report::ReportWriter;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    stock_rebalancer::logging::init();

    info!("==================================================");
    info!("{}", stock_rebalancer::APP_NAME);
    info!("version: {}", stock_rebalancer::VERSION);
    info!("==================================================");

    let mut args = std::env::args().skip(1);
    let snapshot_path = args
        .next()
        .ok_or("usage: stock-rebalancer <snapshot.csv> [params.json] [out_dir]")?;
    let params_path = args.next();
    let out_dir = args.next().unwrap_or_else(|| "rebalance_report".to_string());

    let params = match params_path
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    {
        Some(path) => RunParameters::from_json_file(&path)?,
        None => {
            info!("no parameter file given, using defaults");
            RunParameters::default()
        }
    };

    let reader = SnapshotReader::new();
    let snapshots = reader.read_file(&snapshot_path)?;

    let orchestrator = RebalanceOrchestrator::new();
    let result = orchestrator.run(&snapshots, &params)?;

    let writer = ReportWriter::new();
    writer.write_all(&result, &out_dir)?;

    info!(
        transfers = result.transfers.len(),
        total_value = result.total_transfer_value(),
        out_dir = %out_dir,
        "run complete"
    );
    Ok(())
}
