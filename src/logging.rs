// ==========================================
// Logging setup
// ==========================================
// tracing + tracing-subscriber, level controlled by environment.
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the logging system.
///
/// # Environment
/// - RUST_LOG: level filter (default: info)
///   e.g. RUST_LOG=debug or RUST_LOG=stock_rebalancer=trace
///
/// # Example
/// ```no_run
/// use stock_rebalancer::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Initializes logging for tests.
///
/// Uses a verbose level and the test writer so output stays attached
/// to the owning test.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
