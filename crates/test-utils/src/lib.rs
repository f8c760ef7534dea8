//! Shared helpers for taskwave's integration tests.

pub mod builders;

use tracing_subscriber::{fmt, EnvFilter};

/// Route `tracing` output into the test harness.
///
/// Reads `TASKWAVE_LOG`, then `RUST_LOG`, defaulting to `warn` so the
/// per-reference warnings about dangling dependencies stay visible in
/// failing tests. Output is captured and only shown for failures unless
/// the tests run with `--nocapture`. Repeated calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(taskwave::logging::LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init();
}
