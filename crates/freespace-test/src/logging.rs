//! Logging bootstrap for harness runs and tests

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Install a `tracing` subscriber honouring `RUST_LOG`.
///
/// Output goes through the test writer so it is captured per test. Safe to
/// call more than once; returns `false` when a subscriber was already set.
pub fn init_logging() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()
        .is_ok()
}
