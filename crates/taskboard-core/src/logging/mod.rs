//! Tracing subscriber setup.
//!
//! Stores and the view controller log through `tracing` macros with
//! structured fields (`task_id`, `count`, `delay_ms`). Binaries call
//! [`init_subscriber`] once; tests use [`capture_logs`] to assert on what was
//! emitted.

pub mod test_utils;

pub use test_utils::{CapturedEvent, CapturedLogs, capture_logs};

/// Default filter directive when nothing else is configured.
pub const DEFAULT_LEVEL: &str = "warn";

/// Initialize the global tracing subscriber with stderr output.
///
/// `RUST_LOG` takes precedence over `level` when set. Subsequent calls are
/// no-ops.
pub fn init_subscriber(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // try_init fails only if a global subscriber is already installed
    let _ = subscriber.try_init();
}
