//! Tracing subscriber setup for embedding services
//!
//! The engine itself only emits `tracing` events; hosts that do not install
//! their own subscriber can call [`init_tracing`] once at startup.

use tracing_subscriber::EnvFilter;

/// Initialize a global tracing subscriber with env-filter support.
///
/// `RUST_LOG` takes precedence over `default_filter`. Safe to call more than
/// once; later calls are no-ops.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
