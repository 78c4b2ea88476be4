//! Logging setup
//!
//! `tracing` subscriber filtered by `RUST_LOG`. Records emitted through the
//! `log` facade (the core crate) are forwarded to the same subscriber.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,corkboard_server=debug";

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A subscriber may already be installed (tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init();
}
