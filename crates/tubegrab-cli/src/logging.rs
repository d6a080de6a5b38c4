//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "info";

/// Pick the filter directive: an explicit level wins over `RUST_LOG`.
pub fn filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Install the global subscriber.
pub fn init(level: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_target(true)
        .init();
}
