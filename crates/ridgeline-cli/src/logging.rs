//! Logging initialization for the ridgeline binary.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// An explicit `--log-level` wins; otherwise `RUST_LOG` is respected,
/// falling back to `info`.
pub fn init(level_override: Option<&str>) {
    let filter = match level_override {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
