//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Install the JSON fmt subscriber, filtered by `RUST_LOG` or `fallback`.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init(fallback: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // JSON logs + timestamps; one object per line.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init()
        .is_ok()
}
