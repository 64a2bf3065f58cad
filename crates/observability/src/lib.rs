//! Process-wide logging setup shared by the tally binaries.

/// Initialize structured logging for the process.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(DEFAULT_FILTER);
}

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Tracing subscriber configuration (filters, layers).
pub mod tracing;
