//! Tracing/logging setup shared by every stockroom binary.

/// Initialize process-wide observability (tracing/logging).
///
/// `default_directive` is used when `RUST_LOG` is not set (e.g. "info",
/// "debug"). This is safe to call multiple times; subsequent calls become
/// no-ops.
pub fn init(default_directive: &str) {
    tracing::init(default_directive);
}

/// Tracing configuration (filters, format).
pub mod tracing;
