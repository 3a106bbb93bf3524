//! Tracing and logging setup shared by the binaries and tests.

/// Initialize process-wide tracing with the format named by
/// `MERCHSTOCK_LOG_FORMAT` (JSON unless set to `pretty`).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let format = std::env::var("MERCHSTOCK_LOG_FORMAT")
        .map(|v| tracing::LogFormat::parse(&v))
        .unwrap_or_default();
    tracing::init(format);
}

/// Subscriber configuration (filters, output format).
pub mod tracing;
