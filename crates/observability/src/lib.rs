//! Tracing and logging (shared setup).

/// Log line formatting.
pub mod format;

/// Subscriber configuration (filters, sinks).
pub mod subscriber;

pub use format::LineFormat;
pub use subscriber::{DEFAULT_LOG_FILE, LogConfig};

/// Initialize process-wide logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(config: &LogConfig) -> std::io::Result<()> {
    subscriber::init(config)
}
