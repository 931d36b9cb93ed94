//! Tracing subscriber initialization.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::format::LineFormat;

/// Default append-only log sink.
pub const DEFAULT_LOG_FILE: &str = "inventory.log";

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Append to this file; `None` writes to stderr instead.
    pub file: Option<PathBuf>,
    /// Filter used when `RUST_LOG` is not set.
    pub default_filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            default_filter: "info".to_string(),
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops). Fails only when
/// the log file cannot be opened.
pub fn init(config: &LogConfig) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(LineFormat);

    match &config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let _ = builder.with_writer(Mutex::new(file)).try_init();
        }
        None => {
            let _ = builder.with_writer(io::stderr).try_init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_logs_to_inventory_log() {
        let config = LogConfig::default();
        assert_eq!(config.file.as_deref(), Some(std::path::Path::new("inventory.log")));
        assert_eq!(config.default_filter, "info");
    }

    #[test]
    fn unopenable_log_file_is_an_error() {
        let config = LogConfig {
            file: Some(std::env::temp_dir().join("stockroom-no-such-dir").join("x").join("inventory.log")),
            ..LogConfig::default()
        };
        assert!(init(&config).is_err());
    }
}
