//! Process settings, read from the environment.

use std::path::PathBuf;

use stockroom_core::Quantity;
use stockroom_inventory::{DEFAULT_DATA_FILE, DEFAULT_LOW_THRESHOLD, DepletionPolicy};
use stockroom_observability::{DEFAULT_LOG_FILE, LogConfig};

pub const ENV_DATA_FILE: &str = "STOCKROOM_DATA_FILE";
pub const ENV_LOG_FILE: &str = "STOCKROOM_LOG_FILE";
pub const ENV_LOW_THRESHOLD: &str = "STOCKROOM_LOW_THRESHOLD";
pub const ENV_DEPLETION: &str = "STOCKROOM_DEPLETION";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_file: PathBuf,
    pub log_file: PathBuf,
    pub low_threshold: Quantity,
    pub depletion: DepletionPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            low_threshold: DEFAULT_LOW_THRESHOLD,
            depletion: DepletionPolicy::default(),
        }
    }
}

impl Settings {
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from `lookup`, falling back to defaults.
    ///
    /// Values that fail to parse are reported in the returned list instead of
    /// being logged here, since logging is usually not initialized yet.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        let mut rejected = Vec::new();

        if let Some(path) = lookup(ENV_DATA_FILE).filter(|v| !v.trim().is_empty()) {
            settings.data_file = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_LOG_FILE).filter(|v| !v.trim().is_empty()) {
            settings.log_file = PathBuf::from(path);
        }
        if let Some(raw) = lookup(ENV_LOW_THRESHOLD) {
            match raw.trim().parse::<f64>().ok().and_then(|v| Quantity::new(v).ok()) {
                Some(threshold) => settings.low_threshold = threshold,
                None => rejected.push(format!(
                    "{ENV_LOW_THRESHOLD}={raw} is not a number; using {}",
                    settings.low_threshold
                )),
            }
        }
        if let Some(raw) = lookup(ENV_DEPLETION) {
            match raw.parse::<DepletionPolicy>() {
                Ok(policy) => settings.depletion = policy,
                Err(err) => rejected.push(format!("{ENV_DEPLETION}: {err}; using delete")),
            }
        }

        (settings, rejected)
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            file: Some(self.log_file.clone()),
            ..LogConfig::default()
        }
    }
}
