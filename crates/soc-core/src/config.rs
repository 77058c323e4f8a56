//! Configuration for the SOC console.
//!
//! Loaded from (in priority order):
//! 1. Environment variables (`SOC__` separated, `SOC` prefix)
//! 2. Config file (`soc.toml`)
//! 3. Defaults

use serde::Deserialize;

use crate::SocError;

/// Top-level console configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// Path to a JSON snapshot file for the in-memory store backend.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,

    /// Row cap for tenant-scoped log queries.
    #[serde(default = "default_scoped_log_limit")]
    pub scoped_log_limit: usize,
}

fn default_snapshot_path() -> String {
    "./snapshot.json".to_string()
}

fn default_scoped_log_limit() -> usize {
    10
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            scoped_log_limit: default_scoped_log_limit(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from `<file_prefix>.toml` and `SOC__` environment
    /// overrides. Missing file and missing keys fall back to defaults.
    pub fn load(file_prefix: &str) -> Result<Self, SocError> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("SOC")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| SocError::Config(e.to_string()))?;

        cfg.try_deserialize::<Self>()
            .map_err(|e| SocError::Config(e.to_string()))
    }
}
