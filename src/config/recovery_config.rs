// src/config/recovery_config.rs

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Attempt budget used when nothing else is configured. A genuine key
/// triple succeeds within a handful of attempts (per-attempt failure
/// probability is at most 1/4), so reaching this bound means the triple is
/// almost certainly inconsistent.
pub const DEFAULT_MAX_ATTEMPTS: usize = 200;

/// Runtime settings for the recovery binary and library defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryConfig {
    /// Maximum number of random bases tried before giving up
    pub max_attempts: usize,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Fixed RNG seed for reproducible runs; None draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        RecoveryConfig {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            log_level: "info".to_string(),
            seed: None,
        }
    }
}

impl RecoveryConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_file("rsarec.toml")
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("max_attempts", DEFAULT_MAX_ATTEMPTS as u64)?
            .set_default("log_level", "info")?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        // Override with environment variables (prefix: RSAREC_)
        builder = builder.add_source(
            Environment::with_prefix("RSAREC")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
