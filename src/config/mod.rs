// src/config/mod.rs

pub mod recovery_config;

// Re-export main types for convenience
pub use recovery_config::{RecoveryConfig, DEFAULT_MAX_ATTEMPTS};
