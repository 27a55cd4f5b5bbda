//! # Core Library
//!
//! Process configuration for the DEX client: loading, validation and the
//! feature flags derived from it.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{
    core_config, init_config, validate_api_key, AppMetadata, Analytics, ApiKeys, DeployEnv, EnvironmentConfig,
    Features, RunMode,
};
pub use error::{ConfigError, Result};
