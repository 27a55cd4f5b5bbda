//! # Configuration Errors
//!
//! Every variant here is fatal: the process must not start with a
//! configuration that produced one of these.

use thiserror::Error;

/// Convenience type alias for `Result<T, ConfigError>`.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Startup configuration error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("{0} must be set in environment")]
    Missing(&'static str),

    /// A variable holds a value outside its allowed set.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },

    /// `init_config` was called twice.
    #[error("Config has already been initialized")]
    AlreadyInitialized,
}
