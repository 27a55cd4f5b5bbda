//! # Utilities Library
//!
//! Shared helpers for environment variables and input validation.

pub mod envs;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_opt, get_env_parse, non_blank};
pub use validation::{validate_min_length, validate_not_empty, validate_one_of};
