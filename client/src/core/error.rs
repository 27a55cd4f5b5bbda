//! # Common Error Types
//!
//! Consolidated error handling for the client layer.
//!
//! ## Error Categories
//!
//! - **Wallet**: failures reported by the external wallet capability
//! - **UnsupportedChain**: a chain id outside the registry
//! - **Storage**: persisted-state reads and writes
//! - **Chart**: chart widget script load or initialization
//! - **Validation**: rejected input (slippage out of range, bad address)
//! - **Navigation**: lookups of ids outside the navigation set
//!
//! None of these trigger a retry. Where a caller needs a yes/no answer
//! (`is_valid_id`, `is_supported`, ...) the API returns `bool` instead.
//!
//! ```rust
//! use dex_client::core::error::AppError;
//!
//! let err = AppError::UnsupportedChain(250);
//! assert_eq!(err.to_string(), "Unsupported chain: 250");
//! ```

use thiserror::Error;

use crate::app::navigation::NavigationError;
use crate::core::service::{ChartError, StorageError, WalletError};

/// Application-wide error type for the client layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),

    #[error("Unsupported chain: {0}")]
    UnsupportedChain(u64),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    /// Input validation error.
    ///
    /// Used for out-of-range slippage, malformed addresses and similar
    /// caller mistakes. State is left unchanged when this is returned.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
