//! # Logging
//!
//! Structured logs go to `<DEX_LOG_DIR>/dex-client.log` (daily rotation) and,
//! unless `DEX_LOG_STDERR=0`, to stderr.
//!
//! ## Configuration
//!
//! - `RUST_LOG`: filter (default `dex_client=info,warn`)
//! - `DEX_LOG_DIR`: log directory (default `logs`)
//! - `DEX_LOG_STDERR`: `0` to disable the stderr layer

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::{init as init_logger, LogError};
