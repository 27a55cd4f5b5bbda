//! Logging configuration from environment variables

use std::path::PathBuf;

use lib_utils::{get_env_opt, non_blank};

pub const LOG_DIR_VAR: &str = "DEX_LOG_DIR";
pub const LOG_FILE_NAME: &str = "dex-client.log";
pub const DEFAULT_LOG_LEVEL: &str = "dex_client=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "dex_client=debug,info")
    pub log_level: String,
    /// Mirror log lines to stderr
    pub stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            stderr: true,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(get_env_opt)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| non_blank(lookup(name));
        let defaults = Self::default();

        Self {
            log_dir: get(LOG_DIR_VAR).map(PathBuf::from).unwrap_or(defaults.log_dir),
            log_level: get("RUST_LOG").unwrap_or(defaults.log_level),
            stderr: get("DEX_LOG_STDERR").map(|v| v != "0").unwrap_or(defaults.stderr),
        }
    }

    /// Current log file, before rotation suffixes.
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
