//! # Application Configuration
//!
//! This module loads the client's process configuration from environment
//! variables. Two values are required and enumerated; everything else is an
//! optional pass-through that either falls back to a default or silently
//! disables the integration that needs it.
//!
//! ## Variables
//!
//! | Variable | Kind |
//! |----------|------|
//! | `DEX_RUN_MODE` | required: `development`, `production`, `test` |
//! | `DEX_DEPLOY_ENV` | required: `development`, `staging`, `production` |
//! | `DEX_APP_NAME` / `DEX_APP_URL` / `DEX_APP_DESCRIPTION` | defaulted |
//! | `DEX_RPC_URL_<CHAIN>` | optional, one per supported chain |
//! | `DEX_WALLETCONNECT_PROJECT_ID`, `DEX_ONEINCH_API_KEY`, `DEX_ZEROX_API_KEY`, `DEX_COINGECKO_API_KEY` | optional |
//! | `DEX_GA_MEASUREMENT_ID`, `DEX_MIXPANEL_TOKEN`, `DEX_SENTRY_DSN` | optional |
//!
//! Blank values are treated as unset.
//!
//! ## Startup
//!
//! ```rust,no_run
//! use lib_core::config::init_config;
//!
//! fn main() -> Result<(), lib_core::ConfigError> {
//!     let config = init_config()?;
//!     if config.features().analytics {
//!         // wire analytics
//!     }
//!     Ok(())
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use lib_utils::{get_env_opt, non_blank, validate_min_length, validate_one_of};

use crate::error::{ConfigError, Result};

pub const RUN_MODE_VAR: &str = "DEX_RUN_MODE";
pub const DEPLOY_ENV_VAR: &str = "DEX_DEPLOY_ENV";

pub const DEFAULT_APP_NAME: &str = "XForce DEX";
pub const DEFAULT_APP_URL: &str = "http://localhost:3000";
pub const DEFAULT_APP_DESCRIPTION: &str = "Multi-chain decentralized exchange";

/// Keys shorter than this are flagged as likely invalid.
pub const MIN_API_KEY_LEN: usize = 10;

/// Per-chain RPC override variables, keyed by chain id.
pub const RPC_URL_VARS: &[(u64, &str)] = &[
    (1, "DEX_RPC_URL_ETHEREUM"),
    (10, "DEX_RPC_URL_OPTIMISM"),
    (56, "DEX_RPC_URL_BSC"),
    (137, "DEX_RPC_URL_POLYGON"),
    (8453, "DEX_RPC_URL_BASE"),
    (42161, "DEX_RPC_URL_ARBITRUM"),
    (43114, "DEX_RPC_URL_AVALANCHE"),
    (11155111, "DEX_RPC_URL_SEPOLIA"),
];

/// Build/run mode of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Production,
    Test,
}

impl RunMode {
    pub const NAMES: &'static [&'static str] = &["development", "production", "test"];

    pub fn as_str(&self) -> &'static str {
        match self {
            RunMode::Development => "development",
            RunMode::Production => "production",
            RunMode::Test => "test",
        }
    }

    fn parse(value: &str) -> Result<Self> {
        validate_one_of(value, Self::NAMES, RUN_MODE_VAR).map_err(|reason| {
            ConfigError::InvalidValue {
                var: RUN_MODE_VAR,
                reason,
            }
        })?;
        Ok(match value {
            "development" => RunMode::Development,
            "production" => RunMode::Production,
            _ => RunMode::Test,
        })
    }
}

/// Deployment target the build is running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployEnv {
    Development,
    Staging,
    Production,
}

impl DeployEnv {
    pub const NAMES: &'static [&'static str] = &["development", "staging", "production"];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeployEnv::Development => "development",
            DeployEnv::Staging => "staging",
            DeployEnv::Production => "production",
        }
    }

    fn parse(value: &str) -> Result<Self> {
        validate_one_of(value, Self::NAMES, DEPLOY_ENV_VAR).map_err(|reason| {
            ConfigError::InvalidValue {
                var: DEPLOY_ENV_VAR,
                reason,
            }
        })?;
        Ok(match value {
            "development" => DeployEnv::Development,
            "staging" => DeployEnv::Staging,
            _ => DeployEnv::Production,
        })
    }
}

/// Display metadata for the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppMetadata {
    pub name: String,
    pub url: String,
    pub description: String,
}

/// Third-party API keys. `Debug` never prints the key material.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKeys {
    pub walletconnect_project_id: Option<String>,
    pub oneinch: Option<String>,
    pub zerox: Option<String>,
    pub coingecko: Option<String>,
}

impl fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn mask(value: &Option<String>) -> &'static str {
            if value.is_some() {
                "<set>"
            } else {
                "<unset>"
            }
        }

        f.debug_struct("ApiKeys")
            .field("walletconnect_project_id", &mask(&self.walletconnect_project_id))
            .field("oneinch", &mask(&self.oneinch))
            .field("zerox", &mask(&self.zerox))
            .field("coingecko", &mask(&self.coingecko))
            .finish()
    }
}

/// Analytics and error-reporting endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analytics {
    pub ga_measurement_id: Option<String>,
    pub mixpanel_token: Option<String>,
    pub sentry_dsn: Option<String>,
}

/// Which optional integrations are available, derived purely from presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Features {
    pub analytics: bool,
    pub price_api: bool,
    pub aggregator_api: bool,
    pub wallet_connect: bool,
    pub error_reporting: bool,
    pub custom_rpc: bool,
}

/// Validated process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentConfig {
    pub run_mode: RunMode,
    pub deploy_env: DeployEnv,
    pub app: AppMetadata,
    /// RPC URL overrides keyed by chain id.
    pub rpc_urls: BTreeMap<u64, String>,
    pub api_keys: ApiKeys,
    pub analytics: Analytics,
}

impl EnvironmentConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(get_env_opt)
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| non_blank(lookup(name));

        let run_mode = get(RUN_MODE_VAR).ok_or(ConfigError::Missing(RUN_MODE_VAR))?;
        let run_mode = RunMode::parse(&run_mode)?;

        let deploy_env = get(DEPLOY_ENV_VAR).ok_or(ConfigError::Missing(DEPLOY_ENV_VAR))?;
        let deploy_env = DeployEnv::parse(&deploy_env)?;

        let app = AppMetadata {
            name: get("DEX_APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            url: get("DEX_APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
            description: get("DEX_APP_DESCRIPTION")
                .unwrap_or_else(|| DEFAULT_APP_DESCRIPTION.to_string()),
        };

        let rpc_urls = RPC_URL_VARS
            .iter()
            .filter_map(|(chain_id, var)| get(*var).map(|url| (*chain_id, url)))
            .collect();

        let api_keys = ApiKeys {
            walletconnect_project_id: get("DEX_WALLETCONNECT_PROJECT_ID"),
            oneinch: get("DEX_ONEINCH_API_KEY"),
            zerox: get("DEX_ZEROX_API_KEY"),
            coingecko: get("DEX_COINGECKO_API_KEY"),
        };

        let analytics = Analytics {
            ga_measurement_id: get("DEX_GA_MEASUREMENT_ID"),
            mixpanel_token: get("DEX_MIXPANEL_TOKEN"),
            sentry_dsn: get("DEX_SENTRY_DSN"),
        };

        let config = Self {
            run_mode,
            deploy_env,
            app,
            rpc_urls,
            api_keys,
            analytics,
        };
        config.check_api_keys();

        Ok(config)
    }

    /// Warn about keys that look truncated. Never fails.
    fn check_api_keys(&self) {
        let keys = [
            ("DEX_WALLETCONNECT_PROJECT_ID", &self.api_keys.walletconnect_project_id),
            ("DEX_ONEINCH_API_KEY", &self.api_keys.oneinch),
            ("DEX_ZEROX_API_KEY", &self.api_keys.zerox),
            ("DEX_COINGECKO_API_KEY", &self.api_keys.coingecko),
        ];
        for (name, key) in keys {
            if let Some(key) = key {
                validate_api_key(name, key);
            }
        }
    }

    pub fn is_production(&self) -> bool {
        self.run_mode == RunMode::Production
    }

    pub fn is_development(&self) -> bool {
        self.run_mode == RunMode::Development
    }

    pub fn is_test(&self) -> bool {
        self.run_mode == RunMode::Test
    }

    /// RPC override for a chain, if one was configured.
    pub fn rpc_url(&self, chain_id: u64) -> Option<&str> {
        self.rpc_urls.get(&chain_id).map(String::as_str)
    }

    pub fn features(&self) -> Features {
        Features {
            analytics: self.analytics.ga_measurement_id.is_some()
                || self.analytics.mixpanel_token.is_some(),
            price_api: self.api_keys.coingecko.is_some(),
            aggregator_api: self.api_keys.oneinch.is_some() || self.api_keys.zerox.is_some(),
            wallet_connect: self.api_keys.walletconnect_project_id.is_some(),
            error_reporting: self.analytics.sentry_dsn.is_some(),
            custom_rpc: !self.rpc_urls.is_empty(),
        }
    }
}

/// Check an API key for plausibility.
///
/// Keys shorter than [`MIN_API_KEY_LEN`] are logged as likely invalid and
/// `false` is returned. This never blocks startup.
pub fn validate_api_key(name: &str, key: &str) -> bool {
    match validate_min_length(key.trim(), MIN_API_KEY_LEN, name) {
        Ok(()) => true,
        Err(reason) => {
            tracing::warn!(key = name, "API key looks invalid: {}", reason);
            false
        }
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<EnvironmentConfig> = OnceLock::new();

/// Load `.env` if present, validate the environment, and store the result.
///
/// # Errors
///
/// Returns an error if:
/// - `DEX_RUN_MODE` or `DEX_DEPLOY_ENV` is missing or outside its allowed set
/// - Config has already been initialized
pub fn init_config() -> Result<&'static EnvironmentConfig> {
    if dotenvy::dotenv().is_ok() {
        tracing::debug!("Loaded variables from .env");
    }

    let config = EnvironmentConfig::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)?;

    CONFIG.get().ok_or(ConfigError::AlreadyInitialized)
}

/// The configuration stored by [`init_config`], if it has run.
pub fn core_config() -> Option<&'static EnvironmentConfig> {
    CONFIG.get()
}
