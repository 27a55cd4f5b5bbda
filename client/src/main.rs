//! `dex-client` binary: load configuration, restore persisted settings and
//! report what this deployment has enabled.
//!
//! Runs with headless ports (no wallet extension, no chart host), so it is
//! mostly useful for checking a deployment's environment.

use std::process::ExitCode;
use std::sync::Arc;

use dex_client::app::navigation;
use dex_client::debug::{self, LogConfig};
use dex_client::services::{chain, FileStorage, HeadlessChart, HeadlessWallet};
use dex_client::{AppContext, Ports};

const DATA_DIR_VAR: &str = "DEX_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "data";
const ROLLOUT_PHASE_VAR: &str = "DEX_ROLLOUT_PHASE";
const DEFAULT_ROLLOUT_PHASE: u8 = 3;

#[tokio::main]
async fn main() -> ExitCode {
    let _log_guard = match debug::init_logger(&LogConfig::from_env()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: {}", e);
            None
        }
    };

    let config = match lib_core::init_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid environment configuration: {}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let data_dir =
        lib_utils::get_env_opt(DATA_DIR_VAR).unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
    let ctx = AppContext::new(
        Arc::new(config.clone()),
        Ports {
            wallet: Arc::new(HeadlessWallet),
            storage: Arc::new(FileStorage::new(&data_dir)),
            chart: Arc::new(HeadlessChart),
        },
    );

    let features = ctx.features();
    tracing::info!(
        app = %config.app.name,
        analytics = features.analytics,
        price_api = features.price_api,
        aggregator_api = features.aggregator_api,
        wallet_connect = features.wallet_connect,
        error_reporting = features.error_reporting,
        custom_rpc = features.custom_rpc,
        "Features"
    );

    let phase = rollout_phase();
    for chain in chain::chains_by_phase(phase) {
        tracing::info!(
            chain_id = chain.chain_id,
            name = chain.name,
            phase = chain.phase,
            rollout_phase = phase,
            rpc = chain.rpc_url(ctx.config()),
            "Chain"
        );
    }

    let sections: Vec<_> = navigation::items().iter().map(|item| item.path).collect();
    let settings = ctx.settings().state();
    tracing::info!(
        data_dir = %data_dir,
        theme = ?settings.theme,
        language = settings.language.code(),
        slippage = settings.slippage_tolerance,
        sections = ?sections,
        "Settings restored"
    );

    ExitCode::SUCCESS
}

/// Rollout phase to report chains for; all phases when unset.
fn rollout_phase() -> u8 {
    match lib_utils::get_env_parse::<u8>(ROLLOUT_PHASE_VAR) {
        Ok(phase) => phase,
        Err(lib_utils::envs::Error::MissingEnv(_)) => DEFAULT_ROLLOUT_PHASE,
        Err(e) => {
            tracing::warn!("Ignoring {}: {}", ROLLOUT_PHASE_VAR, e);
            DEFAULT_ROLLOUT_PHASE
        }
    }
}
