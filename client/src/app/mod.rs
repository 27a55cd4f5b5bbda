//! # Application Context
//!
//! [`AppContext`] owns every store and facade the UI talks to. It is built
//! once at startup from the loaded [`EnvironmentConfig`] and the injected
//! ports, then handed to whatever renders the UI.
//!
//! ```text
//! AppContext
//!   ├── UiStore        (ephemeral flags, active tab)
//!   ├── SettingsStore  ── KeyValueStorage
//!   ├── SwapStore      (swap form draft)
//!   ├── WalletFacade   ── WalletPort
//!   ├── ChainSwitcher  ── WalletPort
//!   └── ChartLoader    ── ChartWidget
//! ```
//!
//! There are no global stores: tests build as many contexts as they like.

pub mod navigation;
pub mod state;
pub mod store;
pub mod stores;

use std::sync::Arc;

use lib_core::{EnvironmentConfig, Features};

use crate::core::error::Result;
use crate::core::service::{ChartWidget, KeyValueStorage, WalletPort};
use crate::services::chart::{ChartLoader, ChartOptions, Interval};
use crate::services::{ChainSwitcher, WalletFacade};

pub use navigation::{NavigationError, NavigationItem, Section};
pub use state::{SettingsState, SwapDraftState, UiState};
pub use store::{Store, SubscriptionId};
pub use stores::{SettingsStore, SwapStore, UiStore};

/// The external capabilities a context is built on.
#[derive(Clone)]
pub struct Ports {
    pub wallet: Arc<dyn WalletPort>,
    pub storage: Arc<dyn KeyValueStorage>,
    pub chart: Arc<dyn ChartWidget>,
}

pub struct AppContext {
    config: Arc<EnvironmentConfig>,
    ui: UiStore,
    settings: SettingsStore,
    swap: SwapStore,
    wallet: WalletFacade,
    chains: ChainSwitcher,
    chart: ChartLoader,
}

impl AppContext {
    /// Wire up the stores. Persisted settings are loaded here, and the swap
    /// draft starts with the saved slippage tolerance.
    pub fn new(config: Arc<EnvironmentConfig>, ports: Ports) -> Self {
        let settings = SettingsStore::load(ports.storage);
        let swap = SwapStore::new();
        let saved_slippage = settings.state().slippage_tolerance;
        if let Err(e) = swap.set_slippage(saved_slippage) {
            tracing::warn!("Ignoring saved slippage for swap draft: {}", e);
        }

        tracing::info!(
            run_mode = config.run_mode.as_str(),
            deploy_env = config.deploy_env.as_str(),
            "App context ready"
        );

        Self {
            config,
            ui: UiStore::new(),
            settings,
            swap,
            wallet: WalletFacade::new(ports.wallet.clone()),
            chains: ChainSwitcher::new(ports.wallet),
            chart: ChartLoader::new(ports.chart),
        }
    }

    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    pub fn features(&self) -> Features {
        self.config.features()
    }

    pub fn ui(&self) -> &UiStore {
        &self.ui
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn swap(&self) -> &SwapStore {
        &self.swap
    }

    pub fn wallet(&self) -> &WalletFacade {
        &self.wallet
    }

    pub fn chains(&self) -> &ChainSwitcher {
        &self.chains
    }

    pub fn chart(&self) -> &ChartLoader {
        &self.chart
    }

    /// Switch the active tab by navigation id.
    pub fn navigate(&self, id: &str) -> Result<()> {
        let section =
            Section::from_id(id).ok_or_else(|| NavigationError::NotFound(id.to_string()))?;
        self.ui.set_active_tab(section);
        Ok(())
    }

    /// Chart options for `symbol` under the current theme and language.
    pub fn chart_options(&self, symbol: &str, interval: Interval) -> ChartOptions {
        ChartOptions::from_settings(symbol, interval, &self.settings.state())
    }
}
