//! End-to-end checks over `AppContext` with file-backed settings.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use dex_client::app::state::{Language, SettingsPatch, Theme};
use dex_client::core::{
    ChartError, ChartWidget, Connector, ConnectorKind, Session, WalletError, WalletPort,
};
use dex_client::services::chart::{ChartOptions, ChartState, Interval};
use dex_client::services::{FileStorage, WalletStatus};
use dex_client::{AppContext, AppError, Ports};
use lib_core::EnvironmentConfig;

const ADDRESS: &str = "0xAb5801a7D398351b8bE11C439e05C5B3259aeC9B";

/// Wallet that accepts every request and records chain switches.
#[derive(Default)]
struct ScriptedWallet {
    chain: Mutex<Option<u64>>,
    reject_switch: bool,
}

#[async_trait]
impl WalletPort for ScriptedWallet {
    fn connectors(&self) -> Vec<Connector> {
        vec![Connector::new("injected", "Browser Wallet", ConnectorKind::Injected)]
    }

    async fn connect(&self, _connector: &Connector) -> Result<Session, WalletError> {
        *self.chain.lock() = Some(1);
        Ok(Session {
            address: ADDRESS.to_string(),
            chain_id: 1,
        })
    }

    async fn disconnect(&self) -> Result<(), WalletError> {
        *self.chain.lock() = None;
        Ok(())
    }

    async fn chain_id(&self) -> Result<Option<u64>, WalletError> {
        Ok(*self.chain.lock())
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<(), WalletError> {
        if self.reject_switch {
            return Err(WalletError::UserRejected);
        }
        let mut chain = self.chain.lock();
        match chain.as_mut() {
            Some(current) => {
                *current = chain_id;
                Ok(())
            }
            None => Err(WalletError::NotConnected),
        }
    }
}

#[derive(Default)]
struct CountingChart {
    script_loads: AtomicUsize,
}

#[async_trait]
impl ChartWidget for CountingChart {
    async fn load_script(&self, _src: &str) -> Result<(), ChartError> {
        self.script_loads.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn init(&self, options: &ChartOptions) -> Result<(), ChartError> {
        if options.symbol.is_empty() {
            return Err(ChartError::Init("empty symbol".to_string()));
        }
        Ok(())
    }
}

fn config() -> Arc<EnvironmentConfig> {
    let config = EnvironmentConfig::from_lookup(|name| match name {
        "DEX_RUN_MODE" => Some("test".to_string()),
        "DEX_DEPLOY_ENV" => Some("development".to_string()),
        _ => None,
    })
    .unwrap();
    Arc::new(config)
}

fn context(dir: &std::path::Path, wallet: ScriptedWallet) -> AppContext {
    AppContext::new(
        config(),
        Ports {
            wallet: Arc::new(wallet),
            storage: Arc::new(FileStorage::new(dir)),
            chart: Arc::new(CountingChart::default()),
        },
    )
}

#[test]
fn settings_survive_restart() {
    let dir = tempfile::tempdir().unwrap();

    let ctx = context(dir.path(), ScriptedWallet::default());
    ctx.settings()
        .update_settings(SettingsPatch {
            theme: Some(Theme::Dark),
            language: Some(Language::Zh),
            slippage_tolerance: Some(3.0),
            ..SettingsPatch::default()
        })
        .unwrap();
    let saved = ctx.settings().state();
    drop(ctx);

    let restarted = context(dir.path(), ScriptedWallet::default());
    assert_eq!(restarted.settings().state(), saved);
    assert_eq!(restarted.swap().state().slippage_tolerance, 3.0);
}

#[test]
fn deleted_settings_file_restores_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let ctx = context(dir.path(), ScriptedWallet::default());
    ctx.settings().update_theme(Theme::Light);
    drop(ctx);

    std::fs::remove_file(dir.path().join("dex-settings.json")).unwrap();

    let restarted = context(dir.path(), ScriptedWallet::default());
    assert_eq!(restarted.settings().state(), Default::default());
}

#[test]
fn corrupt_settings_file_restores_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("dex-settings.json"), "{\"theme\": 42").unwrap();

    let ctx = context(dir.path(), ScriptedWallet::default());
    assert_eq!(ctx.settings().state(), Default::default());
}

#[tokio::test]
async fn connect_then_switch_chain() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path(), ScriptedWallet::default());

    let connector = ctx.wallet().connectors().remove(0);
    ctx.wallet().connect(&connector).await;
    assert!(ctx.wallet().is_connected());
    assert_eq!(ctx.wallet().display_address().as_deref(), Some("0xAb58...eC9B"));

    ctx.chains().switch_to_chain(42161).await.unwrap();
    assert_eq!(ctx.chains().current_chain().await.unwrap().unwrap().short_name, "ARB");

    let err = ctx.chains().switch_to_chain(999).await.unwrap_err();
    assert!(matches!(err, AppError::UnsupportedChain(999)));

    ctx.wallet().disconnect().await;
    assert_eq!(ctx.wallet().status(), WalletStatus::Disconnected);
    assert_eq!(ctx.chains().current_chain_id().await.unwrap(), None);
}

#[tokio::test]
async fn rejected_switch_keeps_chain() {
    let dir = tempfile::tempdir().unwrap();
    let wallet = ScriptedWallet {
        reject_switch: true,
        ..ScriptedWallet::default()
    };
    let ctx = context(dir.path(), wallet);

    let connector = ctx.wallet().connectors().remove(0);
    ctx.wallet().connect(&connector).await;

    let err = ctx.chains().switch_to_chain(8453).await.unwrap_err();
    assert!(matches!(err, AppError::Wallet(WalletError::UserRejected)));
    assert_eq!(ctx.chains().current_chain_id().await.unwrap(), Some(1));
}

#[tokio::test]
async fn chart_follows_settings_and_reports_init_failure() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path(), ScriptedWallet::default());
    ctx.settings().update_language(Language::Ja);

    let options = ctx.chart_options("BINANCE:ETHUSDT", Interval::FifteenMinutes);
    assert_eq!(options.locale, "ja");
    ctx.chart().load(options).await.unwrap();
    assert_eq!(ctx.chart().state(), ChartState::Ready);

    let bad = ctx.chart_options("", Interval::OneHour);
    assert!(ctx.chart().load(bad).await.is_err());
    assert!(matches!(ctx.chart().state(), ChartState::InitFailed(_)));
}

#[test]
fn subscribers_see_every_ui_update_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path(), ScriptedWallet::default());

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    ctx.ui().subscribe(move |state| sink.lock().push(state.is_wallet_modal_open));

    ctx.ui().toggle_wallet_modal();
    ctx.ui().toggle_wallet_modal();
    ctx.ui().set_wallet_modal_open(true);
    ctx.ui().close_all_modals();

    assert_eq!(*seen.lock(), vec![true, false, true, false]);
}
