//! Port implementations for running without a browser.
//!
//! The CLI binary has no wallet extension and no DOM, so it wires these in:
//! no connectors are offered and the chart widget reports itself unavailable.

use async_trait::async_trait;

use crate::core::service::{ChartError, ChartWidget, Connector, Session, WalletError, WalletPort};
use crate::services::chart::ChartOptions;

#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessWallet;

#[async_trait]
impl WalletPort for HeadlessWallet {
    fn connectors(&self) -> Vec<Connector> {
        Vec::new()
    }

    async fn connect(&self, connector: &Connector) -> Result<Session, WalletError> {
        Err(WalletError::ConnectorUnavailable(connector.id.clone()))
    }

    async fn disconnect(&self) -> Result<(), WalletError> {
        Ok(())
    }

    async fn chain_id(&self) -> Result<Option<u64>, WalletError> {
        Ok(None)
    }

    async fn switch_chain(&self, _chain_id: u64) -> Result<(), WalletError> {
        Err(WalletError::NotConnected)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessChart;

#[async_trait]
impl ChartWidget for HeadlessChart {
    async fn load_script(&self, src: &str) -> Result<(), ChartError> {
        Err(ChartError::ScriptLoad(format!("no script host for {}", src)))
    }

    async fn init(&self, _options: &ChartOptions) -> Result<(), ChartError> {
        Err(ChartError::Init("no widget container".to_string()))
    }
}
