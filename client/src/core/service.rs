//! # Port Traits
//!
//! The external capabilities this layer depends on, expressed as traits so
//! the stores and facades can be driven by test doubles.
//!
//! - [`WalletPort`]: the wallet-connection library (sessions, chain id, chain switch)
//! - [`KeyValueStorage`]: durable client-side storage for preferences
//! - [`ChartWidget`]: the remotely hosted chart widget
//!
//! Every port call is fallible and outside this crate's control. Nothing
//! here retries.

use async_trait::async_trait;
use thiserror::Error;

use crate::services::chart::ChartOptions;

/// Errors reported by the wallet-connection capability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("User rejected the request")]
    UserRejected,

    #[error("Connector unavailable: {0}")]
    ConnectorUnavailable(String),

    /// The wallet does not know the requested chain.
    #[error("Chain {0} is not configured in the wallet")]
    ChainNotConfigured(u64),

    #[error("No wallet session")]
    NotConnected,

    #[error("Wallet provider error: {0}")]
    Provider(String),
}

/// Errors from durable storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Errors from the chart widget boundary.
///
/// The two variants are distinct user-visible states: the script never
/// arrived, or it arrived and the widget refused to start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("Chart script failed to load: {0}")]
    ScriptLoad(String),

    #[error("Chart widget failed to initialize: {0}")]
    Init(String),
}

/// How a connector reaches the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorKind {
    /// Browser extension injecting a provider
    Injected,
    /// Mobile wallet over a relay
    WalletConnect,
    CoinbaseWallet,
    Safe,
}

/// A pluggable method of establishing a wallet session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connector {
    pub id: String,
    pub name: String,
    pub kind: ConnectorKind,
}

impl Connector {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ConnectorKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}

/// An established wallet session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub address: String,
    pub chain_id: u64,
}

/// The external wallet/network library.
#[async_trait]
pub trait WalletPort: Send + Sync {
    /// Connectors the library can offer in this environment.
    fn connectors(&self) -> Vec<Connector>;

    async fn connect(&self, connector: &Connector) -> Result<Session, WalletError>;

    async fn disconnect(&self) -> Result<(), WalletError>;

    /// Chain id of the active session, `None` without a session.
    async fn chain_id(&self) -> Result<Option<u64>, WalletError>;

    /// Ask the wallet to move the session to another chain.
    async fn switch_chain(&self, chain_id: u64) -> Result<(), WalletError>;
}

/// Durable key/value storage for client-side state.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// The third-party chart widget.
#[async_trait]
pub trait ChartWidget: Send + Sync {
    /// Fetch and evaluate the widget script.
    async fn load_script(&self, src: &str) -> Result<(), ChartError>;

    /// Create the widget once its script is available.
    async fn init(&self, options: &ChartOptions) -> Result<(), ChartError>;
}
