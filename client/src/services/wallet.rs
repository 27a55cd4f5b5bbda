//! # Wallet Facade
//!
//! A thin layer over the external wallet library that exposes the few things
//! components need: the current address, connection flags, the connectors on
//! offer, and connect/disconnect.
//!
//! ## Failure model
//! - `connect` never returns an error. A failure is logged and kept in
//!   [`WalletStatus::Failed`] so the UI can tell "rejected" from
//!   "connector unavailable" without handling a `Result`.
//! - `disconnect` always ends in [`WalletStatus::Disconnected`]; a library
//!   error on the way out is only logged. It also abandons a pending
//!   connect: that attempt's result is discarded when it arrives.
//! - Only one library connect is in flight at a time. Further `connect`
//!   calls are ignored until it settles, even after a `disconnect`.
//! - Nothing is retried.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::app::store::{Store, SubscriptionId};
use crate::core::service::{Connector, WalletError, WalletPort};

/// Wallet connection status
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WalletStatus {
    /// Not connected
    #[default]
    Disconnected,
    /// Connecting in progress
    Connecting { connector: Connector },
    /// Connected session
    Connected {
        address: String,
        chain_id: u64,
        connector: Connector,
    },
    /// Last connection attempt failed
    Failed {
        connector: Connector,
        reason: WalletError,
    },
}

impl WalletStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletStatus::Connected { .. })
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, WalletStatus::Connecting { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletStatus::Connected { address, .. } => Some(address),
            _ => None,
        }
    }

    pub fn chain_id(&self) -> Option<u64> {
        match self {
            WalletStatus::Connected { chain_id, .. } => Some(*chain_id),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&WalletError> {
        match self {
            WalletStatus::Failed { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Display form of an address: first 6, `...`, last 4.
///
/// Anything shorter than 10 characters is returned unchanged.
pub fn format_address(address: &str) -> String {
    shared::truncate_address(address)
}

/// Bookkeeping for connect attempts.
#[derive(Debug, Default)]
struct Attempts {
    /// Id of the attempt whose result may still be applied
    current: u64,
    /// A library connect call has not returned yet
    in_flight: bool,
}

#[derive(Clone)]
pub struct WalletFacade {
    port: Arc<dyn WalletPort>,
    status: Arc<Store<WalletStatus>>,
    attempts: Arc<Mutex<Attempts>>,
}

impl WalletFacade {
    pub fn new(port: Arc<dyn WalletPort>) -> Self {
        Self {
            port,
            status: Arc::new(Store::default()),
            attempts: Arc::new(Mutex::new(Attempts::default())),
        }
    }

    pub fn status(&self) -> WalletStatus {
        self.status.get()
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&WalletStatus) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.status.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.status.unsubscribe(id)
    }

    pub fn address(&self) -> Option<String> {
        self.status.with(|s| s.address().map(str::to_string))
    }

    /// Address shortened for display.
    pub fn display_address(&self) -> Option<String> {
        self.status.with(|s| s.address().map(format_address))
    }

    pub fn is_connected(&self) -> bool {
        self.status.with(WalletStatus::is_connected)
    }

    pub fn is_connecting(&self) -> bool {
        self.status.with(WalletStatus::is_connecting)
    }

    pub fn connectors(&self) -> Vec<Connector> {
        self.port.connectors()
    }

    /// Open a session through `connector`.
    ///
    /// Ignored while another library connect is in flight.
    pub async fn connect(&self, connector: &Connector) {
        let attempt = {
            let mut attempts = self.attempts.lock();
            if attempts.in_flight {
                None
            } else {
                attempts.in_flight = true;
                attempts.current += 1;
                Some(attempts.current)
            }
        };
        let Some(attempt) = attempt else {
            tracing::debug!(connector = %connector.id, "Connect ignored, another attempt is pending");
            return;
        };

        self.status.set(WalletStatus::Connecting {
            connector: connector.clone(),
        });
        tracing::info!(connector = %connector.id, "Connecting wallet...");
        let result = self.port.connect(connector).await;

        let current = {
            let mut attempts = self.attempts.lock();
            attempts.in_flight = false;
            attempts.current == attempt
        };
        if !current {
            tracing::debug!(connector = %connector.id, "Discarding result of abandoned connect");
            return;
        }

        let next = match result {
            Ok(session) => {
                tracing::info!(
                    connector = %connector.id,
                    address = %format_address(&session.address),
                    chain_id = session.chain_id,
                    "Wallet connected"
                );
                WalletStatus::Connected {
                    address: session.address,
                    chain_id: session.chain_id,
                    connector: connector.clone(),
                }
            }
            Err(e) => {
                tracing::warn!(connector = %connector.id, "Failed to connect wallet: {}", e);
                WalletStatus::Failed {
                    connector: connector.clone(),
                    reason: e,
                }
            }
        };
        // A disconnect may have landed since the check above.
        self.status.update(|s| {
            if self.attempts.lock().current == attempt {
                *s = next;
            }
        });
    }

    pub async fn disconnect(&self) {
        self.attempts.lock().current += 1;
        if let Err(e) = self.port.disconnect().await {
            tracing::warn!("Wallet disconnect reported an error: {}", e);
        }
        self.status.update(|s| {
            // Also abandons a connect started while the library was busy.
            self.attempts.lock().current += 1;
            *s = WalletStatus::Disconnected;
        });
        tracing::info!("Wallet disconnected");
    }

    /// The library reported that the session moved to another chain.
    pub fn handle_chain_changed(&self, new_chain_id: u64) {
        self.status.update(|s| {
            if let WalletStatus::Connected { chain_id, .. } = s {
                *chain_id = new_chain_id;
            }
        });
    }

    /// The library reported a new active account, or none.
    pub fn handle_accounts_changed(&self, account: Option<String>) {
        self.status.update(|s| match (account, &mut *s) {
            (Some(new_address), WalletStatus::Connected { address, .. }) => *address = new_address,
            (None, WalletStatus::Connected { .. }) => *s = WalletStatus::Disconnected,
            _ => {}
        });
    }
}
