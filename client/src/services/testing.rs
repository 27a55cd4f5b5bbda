//! Scriptable port doubles for unit tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

use crate::core::service::{
    ChartError, ChartWidget, Connector, ConnectorKind, KeyValueStorage, Session, StorageError,
    WalletError, WalletPort,
};
use crate::services::chain::ETHEREUM;
use crate::services::chart::ChartOptions;
use crate::services::storage::MemoryStorage;

pub const FAKE_ADDRESS: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

#[derive(Default)]
struct WalletInner {
    session: Option<Session>,
    fail_connect: Option<WalletError>,
    fail_disconnect: Option<WalletError>,
    fail_switch: Option<WalletError>,
    connect_gate: Option<Arc<Notify>>,
    connect_calls: usize,
    switch_requests: Vec<u64>,
}

/// In-memory wallet. Connects on Ethereum unless told otherwise.
#[derive(Default)]
pub struct FakeWallet {
    inner: Mutex<WalletInner>,
}

impl FakeWallet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connected_on(chain_id: u64) -> Self {
        let wallet = Self::new();
        wallet.inner.lock().session = Some(Session {
            address: FAKE_ADDRESS.to_string(),
            chain_id,
        });
        wallet
    }

    pub fn fail_connect_with(&self, err: WalletError) {
        self.inner.lock().fail_connect = Some(err);
    }

    pub fn fail_disconnect_with(&self, err: WalletError) {
        self.inner.lock().fail_disconnect = Some(err);
    }

    pub fn fail_switch_with(&self, err: WalletError) {
        self.inner.lock().fail_switch = Some(err);
    }

    /// Make `connect` wait until the returned handle is notified.
    pub fn hold_connect(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.inner.lock().connect_gate = Some(gate.clone());
        gate
    }

    pub fn connect_calls(&self) -> usize {
        self.inner.lock().connect_calls
    }

    pub fn switch_requests(&self) -> Vec<u64> {
        self.inner.lock().switch_requests.clone()
    }
}

#[async_trait]
impl WalletPort for FakeWallet {
    fn connectors(&self) -> Vec<Connector> {
        vec![
            Connector::new("injected", "Browser Wallet", ConnectorKind::Injected),
            Connector::new("walletConnect", "WalletConnect", ConnectorKind::WalletConnect),
        ]
    }

    async fn connect(&self, _connector: &Connector) -> Result<Session, WalletError> {
        let gate = {
            let mut inner = self.inner.lock();
            inner.connect_calls += 1;
            inner.connect_gate.clone()
        };
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let mut inner = self.inner.lock();
        if let Some(err) = inner.fail_connect.clone() {
            return Err(err);
        }
        let session = Session {
            address: FAKE_ADDRESS.to_string(),
            chain_id: ETHEREUM,
        };
        inner.session = Some(session.clone());
        Ok(session)
    }

    async fn disconnect(&self) -> Result<(), WalletError> {
        let mut inner = self.inner.lock();
        inner.session = None;
        match inner.fail_disconnect.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn chain_id(&self) -> Result<Option<u64>, WalletError> {
        Ok(self.inner.lock().session.as_ref().map(|s| s.chain_id))
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<(), WalletError> {
        let mut inner = self.inner.lock();
        inner.switch_requests.push(chain_id);
        if let Some(err) = inner.fail_switch.clone() {
            return Err(err);
        }
        match inner.session.as_mut() {
            Some(session) => {
                session.chain_id = chain_id;
                Ok(())
            }
            None => Err(WalletError::NotConnected),
        }
    }
}

#[derive(Default)]
struct ChartInner {
    fail_script: Option<String>,
    fail_init: Option<String>,
    script_loads: usize,
    inits: Vec<ChartOptions>,
}

#[derive(Default)]
pub struct FakeChart {
    inner: Mutex<ChartInner>,
}

impl FakeChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_script_with(&self, reason: &str) {
        self.inner.lock().fail_script = Some(reason.to_string());
    }

    pub fn fail_init_with(&self, reason: &str) {
        self.inner.lock().fail_init = Some(reason.to_string());
    }

    pub fn clear_failures(&self) {
        let mut inner = self.inner.lock();
        inner.fail_script = None;
        inner.fail_init = None;
    }

    pub fn script_loads(&self) -> usize {
        self.inner.lock().script_loads
    }

    pub fn inits(&self) -> usize {
        self.inner.lock().inits.len()
    }
}

#[async_trait]
impl ChartWidget for FakeChart {
    async fn load_script(&self, _src: &str) -> Result<(), ChartError> {
        let result = {
            let mut inner = self.inner.lock();
            inner.script_loads += 1;
            match &inner.fail_script {
                Some(reason) => Err(ChartError::ScriptLoad(reason.clone())),
                None => Ok(()),
            }
        };
        // A real fetch suspends; give overlapping loads a chance to run.
        tokio::task::yield_now().await;
        result
    }

    async fn init(&self, options: &ChartOptions) -> Result<(), ChartError> {
        let mut inner = self.inner.lock();
        inner.inits.push(options.clone());
        match &inner.fail_init {
            Some(reason) => Err(ChartError::Init(reason.clone())),
            None => Ok(()),
        }
    }
}

/// Storage whose reads and/or writes fail with an I/O error.
#[derive(Default)]
pub struct FailingStorage {
    pub fail_get: bool,
    pub fail_set: bool,
    inner: MemoryStorage,
}

impl FailingStorage {
    pub fn failing_reads() -> Self {
        Self {
            fail_get: true,
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_set: true,
            ..Self::default()
        }
    }
}

fn io_failure(what: &str) -> StorageError {
    StorageError::Io(std::io::Error::other(what.to_string()))
}

impl KeyValueStorage for FailingStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_get {
            return Err(io_failure("permission denied"));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_set {
            return Err(io_failure("disk full"));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

/// Memory storage whose first `set` stalls, to force overlapping writers.
#[derive(Default)]
pub struct SlowFirstWriteStorage {
    inner: MemoryStorage,
    first_write_started: AtomicBool,
}

impl SlowFirstWriteStorage {
    pub const DELAY: Duration = Duration::from_millis(200);

    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_write_started(&self) -> bool {
        self.first_write_started.load(Ordering::SeqCst)
    }
}

impl KeyValueStorage for SlowFirstWriteStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.first_write_started.swap(true, Ordering::SeqCst) {
            std::thread::sleep(Self::DELAY);
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}
