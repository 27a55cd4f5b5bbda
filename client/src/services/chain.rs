//! # Chain Registry & Switcher
//!
//! Static display metadata for the supported chains, and the operation that
//! asks the connected wallet to move to another chain.
//!
//! ## Rollout
//!
//! Chains carry a `phase`: phase 1 chains ship first, later phases are
//! enabled as liquidity arrives. `priority` orders them inside a phase.

use std::sync::Arc;

use lib_core::EnvironmentConfig;

use crate::core::error::{AppError, Result};
use crate::core::service::WalletPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChainPriority {
    High,
    Medium,
    Low,
}

/// Display metadata for one supported chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainConfig {
    pub chain_id: u64,
    pub name: &'static str,
    pub short_name: &'static str,
    pub icon: &'static str,
    /// Brand color as `#RRGGBB`
    pub color: &'static str,
    /// Block explorer base URL, no trailing slash
    pub explorer_url: &'static str,
    /// Public RPC used when no override is configured
    pub public_rpc: &'static str,
    pub priority: ChainPriority,
    pub phase: u8,
}

impl ChainConfig {
    pub fn explorer_tx_url(&self, tx_hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url, tx_hash)
    }

    pub fn explorer_address_url(&self, address: &str) -> String {
        format!("{}/address/{}", self.explorer_url, address)
    }

    /// Configured RPC override, or the public endpoint.
    pub fn rpc_url<'a>(&self, config: &'a EnvironmentConfig) -> &'a str {
        config.rpc_url(self.chain_id).unwrap_or(self.public_rpc)
    }
}

pub const ETHEREUM: u64 = 1;
pub const OPTIMISM: u64 = 10;
pub const BSC: u64 = 56;
pub const POLYGON: u64 = 137;
pub const BASE: u64 = 8453;
pub const ARBITRUM: u64 = 42161;
pub const AVALANCHE: u64 = 43114;
pub const SEPOLIA: u64 = 11155111;

static CHAINS: [ChainConfig; 8] = [
    ChainConfig {
        chain_id: ETHEREUM,
        name: "Ethereum",
        short_name: "ETH",
        icon: "/chains/ethereum.svg",
        color: "#627EEA",
        explorer_url: "https://etherscan.io",
        public_rpc: "https://eth.llamarpc.com",
        priority: ChainPriority::High,
        phase: 1,
    },
    ChainConfig {
        chain_id: OPTIMISM,
        name: "OP Mainnet",
        short_name: "OP",
        icon: "/chains/optimism.svg",
        color: "#FF0420",
        explorer_url: "https://optimistic.etherscan.io",
        public_rpc: "https://mainnet.optimism.io",
        priority: ChainPriority::Medium,
        phase: 2,
    },
    ChainConfig {
        chain_id: BSC,
        name: "BNB Smart Chain",
        short_name: "BNB",
        icon: "/chains/bsc.svg",
        color: "#F0B90B",
        explorer_url: "https://bscscan.com",
        public_rpc: "https://bsc-dataseed.bnbchain.org",
        priority: ChainPriority::Medium,
        phase: 2,
    },
    ChainConfig {
        chain_id: POLYGON,
        name: "Polygon",
        short_name: "POL",
        icon: "/chains/polygon.svg",
        color: "#8247E5",
        explorer_url: "https://polygonscan.com",
        public_rpc: "https://polygon-rpc.com",
        priority: ChainPriority::Medium,
        phase: 2,
    },
    ChainConfig {
        chain_id: BASE,
        name: "Base",
        short_name: "BASE",
        icon: "/chains/base.svg",
        color: "#0052FF",
        explorer_url: "https://basescan.org",
        public_rpc: "https://mainnet.base.org",
        priority: ChainPriority::High,
        phase: 1,
    },
    ChainConfig {
        chain_id: ARBITRUM,
        name: "Arbitrum One",
        short_name: "ARB",
        icon: "/chains/arbitrum.svg",
        color: "#28A0F0",
        explorer_url: "https://arbiscan.io",
        public_rpc: "https://arb1.arbitrum.io/rpc",
        priority: ChainPriority::High,
        phase: 1,
    },
    ChainConfig {
        chain_id: AVALANCHE,
        name: "Avalanche",
        short_name: "AVAX",
        icon: "/chains/avalanche.svg",
        color: "#E84142",
        explorer_url: "https://snowtrace.io",
        public_rpc: "https://api.avax.network/ext/bc/C/rpc",
        priority: ChainPriority::Low,
        phase: 3,
    },
    ChainConfig {
        chain_id: SEPOLIA,
        name: "Sepolia",
        short_name: "SEP",
        icon: "/chains/sepolia.svg",
        color: "#CFB5F0",
        explorer_url: "https://sepolia.etherscan.io",
        public_rpc: "https://rpc.sepolia.org",
        priority: ChainPriority::Low,
        phase: 3,
    },
];

pub fn get_chain_config(chain_id: u64) -> Option<&'static ChainConfig> {
    CHAINS.iter().find(|c| c.chain_id == chain_id)
}

pub fn is_supported(chain_id: u64) -> bool {
    get_chain_config(chain_id).is_some()
}

/// All supported chains, ordered by phase then priority.
pub fn supported_chains() -> Vec<&'static ChainConfig> {
    let mut chains: Vec<_> = CHAINS.iter().collect();
    chains.sort_by_key(|c| (c.phase, c.priority, c.chain_id));
    chains
}

/// Chains enabled at a rollout phase (that phase and every earlier one).
pub fn chains_by_phase(phase: u8) -> Vec<&'static ChainConfig> {
    supported_chains()
        .into_iter()
        .filter(|c| c.phase <= phase)
        .collect()
}

/// Requests chain changes from the wallet and reports the current chain.
#[derive(Clone)]
pub struct ChainSwitcher {
    wallet: Arc<dyn WalletPort>,
}

impl ChainSwitcher {
    pub fn new(wallet: Arc<dyn WalletPort>) -> Self {
        Self { wallet }
    }

    /// Ask the wallet to switch networks.
    ///
    /// Unsupported ids are refused before reaching the wallet. Anything the
    /// wallet reports (user declined, chain unknown to the wallet, no
    /// session) is returned as-is; there is no retry.
    pub async fn switch_to_chain(&self, chain_id: u64) -> Result<()> {
        let chain = get_chain_config(chain_id).ok_or(AppError::UnsupportedChain(chain_id))?;

        tracing::info!(chain_id, chain = chain.name, "Requesting chain switch");
        self.wallet.switch_chain(chain_id).await?;
        Ok(())
    }

    pub async fn current_chain_id(&self) -> Result<Option<u64>> {
        Ok(self.wallet.chain_id().await?)
    }

    /// Config of the session's chain; `None` without a session or on an
    /// unsupported chain.
    pub async fn current_chain(&self) -> Result<Option<&'static ChainConfig>> {
        Ok(self.current_chain_id().await?.and_then(get_chain_config))
    }

    /// A session exists but sits on a chain outside the registry.
    pub async fn is_wrong_network(&self) -> Result<bool> {
        Ok(matches!(self.current_chain_id().await?, Some(id) if !is_supported(id)))
    }
}
