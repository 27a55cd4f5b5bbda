//! # Services
//!
//! Everything that talks to a port: storage adapters, the chain switcher,
//! the wallet facade and the chart loader, plus headless port
//! implementations for the CLI.

pub mod chain;
pub mod chart;
pub mod headless;
pub mod storage;
pub mod wallet;

#[cfg(test)]
pub(crate) mod testing;

pub use chain::{ChainConfig, ChainPriority, ChainSwitcher};
pub use chart::{ChartLoader, ChartOptions, ChartState, Interval};
pub use headless::{HeadlessChart, HeadlessWallet};
pub use storage::{FileStorage, MemoryStorage};
pub use wallet::{WalletFacade, WalletStatus};
