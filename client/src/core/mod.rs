//! # Core Abstractions
//!
//! Error types and the port traits the rest of the crate is written against.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Port traits for dependency injection (`WalletPort`, `KeyValueStorage`, `ChartWidget`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use dex_client::core::service::{KeyValueStorage, WalletPort};
//!
//! // In production: adapters over the real wallet library and storage
//! let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::new("data"));
//!
//! // In tests: in-memory doubles
//! let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{
    ChartError, ChartWidget, Connector, ConnectorKind, KeyValueStorage, Session, StorageError,
    WalletError, WalletPort,
};
