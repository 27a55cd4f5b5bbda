//! # DEX Client - Library Root
//!
//! Client-side state and wallet orchestration for a multi-chain DEX front
//! end. Rendering lives elsewhere; this crate owns what the views read and
//! the calls they make.
//!
//! ## Module Structure
//!
//! - **app**: observable stores (UI, settings, swap draft), the navigation
//!   registry, and [`AppContext`] which wires them together
//! - **core**: the error type and the port traits for external capabilities
//! - **services**: chain registry and switcher, wallet facade, chart loader,
//!   storage adapters, headless ports
//! - **debug**: logging setup
//! - **utils**: input validation
//!
//! ```text
//! main.rs
//!   │
//!   ├── debug (tracing setup)
//!   ├── lib_core::init_config (environment)
//!   └── app::AppContext
//!         ├── app::stores::*  ── services::storage
//!         └── services::{wallet, chain, chart} ── core::service ports
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p dex-client
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod utils;

pub use app::{AppContext, Ports};
pub use core::{AppError, Result};
