//! # Data Transfer Objects (DTOs)
//!
//! Data structures shared between the client crates and anything that talks
//! to token lists or price services.
//!
//! ## Module Organization
//!
//! - [`token`] - Token references used by the swap draft and token pickers
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: camelCase, matching the public token-list format
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "chainId": 1,
//!   "address": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
//!   "symbol": "USDC",
//!   "name": "USD Coin",
//!   "decimals": 6,
//!   "logoURI": "https://tokens.example/usdc.png"
//! }
//! ```

pub mod token;

pub use token::*;
