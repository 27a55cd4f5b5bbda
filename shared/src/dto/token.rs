//! # Token DTOs
//!
//! Token references as they appear in token lists.

use serde::{Deserialize, Serialize};

/// A token on a specific chain.
///
/// Two tokens are the same token when chain id and address match; the
/// address comparison ignores hex case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub chain_id: u64,
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    #[serde(rename = "logoURI", skip_serializing_if = "Option::is_none", default)]
    pub logo_uri: Option<String>,
}

impl Token {
    pub fn new(
        chain_id: u64,
        address: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        decimals: u8,
    ) -> Self {
        Self {
            chain_id,
            address: address.into(),
            symbol: symbol.into(),
            name: name.into(),
            decimals,
            logo_uri: None,
        }
    }

    /// Key used to compare tokens: chain id plus lowercased address.
    pub fn key(&self) -> (u64, String) {
        (self.chain_id, self.address.to_ascii_lowercase())
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Token {}
