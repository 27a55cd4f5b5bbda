//! # Navigation Registry
//!
//! The fixed set of top-level sections. The set is closed: [`Section`] is
//! the only way to name one, and string ids from routes or deep links are
//! checked with [`is_valid_id`] / [`Section::from_id`] before use.

use thiserror::Error;

/// A navigable section as shown in the nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub id: &'static str,
    pub label: &'static str,
    pub path: &'static str,
}

/// Top-level sections in nav bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    /// Token swap form (default)
    #[default]
    Swap,
    /// Limit orders
    Limit,
    /// Liquidity pools
    Pools,
    /// Balances and positions
    Portfolio,
    /// Market charts
    Charts,
}

static ITEMS: [NavigationItem; 5] = [
    NavigationItem { id: "swap", label: "Swap", path: "/swap" },
    NavigationItem { id: "limit", label: "Limit", path: "/limit" },
    NavigationItem { id: "pools", label: "Pools", path: "/pools" },
    NavigationItem { id: "portfolio", label: "Portfolio", path: "/portfolio" },
    NavigationItem { id: "charts", label: "Charts", path: "/charts" },
];

impl Section {
    /// All sections in nav bar order
    pub fn all() -> &'static [Section] {
        &[
            Section::Swap,
            Section::Limit,
            Section::Pools,
            Section::Portfolio,
            Section::Charts,
        ]
    }

    pub fn item(&self) -> &'static NavigationItem {
        match self {
            Section::Swap => &ITEMS[0],
            Section::Limit => &ITEMS[1],
            Section::Pools => &ITEMS[2],
            Section::Portfolio => &ITEMS[3],
            Section::Charts => &ITEMS[4],
        }
    }

    pub fn id(&self) -> &'static str {
        self.item().id
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::all().iter().copied().find(|s| s.id() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Navigation item not found: {0}")]
    NotFound(String),
}

/// Every navigation item, in nav bar order.
pub fn items() -> &'static [NavigationItem] {
    &ITEMS
}

pub fn is_valid_id(id: &str) -> bool {
    Section::from_id(id).is_some()
}

/// Look up an item by id.
///
/// An unknown id is a programming error at the call site, not something to
/// show the user.
pub fn get_item(id: &str) -> Result<&'static NavigationItem, NavigationError> {
    Section::from_id(id)
        .map(|section| section.item())
        .ok_or_else(|| NavigationError::NotFound(id.to_string()))
}
