//! # Application State Types
//!
//! Plain state for the UI, settings and swap-draft stores. The stores in
//! [`crate::app::stores`] own the mutation rules; these types only carry data
//! and defaults.

use serde::{Deserialize, Serialize};
use shared::Token;

use crate::app::navigation::Section;

/// Default slippage tolerance, in percent.
pub const DEFAULT_SLIPPAGE: f64 = 0.5;

/// Ephemeral UI flags. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub is_sidebar_open: bool,
    pub is_mobile_menu_open: bool,
    pub is_wallet_modal_open: bool,
    pub is_settings_modal_open: bool,
    pub active_tab: Section,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            is_sidebar_open: true,
            is_mobile_menu_open: false,
            is_wallet_modal_open: false,
            is_settings_modal_open: false,
            active_tab: Section::Swap,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the OS preference
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ja,
    Zh,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
            Language::Zh => "zh",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettings {
    pub transactions: bool,
    pub price_alerts: bool,
    pub news: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            transactions: true,
            price_alerts: true,
            news: false,
        }
    }
}

/// Partial update for [`NotificationSettings`]; `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotificationsPatch {
    pub transactions: Option<bool>,
    pub price_alerts: Option<bool>,
    pub news: Option<bool>,
}

impl NotificationSettings {
    pub fn apply(&mut self, patch: NotificationsPatch) {
        if let Some(v) = patch.transactions {
            self.transactions = v;
        }
        if let Some(v) = patch.price_alerts {
            self.price_alerts = v;
        }
        if let Some(v) = patch.news {
            self.news = v;
        }
    }
}

/// User preferences. Serialized as-is to the persisted settings entry.
///
/// Missing fields in persisted JSON fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsState {
    pub theme: Theme,
    pub language: Language,
    /// Percent, within [0, 100]
    pub slippage_tolerance: f64,
    pub notifications: NotificationSettings,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            language: Language::default(),
            slippage_tolerance: DEFAULT_SLIPPAGE,
            notifications: NotificationSettings::default(),
        }
    }
}

/// Bulk partial update for [`SettingsState`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SettingsPatch {
    pub theme: Option<Theme>,
    pub language: Option<Language>,
    pub slippage_tolerance: Option<f64>,
    pub notifications: Option<NotificationsPatch>,
}

/// In-progress swap form. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapDraftState {
    pub from_token: Option<Token>,
    pub to_token: Option<Token>,
    /// Free-form decimal string as typed
    pub from_amount: String,
    pub to_amount: String,
    pub slippage_tolerance: f64,
    /// Quote fetch in flight
    pub is_loading: bool,
}

impl Default for SwapDraftState {
    fn default() -> Self {
        Self {
            from_token: None,
            to_token: None,
            from_amount: String::new(),
            to_amount: String::new(),
            slippage_tolerance: DEFAULT_SLIPPAGE,
            is_loading: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_json_layout() {
        let json = serde_json::to_value(SettingsState::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "theme": "auto",
                "language": "en",
                "slippageTolerance": 0.5,
                "notifications": {
                    "transactions": true,
                    "priceAlerts": true,
                    "news": false
                }
            })
        );
    }

    #[test]
    fn test_partial_json_merges_over_defaults() {
        let parsed: SettingsState =
            serde_json::from_str(r#"{"theme":"dark","notifications":{"news":true}}"#).unwrap();

        assert_eq!(parsed.theme, Theme::Dark);
        assert_eq!(parsed.language, Language::En);
        assert_eq!(parsed.slippage_tolerance, DEFAULT_SLIPPAGE);
        assert!(parsed.notifications.news);
        assert!(parsed.notifications.transactions);
    }

    #[test]
    fn test_notifications_patch() {
        let mut n = NotificationSettings::default();
        n.apply(NotificationsPatch {
            price_alerts: Some(false),
            ..NotificationsPatch::default()
        });
        assert!(n.transactions);
        assert!(!n.price_alerts);
        assert!(!n.news);
    }

    #[test]
    fn test_ui_defaults() {
        let ui = UiState::default();
        assert!(ui.is_sidebar_open);
        assert!(!ui.is_wallet_modal_open);
        assert_eq!(ui.active_tab, Section::Swap);
    }
}
