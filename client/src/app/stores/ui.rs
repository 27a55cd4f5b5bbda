//! # UI Store
//!
//! Process-wide UI flags: sidebar, mobile menu, modals and the active tab.

use crate::app::navigation::Section;
use crate::app::state::UiState;
use crate::app::store::{Store, SubscriptionId};

#[derive(Default)]
pub struct UiStore {
    store: Store<UiState>,
}

impl UiStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> UiState {
        self.store.get()
    }

    pub fn subscribe(&self, listener: impl Fn(&UiState) + Send + Sync + 'static) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn set_sidebar_open(&self, open: bool) {
        self.store.update(|s| s.is_sidebar_open = open);
    }

    pub fn toggle_sidebar(&self) {
        self.store.update(|s| s.is_sidebar_open = !s.is_sidebar_open);
    }

    pub fn set_mobile_menu_open(&self, open: bool) {
        self.store.update(|s| s.is_mobile_menu_open = open);
    }

    pub fn toggle_mobile_menu(&self) {
        self.store.update(|s| s.is_mobile_menu_open = !s.is_mobile_menu_open);
    }

    pub fn set_wallet_modal_open(&self, open: bool) {
        self.store.update(|s| s.is_wallet_modal_open = open);
    }

    pub fn toggle_wallet_modal(&self) {
        self.store.update(|s| s.is_wallet_modal_open = !s.is_wallet_modal_open);
    }

    pub fn set_settings_modal_open(&self, open: bool) {
        self.store.update(|s| s.is_settings_modal_open = open);
    }

    pub fn toggle_settings_modal(&self) {
        self.store
            .update(|s| s.is_settings_modal_open = !s.is_settings_modal_open);
    }

    /// Switch the active tab. String ids must be resolved with
    /// [`Section::from_id`] first.
    pub fn set_active_tab(&self, tab: Section) {
        self.store.update(|s| s.active_tab = tab);
    }

    /// Close the wallet modal, settings modal and mobile menu in one update.
    /// The sidebar is left as it is.
    pub fn close_all_modals(&self) {
        self.store.update(|s| {
            s.is_wallet_modal_open = false;
            s.is_settings_modal_open = false;
            s.is_mobile_menu_open = false;
        });
    }
}
