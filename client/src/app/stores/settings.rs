//! # Settings Store
//!
//! Persisted user preferences. Every mutation is applied in memory, pushed to
//! subscribers, then written to storage under [`SETTINGS_KEY`].
//!
//! Loading never fails: a missing entry, unreadable storage or malformed
//! JSON all produce the defaults. Fields missing from the stored object take
//! their default values.

use std::sync::Arc;

use crate::app::state::{
    Language, NotificationsPatch, SettingsPatch, SettingsState, Theme, DEFAULT_SLIPPAGE,
};
use crate::app::store::{Store, SubscriptionId};
use crate::core::error::Result;
use crate::core::service::KeyValueStorage;
use crate::utils::validation::validate_slippage;

/// Storage key holding the persisted settings object.
pub const SETTINGS_KEY: &str = "dex-settings";

pub struct SettingsStore {
    store: Store<SettingsState>,
    storage: Arc<dyn KeyValueStorage>,
}

impl SettingsStore {
    /// Build the store from whatever is persisted, falling back to defaults.
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        let initial = load_settings(storage.as_ref());
        Self {
            store: Store::new(initial),
            storage,
        }
    }

    pub fn state(&self) -> SettingsState {
        self.store.get()
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&SettingsState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn update_theme(&self, theme: Theme) {
        self.mutate(|s| s.theme = theme);
    }

    pub fn update_language(&self, language: Language) {
        self.mutate(|s| s.language = language);
    }

    /// Set slippage in percent. Values outside [0, 100] are rejected and
    /// nothing is written.
    pub fn update_slippage(&self, slippage: f64) -> Result<()> {
        validate_slippage(slippage).into_result()?;
        self.mutate(|s| s.slippage_tolerance = slippage);
        Ok(())
    }

    pub fn update_notifications(&self, patch: NotificationsPatch) {
        self.mutate(|s| s.notifications.apply(patch));
    }

    /// Apply several fields at once. Validation happens before anything
    /// changes, so a bad slippage leaves the whole patch unapplied.
    pub fn update_settings(&self, patch: SettingsPatch) -> Result<()> {
        if let Some(slippage) = patch.slippage_tolerance {
            validate_slippage(slippage).into_result()?;
        }

        self.mutate(|s| {
            if let Some(theme) = patch.theme {
                s.theme = theme;
            }
            if let Some(language) = patch.language {
                s.language = language;
            }
            if let Some(slippage) = patch.slippage_tolerance {
                s.slippage_tolerance = slippage;
            }
            if let Some(notifications) = patch.notifications {
                s.notifications.apply(notifications);
            }
        });
        Ok(())
    }

    pub fn reset_to_defaults(&self) {
        self.mutate(|s| *s = SettingsState::default());
    }

    /// Apply, notify, then persist, all inside the store's write sequence so
    /// storage sees mutations in the same order as memory does. What gets
    /// written is the state at save time, which also covers listeners that
    /// mutated settings while being notified.
    fn mutate(&self, f: impl FnOnce(&mut SettingsState)) {
        self.store.exclusive(|| {
            self.store.update(f);
            save_settings(self.storage.as_ref(), &self.store.get());
        });
    }
}

/// Read persisted settings, treating anything unusable as absent.
pub fn load_settings(storage: &dyn KeyValueStorage) -> SettingsState {
    let raw = match storage.get(SETTINGS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("No persisted settings, using defaults");
            return SettingsState::default();
        }
        Err(e) => {
            tracing::warn!("Failed to read persisted settings: {}. Using defaults.", e);
            return SettingsState::default();
        }
    };

    match serde_json::from_str::<SettingsState>(&raw) {
        Ok(mut settings) => {
            if !validate_slippage(settings.slippage_tolerance).is_valid {
                tracing::warn!(
                    slippage = settings.slippage_tolerance,
                    "Persisted slippage out of range, using default"
                );
                settings.slippage_tolerance = DEFAULT_SLIPPAGE;
            }
            tracing::info!("Loaded persisted settings");
            settings
        }
        Err(e) => {
            tracing::warn!("Persisted settings are corrupt: {}. Using defaults.", e);
            SettingsState::default()
        }
    }
}

fn save_settings(storage: &dyn KeyValueStorage, settings: &SettingsState) {
    let json = match serde_json::to_string(settings) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Failed to serialize settings: {}", e);
            return;
        }
    };

    if let Err(e) = storage.set(SETTINGS_KEY, &json) {
        tracing::error!("Failed to persist settings: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::services::storage::MemoryStorage;
    use crate::services::testing::{FailingStorage, SlowFirstWriteStorage};

    fn fresh() -> (Arc<MemoryStorage>, SettingsStore) {
        let storage = Arc::new(MemoryStorage::new());
        let store = SettingsStore::load(storage.clone());
        (storage, store)
    }

    #[test]
    fn test_defaults_when_nothing_persisted() {
        let (storage, store) = fresh();
        assert_eq!(store.state(), SettingsState::default());
        assert_eq!(storage.get(SETTINGS_KEY).unwrap(), None);
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let (storage, store) = fresh();

        store.update_theme(Theme::Dark);
        let persisted = storage.get(SETTINGS_KEY).unwrap().unwrap();
        assert!(persisted.contains(r#""theme":"dark""#));

        store.update_language(Language::Zh);
        store.update_slippage(1.5).unwrap();
        store.update_notifications(NotificationsPatch {
            news: Some(true),
            ..NotificationsPatch::default()
        });

        let reloaded = load_settings(storage.as_ref());
        assert_eq!(reloaded, store.state());
        assert_eq!(reloaded.language, Language::Zh);
        assert_eq!(reloaded.slippage_tolerance, 1.5);
        assert!(reloaded.notifications.news);
    }

    #[test]
    fn test_round_trip_across_restart() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let store = SettingsStore::load(storage.clone());
            store
                .update_settings(SettingsPatch {
                    theme: Some(Theme::Light),
                    language: Some(Language::Ja),
                    slippage_tolerance: Some(3.0),
                    notifications: Some(NotificationsPatch {
                        transactions: Some(false),
                        price_alerts: Some(false),
                        news: Some(true),
                    }),
                })
                .unwrap();
        }

        let restarted = SettingsStore::load(storage.clone());
        let state = restarted.state();
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.language, Language::Ja);
        assert_eq!(state.slippage_tolerance, 3.0);
        assert!(!state.notifications.transactions);
        assert!(!state.notifications.price_alerts);
        assert!(state.notifications.news);
    }

    #[test]
    fn test_deleted_entry_reloads_as_defaults() {
        let storage = Arc::new(MemoryStorage::new());
        SettingsStore::load(storage.clone()).update_theme(Theme::Dark);

        storage.remove(SETTINGS_KEY).unwrap();

        assert_eq!(SettingsStore::load(storage).state(), SettingsState::default());
    }

    #[test]
    fn test_corrupt_entry_reloads_as_defaults() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(SETTINGS_KEY, "{not json").unwrap();
        assert_eq!(SettingsStore::load(storage.clone()).state(), SettingsState::default());

        storage.set(SETTINGS_KEY, r#"{"theme":"sepia"}"#).unwrap();
        assert_eq!(SettingsStore::load(storage).state(), SettingsState::default());
    }

    #[test]
    fn test_out_of_range_persisted_slippage_is_replaced() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set(SETTINGS_KEY, r#"{"theme":"dark","slippageTolerance":250}"#)
            .unwrap();

        let state = SettingsStore::load(storage).state();
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.slippage_tolerance, DEFAULT_SLIPPAGE);
    }

    #[test]
    fn test_invalid_slippage_is_rejected_without_writing() {
        let (storage, store) = fresh();

        let err = store.update_slippage(101.0).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.state().slippage_tolerance, DEFAULT_SLIPPAGE);
        assert_eq!(storage.get(SETTINGS_KEY).unwrap(), None);

        let err = store.update_settings(SettingsPatch {
            theme: Some(Theme::Dark),
            slippage_tolerance: Some(-1.0),
            ..SettingsPatch::default()
        });
        assert!(err.is_err());
        assert_eq!(store.state().theme, Theme::Auto);
    }

    #[test]
    fn test_reset_to_defaults_is_persisted() {
        let (storage, store) = fresh();
        store.update_theme(Theme::Dark);
        store.reset_to_defaults();

        assert_eq!(store.state(), SettingsState::default());
        assert_eq!(load_settings(storage.as_ref()), SettingsState::default());
    }

    #[test]
    fn test_subscribers_see_each_change() {
        let (_storage, store) = fresh();
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |s| sink.lock().push(s.theme));

        store.update_theme(Theme::Dark);
        store.update_theme(Theme::Light);

        assert_eq!(*seen.lock(), vec![Theme::Dark, Theme::Light]);
    }

    #[test]
    fn test_failed_write_keeps_in_memory_change() {
        let store = SettingsStore::load(Arc::new(FailingStorage::failing_writes()));

        store.update_theme(Theme::Dark);
        store.update_slippage(2.0).unwrap();

        let state = store.state();
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.slippage_tolerance, 2.0);
    }

    #[test]
    fn test_failed_read_loads_defaults() {
        let store = SettingsStore::load(Arc::new(FailingStorage::failing_reads()));
        assert_eq!(store.state(), SettingsState::default());
    }

    #[test]
    fn test_overlapping_writers_persist_in_memory_order() {
        let storage = Arc::new(SlowFirstWriteStorage::new());
        let store = Arc::new(SettingsStore::load(storage.clone()));
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |s| sink.lock().push(s.theme));

        let writer = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || store.update_theme(Theme::Dark))
        };
        while !storage.first_write_started() {
            std::thread::yield_now();
        }
        store.update_theme(Theme::Light);
        writer.join().unwrap();

        assert_eq!(store.state().theme, Theme::Light);
        assert_eq!(load_settings(storage.as_ref()).theme, Theme::Light);
        assert_eq!(*seen.lock(), vec![Theme::Dark, Theme::Light]);
    }
}
