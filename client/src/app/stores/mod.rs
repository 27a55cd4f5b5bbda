//! # Stores
//!
//! One store per concern, each wrapping a [`crate::app::store::Store`]:
//!
//! - [`ui`]: ephemeral UI flags
//! - [`settings`]: persisted preferences
//! - [`swap`]: the in-progress swap form

pub mod settings;
pub mod swap;
pub mod ui;

pub use settings::{SettingsStore, SETTINGS_KEY};
pub use swap::SwapStore;
pub use ui::UiStore;
