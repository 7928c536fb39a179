//! Session-scoped state context.
//!
//! The front-end historically reached these two pieces of state through
//! implicit global lookup. Here they live in an explicit [`SessionState`]
//! constructed once at startup and shared by the view layer via `Arc`, so
//! every consumer observes the same instance without hidden globals.

use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use crate::error::{StateError, StateResult};
use crate::state::{AdminMenuState, SettingsState};
use crate::store::SettingsStore;

/// Session-scoped application state.
///
/// Holds the two independent state singletons. Construct once via
/// [`SessionStateBuilder`], then share as `Arc<SessionState>`; mutations
/// made through one handle are visible through every other.
pub struct SessionState {
    admin_menu: RwLock<AdminMenuState>,
    settings: RwLock<SettingsState>,
}

impl SessionState {
    /// Access the admin menu state.
    ///
    /// There is a single logical writer (the UI context), so handing out a
    /// write guard for reads as well keeps the API to one entry point.
    pub fn admin_menu(&self) -> RwLockWriteGuard<'_, AdminMenuState> {
        self.admin_menu
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Access the settings state.
    pub fn settings(&self) -> RwLockWriteGuard<'_, SettingsState> {
        self.settings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Builder for constructing [`SessionState`] with an injected storage adapter.
///
/// # Required adapters
/// - `settings_store` — how durable settings are stored
pub struct SessionStateBuilder {
    settings_store: Option<Arc<dyn SettingsStore>>,
}

impl SessionStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings_store: None,
        }
    }

    #[must_use]
    pub fn settings_store(mut self, store: Arc<dyn SettingsStore>) -> Self {
        self.settings_store = Some(store);
        self
    }

    /// Build the `SessionState`, loading persisted settings.
    ///
    /// # Errors
    /// Returns `StateError::ValidationError` if the settings store is
    /// missing, or propagates storage/serialization failures from loading.
    pub fn build(self) -> StateResult<SessionState> {
        let store = self
            .settings_store
            .ok_or_else(|| StateError::ValidationError("settings_store is required".to_string()))?;

        let settings = SettingsState::load(store)?;
        log::info!("会话状态已初始化，locale = {}", settings.locale());

        Ok(SessionState {
            admin_menu: RwLock::new(AdminMenuState::new()),
            settings: RwLock::new(settings),
        })
    }
}

impl Default for SessionStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
