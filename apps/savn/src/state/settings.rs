//! # Settings State
//!
//! In-memory copy of the persisted [`Settings`]. Loaded once at startup;
//! commands persist first and only then call [`SettingsState::replace`].
//!
//! Setters hold [`SettingsState::write_gate`] across read, persist and
//! replace, so two overlapping changes both land.

use std::sync::{Arc, Mutex, PoisonError};

use savn_core::Settings;
use tokio::sync::{Mutex as AsyncMutex, MutexGuard as AsyncMutexGuard};

#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    settings: Arc<Mutex<Settings>>,
    write_gate: Arc<AsyncMutex<()>>,
}

impl SettingsState {
    pub fn new(settings: Settings) -> Self {
        SettingsState {
            settings: Arc::new(Mutex::new(settings)),
            write_gate: Arc::new(AsyncMutex::new(())),
        }
    }

    /// Waits for exclusive right to change and persist settings.
    pub async fn write_gate(&self) -> AsyncMutexGuard<'_, ()> {
        self.write_gate.lock().await
    }

    /// Returns a copy of the current settings.
    pub fn get(&self) -> Settings {
        *self.settings.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the in-memory settings.
    pub fn replace(&self, settings: Settings) {
        *self.settings.lock().unwrap_or_else(PoisonError::into_inner) = settings;
    }
}
