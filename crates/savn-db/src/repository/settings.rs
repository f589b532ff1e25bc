//! # Settings Repository
//!
//! The settings singleton under `"settings"`.

use savn_core::Settings;
use tracing::debug;

use super::kv::KeyValueRepository;
use super::SETTINGS_KEY;
use crate::error::DbResult;

/// Repository for persisted user preferences.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    kv: KeyValueRepository,
}

impl SettingsRepository {
    pub fn new(kv: KeyValueRepository) -> Self {
        SettingsRepository { kv }
    }

    /// Loads settings. A missing key loads as the defaults (vi, USD).
    pub async fn load(&self) -> DbResult<Settings> {
        let settings: Settings = self.kv.get_json(SETTINGS_KEY).await?.unwrap_or_default();

        debug!(language = %settings.language, currency = %settings.currency, "Loaded settings");
        Ok(settings)
    }

    /// Stores settings.
    pub async fn save(&self, settings: &Settings) -> DbResult<()> {
        debug!(language = %settings.language, currency = %settings.currency, "Saving settings");
        self.kv.put_json(SETTINGS_KEY, settings).await
    }

    /// Removes stored settings; the next load returns the defaults.
    pub async fn clear(&self) -> DbResult<()> {
        debug!("Clearing settings");
        self.kv.delete(SETTINGS_KEY).await?;
        Ok(())
    }
}
