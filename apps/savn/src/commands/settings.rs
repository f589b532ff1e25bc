//! # Settings Commands
//!
//! Language, currency and the full data reset.
//!
//! Every setter persists first and updates memory only once the write
//! succeeded, so a returned value is always durable. Setters run under the
//! settings write gate; the reset takes the inventory gate first.

use savn_core::{Currency, Language, Settings};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::{DbState, InventoryState, SettingsState};

/// Returns the current settings.
pub fn get_settings(settings: &SettingsState) -> Settings {
    settings.get()
}

async fn save_settings(
    db: &DbState,
    settings: &SettingsState,
    next: Settings,
) -> Result<Settings, ApiError> {
    db.inner().settings().save(&next).await?;
    settings.replace(next);
    Ok(next)
}

/// Switches the UI language.
pub async fn set_language(
    db: &DbState,
    settings: &SettingsState,
    language: Language,
) -> Result<Settings, ApiError> {
    debug!(%language, "set_language command");

    let _gate = settings.write_gate().await;
    let next = Settings {
        language,
        ..settings.get()
    };
    let saved = save_settings(db, settings, next).await?;

    info!(%language, "Language changed");
    Ok(saved)
}

/// Switches the display currency. Amounts are not converted.
pub async fn set_currency(
    db: &DbState,
    settings: &SettingsState,
    currency: Currency,
) -> Result<Settings, ApiError> {
    debug!(%currency, "set_currency command");

    let _gate = settings.write_gate().await;
    let next = Settings {
        currency,
        ..settings.get()
    };
    let saved = save_settings(db, settings, next).await?;

    info!(%currency, "Currency changed");
    Ok(saved)
}

/// Clears products, transactions and settings.
///
/// ## Order
/// 1. Delete the three stored keys in one SQL transaction
/// 2. Reset the in-memory store (undo buffer included)
/// 3. Restore default settings
///
/// If the delete fails nothing on disk changed and memory is left alone.
pub async fn reset_all_data(
    db: &DbState,
    inventory: &InventoryState,
    settings: &SettingsState,
) -> Result<Settings, ApiError> {
    warn!("reset_all_data command: clearing all local data");

    let _inventory_gate = inventory.write_gate().await;
    let _settings_gate = settings.write_gate().await;

    db.inner().clear_all().await?;

    inventory.with_store_mut(|s| {
        s.reset_products();
        s.reset_transactions();
    });

    let defaults = Settings::default();
    settings.replace(defaults);

    info!("All data reset");
    Ok(defaults)
}
