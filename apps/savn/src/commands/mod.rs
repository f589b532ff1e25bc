//! # Commands Module
//!
//! All commands exposed to the screens.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports + write-through helper)
//! ├── product.rs    ◄─── Product list, add, edit, remove
//! ├── stock.rs      ◄─── Sell, restock, waste, adjust, undo
//! ├── history.rs    ◄─── Summary and transaction history
//! ├── settings.rs   ◄─── Language, currency, reset
//! └── analytics.rs  ◄─── Shopify dashboard refresh
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Read only
//! pub fn list_products(inventory: &InventoryState) -> Vec<Product>
//!
//! // Mutates inventory, writes through to the store
//! pub async fn sell_product(db: &DbState, inventory: &InventoryState, id: &str)
//!
//! // Persists settings before updating memory
//! pub async fn set_language(db: &DbState, settings: &SettingsState, language: Language)
//! ```
//!
//! ## Write-Through
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  persist_inventory_change(db, inventory, op)                           │
//! │                                                                         │
//! │  1. take the write gate                                                │
//! │  2. checkpoint the store                                               │
//! │  3. run op on the in-memory store ── Err? ──► return it (no write)     │
//! │  4. save products + transactions in one SQL transaction                │
//! │  5. save failed? restore checkpoint, return DATABASE_ERROR             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod analytics;
pub mod history;
pub mod product;
pub mod settings;
pub mod stock;

use savn_core::{CoreResult, InventoryStore};
use tracing::warn;

use crate::error::ApiError;
use crate::state::{DbState, InventoryState};

/// Runs `op` against the inventory and writes the result through to the
/// database before returning.
///
/// The in-memory store is rolled back if the write fails, so memory and
/// disk never disagree after a command resolves.
pub(crate) async fn persist_inventory_change<T, F>(
    db: &DbState,
    inventory: &InventoryState,
    op: F,
) -> Result<T, ApiError>
where
    F: FnOnce(&mut InventoryStore) -> CoreResult<T>,
{
    let _gate = inventory.write_gate().await;
    let checkpoint = inventory.checkpoint();

    let value = inventory.with_store_mut(op)?;

    let (products, transactions) = inventory.snapshot();
    if let Err(e) = db.inner().save_inventory(&products, &transactions).await {
        warn!(error = %e, "Inventory write failed, rolling back in-memory change");
        inventory.restore(checkpoint);
        return Err(e.into());
    }

    Ok(value)
}
