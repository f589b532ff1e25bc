//! # Stock Commands
//!
//! Quantity changes from the inventory list and the adjust screen, plus undo.
//!
//! ## Stock Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command              Ledger entry        Money effect                 │
//! │  ───────              ────────────        ────────────                 │
//! │  sell_product         Sale  (-1)          + price  → revenue           │
//! │  restock_product      Restock (+1)        + cost   → expenses          │
//! │  waste_product        Adjustment (-1)     none                         │
//! │  adjust_inventory     Adjustment (±n)     none                         │
//! │  undo_last_action     same kind, negated  reverses the original        │
//! │                                                                         │
//! │  Quantity never drops below zero. A change that clamps to nothing      │
//! │  (selling at 0) records nothing and keeps the pending undo.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use savn_core::validation::{parse_quantity_text, validate_adjustment_quantity};
use savn_core::{CoreError, CoreResult, InventoryStore, Product, Transaction};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::persist_inventory_change;
use crate::error::ApiError;
use crate::state::{DbState, InventoryState};

/// Direction picked on the adjust screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustMode {
    /// "Add stock for {name}"
    Add,
    /// "Record loss for {name}"
    Remove,
}

/// Result of a stock command: the product after the change and the entry
/// recorded, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockUpdate {
    pub product: Product,
    pub transaction: Option<Transaction>,
    pub can_undo: bool,
}

fn stock_update(
    store: &InventoryStore,
    id: &str,
    transaction: Option<Transaction>,
) -> CoreResult<StockUpdate> {
    let product = store
        .get_product(id)
        .cloned()
        .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

    Ok(StockUpdate {
        product,
        transaction,
        can_undo: store.can_undo(),
    })
}

async fn change_stock<F>(
    db: &DbState,
    inventory: &InventoryState,
    id: &str,
    op: F,
) -> Result<StockUpdate, ApiError>
where
    F: FnOnce(&mut InventoryStore) -> CoreResult<Option<Transaction>>,
{
    let update = persist_inventory_change(db, inventory, |s| {
        let tx = op(s)?;
        stock_update(s, id, tx)
    })
    .await?;

    match &update.transaction {
        Some(tx) => info!(
            id = %id,
            kind = %tx.kind,
            delta = tx.quantity_delta,
            quantity = update.product.quantity,
            "Stock changed"
        ),
        None => debug!(id = %id, "Stock change clamped to nothing"),
    }

    Ok(update)
}

/// Sells one unit.
pub async fn sell_product(
    db: &DbState,
    inventory: &InventoryState,
    id: &str,
) -> Result<StockUpdate, ApiError> {
    debug!(id = %id, "sell_product command");
    change_stock(db, inventory, id, |s| s.sell_one(id)).await
}

/// Restocks one unit.
pub async fn restock_product(
    db: &DbState,
    inventory: &InventoryState,
    id: &str,
) -> Result<StockUpdate, ApiError> {
    debug!(id = %id, "restock_product command");
    change_stock(db, inventory, id, |s| s.restock_one(id)).await
}

/// Marks one unit as waste.
pub async fn waste_product(
    db: &DbState,
    inventory: &InventoryState,
    id: &str,
) -> Result<StockUpdate, ApiError> {
    debug!(id = %id, "waste_product command");
    change_stock(db, inventory, id, |s| s.waste_one(id)).await
}

/// Applies the adjust dialog.
///
/// `quantity` is the raw text field; it must parse to at least 1.
pub async fn adjust_inventory(
    db: &DbState,
    inventory: &InventoryState,
    id: &str,
    mode: AdjustMode,
    quantity: &str,
) -> Result<StockUpdate, ApiError> {
    debug!(id = %id, ?mode, quantity = %quantity, "adjust_inventory command");

    let units = parse_quantity_text(quantity)
        .and_then(validate_adjustment_quantity)
        .map_err(CoreError::from)?;

    let delta = match mode {
        AdjustMode::Add => units,
        AdjustMode::Remove => -units,
    };

    change_stock(db, inventory, id, |s| s.adjust(id, delta)).await
}

/// Reverts the most recent stock change.
///
/// Returns the compensating entry, or `None` when there was nothing to undo.
pub async fn undo_last_action(
    db: &DbState,
    inventory: &InventoryState,
) -> Result<Option<Transaction>, ApiError> {
    debug!("undo_last_action command");

    if !inventory.with_store(InventoryStore::can_undo) {
        return Ok(None);
    }

    let reversal = persist_inventory_change(db, inventory, |s| s.undo_last_action()).await?;

    if let Some(tx) = &reversal {
        info!(product_id = %tx.product_id, reverses = ?tx.reverses, "Undid last action");
    }
    Ok(reversal)
}
