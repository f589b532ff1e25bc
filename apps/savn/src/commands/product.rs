//! # Product Commands
//!
//! Product list and CRUD for the inventory, add and edit screens.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Lifecycle                                    │
//! │                                                                         │
//! │  add_product ──► Product { quantity = floor(q), price, cost }          │
//! │       │                                                                 │
//! │       ├── update_product (name / price / cost, no ledger entry)        │
//! │       ├── sell / restock / waste / adjust  (see stock.rs)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  remove_product ──► gone; its history rows stay (name snapshot)        │
//! │                                                                         │
//! │  add / update / remove all clear the pending undo.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use savn_core::inventory::{NewProduct, ProductPatch};
use savn_core::Product;
use tracing::{debug, info};

use super::persist_inventory_change;
use crate::error::ApiError;
use crate::state::{DbState, InventoryState};

/// Lists all products in insertion order.
pub fn list_products(inventory: &InventoryState) -> Vec<Product> {
    inventory.with_store(|s| s.products().to_vec())
}

/// Gets a single product by id.
///
/// ## Returns
/// The product if found, or `NOT_FOUND`
pub fn get_product(inventory: &InventoryState, id: &str) -> Result<Product, ApiError> {
    debug!(id = %id, "get_product command");
    inventory
        .with_store(|s| s.get_product(id).cloned())
        .ok_or_else(|| ApiError::not_found("Product", id))
}

/// Adds a product from the add screen.
///
/// ## Validation
/// - Name non-empty after trim, at most 200 characters
/// - Quantity, price, cost finite and ≥ 0 (quantity is floored)
pub async fn add_product(
    db: &DbState,
    inventory: &InventoryState,
    input: NewProduct,
) -> Result<Product, ApiError> {
    debug!(name = %input.name, "add_product command");

    let product = persist_inventory_change(db, inventory, |s| s.add_product(input)).await?;

    info!(id = %product.id, name = %product.name, quantity = product.quantity, "Product added");
    Ok(product)
}

/// Edits name, price or cost. Quantity only changes through stock commands.
pub async fn update_product(
    db: &DbState,
    inventory: &InventoryState,
    id: &str,
    patch: ProductPatch,
) -> Result<Product, ApiError> {
    debug!(id = %id, "update_product command");

    if patch.is_empty() {
        return get_product(inventory, id);
    }

    let product = persist_inventory_change(db, inventory, |s| s.update_product(id, patch)).await?;

    info!(id = %product.id, "Product updated");
    Ok(product)
}

/// Removes a product. Its transactions stay in the history.
pub async fn remove_product(
    db: &DbState,
    inventory: &InventoryState,
    id: &str,
) -> Result<Product, ApiError> {
    debug!(id = %id, "remove_product command");

    let removed = persist_inventory_change(db, inventory, |s| s.remove_product(id)).await?;

    info!(id = %removed.id, name = %removed.name, "Product removed");
    Ok(removed)
}
