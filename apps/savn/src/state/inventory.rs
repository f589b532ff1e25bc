//! # Inventory State
//!
//! Owns the in-memory [`InventoryStore`] (products, ledger, undo buffer).
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Mutation                                   │
//! │                                                                         │
//! │  command ──► write_gate().await      (one mutation at a time)          │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │              with_store_mut(op)      (std Mutex, never held across     │
//! │                 │                     an await)                         │
//! │                 ▼                                                       │
//! │              snapshot() ──► db.save_inventory(..).await                │
//! │                 │                                                       │
//! │          failed?└──► restore(previous)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reads only take the std mutex, so list/summary calls never wait on a
//! pending database write.

use std::sync::{Arc, Mutex, PoisonError};

use savn_core::{InventoryStore, Product, Transaction};
use tokio::sync::{Mutex as AsyncMutex, MutexGuard as AsyncMutexGuard};

/// Shared inventory state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<InventoryStore>>` for the data and a separate async
/// mutex that serializes mutate-then-persist sequences. Without the gate
/// two commands could persist their snapshots out of order.
#[derive(Debug, Clone)]
pub struct InventoryState {
    store: Arc<Mutex<InventoryStore>>,
    write_gate: Arc<AsyncMutex<()>>,
}

impl InventoryState {
    /// Wraps a store loaded at startup.
    pub fn new(store: InventoryStore) -> Self {
        InventoryState {
            store: Arc::new(Mutex::new(store)),
            write_gate: Arc::new(AsyncMutex::new(())),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let summary = inventory.with_store(|s| s.summary());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InventoryStore) -> R,
    {
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// Callers that persist the result must hold [`Self::write_gate`].
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InventoryStore) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }

    /// Waits for exclusive right to mutate and persist.
    pub async fn write_gate(&self) -> AsyncMutexGuard<'_, ()> {
        self.write_gate.lock().await
    }

    /// Clones the whole store (used to roll back a failed write).
    pub fn checkpoint(&self) -> InventoryStore {
        self.with_store(InventoryStore::clone)
    }

    /// Puts a checkpoint back.
    pub fn restore(&self, store: InventoryStore) {
        self.with_store_mut(|current| *current = store);
    }

    /// Copies out what gets persisted.
    pub fn snapshot(&self) -> (Vec<Product>, Vec<Transaction>) {
        self.with_store(|s| (s.products().to_vec(), s.transactions().to_vec()))
    }
}

impl Default for InventoryState {
    fn default() -> Self {
        Self::new(InventoryStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use savn_core::inventory::NewProduct;

    #[test]
    fn test_checkpoint_restore() {
        let state = InventoryState::default();
        let before = state.checkpoint();

        state
            .with_store_mut(|s| s.add_product(NewProduct::new("Widget", 3.0, 1.0, 0.5)))
            .unwrap();
        assert_eq!(state.with_store(|s| s.products().len()), 1);

        state.restore(before);
        assert!(state.with_store(|s| s.products().is_empty()));
    }

    #[test]
    fn test_clones_share_store() {
        let a = InventoryState::default();
        let b = a.clone();

        a.with_store_mut(|s| s.add_product(NewProduct::new("Widget", 1.0, 1.0, 1.0)))
            .unwrap();

        let (products, transactions) = b.snapshot();
        assert_eq!(products.len(), 1);
        assert!(transactions.is_empty());
    }
}
