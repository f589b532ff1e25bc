//! # Inventory Store
//!
//! Products, the transaction ledger and the single-slot undo buffer, owned
//! together so every mutation updates all three consistently.
//!
//! ## Stock Change Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sell_one / restock_one / waste_one / adjust                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  apply_stock_change(id, StockChange { kind, delta })                    │
//! │           │                                                             │
//! │           ├── product missing?        → Err(ProductNotFound)            │
//! │           ├── sign disagrees w/ kind? → Err(WrongDirection)             │
//! │           │                                                             │
//! │           ├── new = max(0, current + delta)                             │
//! │           ├── applied = new - current                                   │
//! │           ├── applied == 0?           → Ok(None), nothing recorded      │
//! │           │                                                             │
//! │           ├── product.quantity = new                                    │
//! │           ├── ledger.record(tx)       (amount from |applied|)           │
//! │           └── undo = { product, prior quantity, tx }                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Undo Policy
//! Only stock changes are undoable. Any other mutation (add, edit, remove,
//! either reset) clears the buffer, and a new stock change replaces it.
//! Undoing appends a compensating entry to the ledger; the original entry
//! stays untouched.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::ledger::Ledger;
use crate::money::Money;
use crate::types::{LedgerSummary, Product, StockChange, Transaction, TransactionKind};
use crate::validation::{validate_amount_input, validate_product_name, validate_quantity_input};

// =============================================================================
// Inputs
// =============================================================================

/// Raw input from the add-product screen.
///
/// Numbers arrive as floats from the form; they are validated and converted
/// (quantity floored, money rounded to cents) by [`InventoryStore::add_product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub unit_cost: f64,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, quantity: f64, unit_price: f64, unit_cost: f64) -> Self {
        NewProduct {
            name: name.into(),
            quantity,
            unit_price,
            unit_cost,
        }
    }
}

/// Partial update from the edit screen. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub unit_price: Option<f64>,
    #[serde(default)]
    pub unit_cost: Option<f64>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.unit_price.is_none() && self.unit_cost.is_none()
    }
}

// =============================================================================
// Undo Buffer
// =============================================================================

/// Everything needed to invert the most recent stock change.
#[derive(Debug, Clone, PartialEq)]
struct UndoEntry {
    product_id: String,
    prior_quantity: i64,
    transaction: Transaction,
}

// =============================================================================
// Inventory Store
// =============================================================================

/// The in-memory inventory: products in insertion order, the ledger, and
/// at most one pending undo.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    products: Vec<Product>,
    ledger: Ledger,
    undo: Option<UndoEntry>,
}

impl InventoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InventoryStore::default()
    }

    /// Rebuilds a store from persisted products and transactions.
    ///
    /// The undo buffer is never persisted, so a restored store starts with
    /// nothing to undo. Negative quantities from a damaged blob are clamped.
    pub fn from_parts(mut products: Vec<Product>, transactions: Vec<Transaction>) -> Self {
        for product in products.iter_mut().filter(|p| p.quantity < 0) {
            warn!(product_id = %product.id, quantity = product.quantity, "Clamping negative stored quantity");
            product.quantity = 0;
        }

        InventoryStore {
            products,
            ledger: Ledger::from_entries(transactions),
            undo: None,
        }
    }

    /// Splits the store into persistable parts.
    pub fn into_parts(self) -> (Vec<Product>, Vec<Transaction>) {
        (self.products, self.ledger.into_entries())
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// All products, in the order they were added.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get_product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// All transactions, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    /// Revenue, expenses and profit folded from the ledger.
    pub fn summary(&self) -> LedgerSummary {
        self.ledger.summary()
    }

    /// Products at or below `threshold` units.
    pub fn low_stock(&self, threshold: i64) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.quantity <= threshold)
            .collect()
    }

    /// Total units on hand across all products.
    pub fn total_units(&self) -> i64 {
        self.products.iter().fold(0i64, |acc, p| acc.saturating_add(p.quantity))
    }

    /// Value of all stock on hand at selling price.
    pub fn stock_value(&self) -> Money {
        self.products.iter().map(Product::stock_value).sum()
    }

    /// Checks whether `undo_last_action` would do anything.
    pub fn can_undo(&self) -> bool {
        self.undo.is_some()
    }

    // -------------------------------------------------------------------------
    // Product CRUD
    // -------------------------------------------------------------------------

    /// Adds a product with a fresh id.
    ///
    /// ## Errors
    /// `ValidationError` for an empty name or a non-finite / negative number.
    pub fn add_product(&mut self, input: NewProduct) -> CoreResult<Product> {
        let name = validate_product_name(&input.name)?;
        let quantity = validate_quantity_input(input.quantity)?;
        let unit_price = validate_amount_input("unit_price", input.unit_price)?;
        let unit_cost = validate_amount_input("unit_cost", input.unit_cost)?;

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name,
            quantity,
            unit_price_cents: unit_price.cents(),
            unit_cost_cents: unit_cost.cents(),
            created_at: now,
            updated_at: now,
        };

        debug!(product_id = %product.id, name = %product.name, quantity, "Product added");

        self.products.push(product.clone());
        self.undo = None;
        Ok(product)
    }

    /// Patches name, price and/or cost. Never touches quantity or the ledger.
    pub fn update_product(&mut self, id: &str, patch: ProductPatch) -> CoreResult<Product> {
        // Validate everything before touching the product
        let name = patch.name.as_deref().map(validate_product_name).transpose()?;
        let unit_price = patch
            .unit_price
            .map(|v| validate_amount_input("unit_price", v))
            .transpose()?;
        let unit_cost = patch
            .unit_cost
            .map(|v| validate_amount_input("unit_cost", v))
            .transpose()?;

        let product = self.product_mut(id)?;

        if let Some(name) = name {
            product.name = name;
        }
        if let Some(price) = unit_price {
            product.unit_price_cents = price.cents();
        }
        if let Some(cost) = unit_cost {
            product.unit_cost_cents = cost.cents();
        }
        product.updated_at = Utc::now();

        let updated = product.clone();
        debug!(product_id = %id, "Product updated");

        self.undo = None;
        Ok(updated)
    }

    /// Removes a product. Its transactions stay in the ledger.
    pub fn remove_product(&mut self, id: &str) -> CoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

        let removed = self.products.remove(index);
        debug!(product_id = %id, name = %removed.name, "Product removed");

        self.undo = None;
        Ok(removed)
    }

    /// Clears all products. The ledger is kept.
    pub fn reset_products(&mut self) {
        debug!(count = self.products.len(), "Resetting products");
        self.products.clear();
        self.undo = None;
    }

    /// Clears the ledger. Products are kept.
    pub fn reset_transactions(&mut self) {
        debug!(count = self.ledger.len(), "Resetting transactions");
        self.ledger.clear();
        self.undo = None;
    }

    // -------------------------------------------------------------------------
    // Stock Changes
    // -------------------------------------------------------------------------

    /// Applies a quantity change and records it.
    ///
    /// The resulting quantity is clamped at zero. Returns `Ok(None)` when
    /// the clamped change is zero: nothing is recorded and the undo buffer
    /// is left as it was.
    ///
    /// ## Amounts
    /// - Sale: `unit_price × units`, counted as revenue
    /// - Restock: `unit_cost × units`, counted as expenses
    /// - Adjustment: zero
    ///
    /// where `units` is the change actually applied, not the one requested.
    pub fn apply_stock_change(
        &mut self,
        id: &str,
        change: StockChange,
    ) -> CoreResult<Option<Transaction>> {
        check_direction(change)?;

        let product = self.product_mut(id)?;
        let prior_quantity = product.quantity;
        let new_quantity = prior_quantity.saturating_add(change.delta).max(0);
        let applied = new_quantity - prior_quantity;

        if applied == 0 {
            debug!(product_id = %id, kind = %change.kind, "Stock change had no effect");
            return Ok(None);
        }

        let units = applied.abs();
        let amount = match change.kind {
            TransactionKind::Sale => product.unit_price().multiply_quantity(units),
            TransactionKind::Restock => product.unit_cost().multiply_quantity(units),
            TransactionKind::Adjustment => Money::zero(),
        };

        let now = Utc::now();
        product.quantity = new_quantity;
        product.updated_at = now;

        let tx = Transaction {
            id: Uuid::new_v4().to_string(),
            kind: change.kind,
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity_delta: applied,
            amount_cents: amount.cents(),
            reverses: None,
            timestamp: now,
        };

        debug!(
            product_id = %id,
            kind = %change.kind,
            delta = applied,
            quantity = new_quantity,
            amount = %amount,
            "Stock change applied"
        );

        self.ledger.record(tx.clone());
        self.undo = Some(UndoEntry {
            product_id: id.to_string(),
            prior_quantity,
            transaction: tx.clone(),
        });

        Ok(Some(tx))
    }

    /// Sells one unit. No-op at zero stock.
    pub fn sell_one(&mut self, id: &str) -> CoreResult<Option<Transaction>> {
        self.apply_stock_change(id, StockChange::sale(1))
    }

    /// Buys in one unit. Always permitted.
    pub fn restock_one(&mut self, id: &str) -> CoreResult<Option<Transaction>> {
        self.apply_stock_change(id, StockChange::restock(1))
    }

    /// Writes off one unit. Never affects revenue or expenses.
    pub fn waste_one(&mut self, id: &str) -> CoreResult<Option<Transaction>> {
        self.apply_stock_change(id, StockChange::adjustment(-1))
    }

    /// Adjusts by any signed amount (adjust screen).
    pub fn adjust(&mut self, id: &str, delta: i64) -> CoreResult<Option<Transaction>> {
        self.apply_stock_change(id, StockChange::adjustment(delta))
    }

    // -------------------------------------------------------------------------
    // Undo
    // -------------------------------------------------------------------------

    /// Reverts the most recent stock change.
    ///
    /// Restores the prior quantity and appends a compensating transaction
    /// (same kind, negated delta and amount) so the ledger folds back to the
    /// exact prior totals. Returns `Ok(None)` when there is nothing to undo.
    pub fn undo_last_action(&mut self) -> CoreResult<Option<Transaction>> {
        let Some(entry) = self.undo.take() else {
            debug!("Nothing to undo");
            return Ok(None);
        };

        let product = self.product_mut(&entry.product_id)?;
        let now = Utc::now();
        product.quantity = entry.prior_quantity;
        product.updated_at = now;

        let original = entry.transaction;
        let reversal = Transaction {
            id: Uuid::new_v4().to_string(),
            kind: original.kind,
            product_id: original.product_id.clone(),
            product_name: product.name.clone(),
            quantity_delta: -original.quantity_delta,
            amount_cents: -original.amount_cents,
            reverses: Some(original.id.clone()),
            timestamp: now,
        };

        debug!(
            product_id = %entry.product_id,
            reverses = %original.id,
            quantity = entry.prior_quantity,
            "Undid last action"
        );

        self.ledger.record(reversal.clone());
        Ok(Some(reversal))
    }

    fn product_mut(&mut self, id: &str) -> CoreResult<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }
}

fn check_direction(change: StockChange) -> Result<(), ValidationError> {
    let expected = match change.kind {
        TransactionKind::Sale if change.delta >= 0 => "negative",
        TransactionKind::Restock if change.delta <= 0 => "positive",
        _ => return Ok(()),
    };

    Err(ValidationError::WrongDirection {
        kind: change.kind.to_string(),
        expected: expected.to_string(),
        delta: change.delta,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_widget() -> (InventoryStore, String) {
        let mut store = InventoryStore::new();
        let widget = store
            .add_product(NewProduct::new("Widget", 10.0, 5.0, 2.0))
            .unwrap();
        (store, widget.id)
    }

    fn quantity(store: &InventoryStore, id: &str) -> i64 {
        store.get_product(id).unwrap().quantity
    }

    #[test]
    fn test_add_product() {
        let mut store = InventoryStore::new();
        let product = store
            .add_product(NewProduct::new("  Tea  ", 3.7, 1.5, 0.75))
            .unwrap();

        assert_eq!(product.name, "Tea");
        assert_eq!(product.quantity, 3);
        assert_eq!(product.unit_price_cents, 150);
        assert_eq!(product.unit_cost_cents, 75);
        assert_eq!(store.products().len(), 1);
        assert!(store.transactions().is_empty());
    }

    #[test]
    fn test_add_product_rejects_bad_input() {
        let mut store = InventoryStore::new();

        for input in [
            NewProduct::new("", 1.0, 1.0, 1.0),
            NewProduct::new("A", -1.0, 1.0, 1.0),
            NewProduct::new("A", 1.0, f64::NAN, 1.0),
            NewProduct::new("A", 1.0, 1.0, -0.01),
        ] {
            let err = store.add_product(input).unwrap_err();
            assert!(matches!(err, CoreError::Validation(_)));
        }
        assert!(store.products().is_empty());
    }

    #[test]
    fn test_widget_scenario() {
        let (mut store, id) = store_with_widget();

        store.sell_one(&id).unwrap();
        assert_eq!(quantity(&store, &id), 9);
        assert_eq!(store.summary().revenue, Money::from_cents(500));

        store.restock_one(&id).unwrap();
        assert_eq!(quantity(&store, &id), 10);
        assert_eq!(store.summary().expenses, Money::from_cents(200));

        // Reverts the restock, the most recent action
        let reversal = store.undo_last_action().unwrap().unwrap();
        assert_eq!(reversal.kind, TransactionKind::Restock);
        assert_eq!(quantity(&store, &id), 9);
        assert_eq!(store.summary().expenses, Money::zero());
        assert_eq!(store.summary().revenue, Money::from_cents(500));
    }

    #[test]
    fn test_sell_at_zero_is_noop() {
        let mut store = InventoryStore::new();
        let id = store
            .add_product(NewProduct::new("Empty", 0.0, 5.0, 2.0))
            .unwrap()
            .id;

        assert_eq!(store.sell_one(&id).unwrap(), None);
        assert_eq!(quantity(&store, &id), 0);
        assert!(store.transactions().is_empty());
        assert_eq!(store.summary().revenue, Money::zero());
    }

    #[test]
    fn test_noop_change_keeps_undo_buffer() {
        let mut store = InventoryStore::new();
        let id = store
            .add_product(NewProduct::new("One", 1.0, 5.0, 2.0))
            .unwrap()
            .id;

        store.sell_one(&id).unwrap();
        assert_eq!(store.sell_one(&id).unwrap(), None);
        assert!(store.can_undo());

        store.undo_last_action().unwrap();
        assert_eq!(quantity(&store, &id), 1);
    }

    #[test]
    fn test_clamps_and_charges_applied_units() {
        let mut store = InventoryStore::new();
        let id = store
            .add_product(NewProduct::new("Few", 2.0, 5.0, 2.0))
            .unwrap()
            .id;

        let tx = store
            .apply_stock_change(&id, StockChange::sale(5))
            .unwrap()
            .unwrap();

        assert_eq!(tx.quantity_delta, -2);
        assert_eq!(tx.amount_cents, 1000);
        assert_eq!(quantity(&store, &id), 0);

        store.undo_last_action().unwrap();
        assert_eq!(quantity(&store, &id), 2);
        assert_eq!(store.summary().revenue, Money::zero());
    }

    #[test]
    fn test_wrong_direction_rejected() {
        let (mut store, id) = store_with_widget();

        let err = store
            .apply_stock_change(&id, StockChange { kind: TransactionKind::Sale, delta: 1 })
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::WrongDirection { .. })
        ));

        let err = store
            .apply_stock_change(&id, StockChange { kind: TransactionKind::Restock, delta: 0 })
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(quantity(&store, &id), 10);
    }

    #[test]
    fn test_waste_and_adjust_have_no_monetary_effect() {
        let (mut store, id) = store_with_widget();

        store.waste_one(&id).unwrap();
        store.adjust(&id, 4).unwrap();
        store.adjust(&id, -100).unwrap();

        assert_eq!(quantity(&store, &id), 0);
        assert_eq!(store.summary(), LedgerSummary::default());
        assert_eq!(store.transactions().len(), 3);
        assert_eq!(store.transactions()[2].quantity_delta, -13);
    }

    #[test]
    fn test_undo_is_single_use() {
        let (mut store, id) = store_with_widget();

        store.sell_one(&id).unwrap();
        assert!(store.undo_last_action().unwrap().is_some());
        assert!(store.undo_last_action().unwrap().is_none());

        assert_eq!(quantity(&store, &id), 10);
        assert_eq!(store.transactions().len(), 2);
    }

    #[test]
    fn test_undo_on_empty_store() {
        let mut store = InventoryStore::new();
        assert_eq!(store.undo_last_action().unwrap(), None);
        assert!(store.transactions().is_empty());
    }

    #[test]
    fn test_undo_links_reversal() {
        let (mut store, id) = store_with_widget();

        let original = store.sell_one(&id).unwrap().unwrap();
        let reversal = store.undo_last_action().unwrap().unwrap();

        assert_eq!(reversal.reverses.as_deref(), Some(original.id.as_str()));
        assert_eq!(reversal.quantity_delta, 1);
        assert_eq!(reversal.amount_cents, -500);
        assert_eq!(store.ledger().get(&original.id), Some(&original));
    }

    #[test]
    fn test_other_mutations_clear_undo() {
        let (mut store, id) = store_with_widget();

        store.sell_one(&id).unwrap();
        store
            .update_product(&id, ProductPatch { unit_price: Some(6.0), ..Default::default() })
            .unwrap();
        assert!(!store.can_undo());

        store.sell_one(&id).unwrap();
        store.add_product(NewProduct::new("Other", 1.0, 1.0, 1.0)).unwrap();
        assert!(!store.can_undo());

        store.sell_one(&id).unwrap();
        store.reset_transactions();
        assert!(!store.can_undo());
        assert_eq!(store.undo_last_action().unwrap(), None);
    }

    #[test]
    fn test_update_product() {
        let (mut store, id) = store_with_widget();

        let updated = store
            .update_product(
                &id,
                ProductPatch {
                    name: Some("Gadget".to_string()),
                    unit_cost: Some(3.0),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Gadget");
        assert_eq!(updated.unit_price_cents, 500);
        assert_eq!(updated.unit_cost_cents, 300);
        assert_eq!(updated.quantity, 10);
        assert!(store.transactions().is_empty());

        let err = store
            .update_product(&id, ProductPatch { name: Some(" ".to_string()), ..Default::default() })
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(store.get_product(&id).unwrap().name, "Gadget");

        let err = store.update_product("missing", ProductPatch::default()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_remove_keeps_history() {
        let (mut store, id) = store_with_widget();

        store.sell_one(&id).unwrap();
        store.remove_product(&id).unwrap();

        assert!(store.get_product(&id).is_none());
        assert_eq!(store.transactions().len(), 1);
        assert_eq!(store.transactions()[0].product_name, "Widget");
        assert_eq!(store.summary().revenue, Money::from_cents(500));

        assert!(store.sell_one(&id).unwrap_err().is_not_found());
        assert!(store.remove_product(&id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_reset_products_keeps_ledger() {
        let (mut store, id) = store_with_widget();
        store.sell_one(&id).unwrap();

        store.reset_products();
        assert!(store.products().is_empty());
        assert_eq!(store.transactions().len(), 1);
        assert!(!store.can_undo());
    }

    #[test]
    fn test_low_stock_and_totals() {
        let mut store = InventoryStore::new();
        store.add_product(NewProduct::new("A", 2.0, 1.0, 0.5)).unwrap();
        store.add_product(NewProduct::new("B", 10.0, 2.0, 1.0)).unwrap();
        store.add_product(NewProduct::new("C", 3.0, 0.5, 0.1)).unwrap();

        let low: Vec<_> = store.low_stock(3).iter().map(|p| p.name.clone()).collect();
        assert_eq!(low, vec!["A", "C"]);
        assert_eq!(store.total_units(), 15);
        assert_eq!(store.stock_value(), Money::from_cents(200 + 2000 + 150));
    }

    #[test]
    fn test_huge_inputs_saturate_totals() {
        let mut store = InventoryStore::new();
        store.add_product(NewProduct::new("Bulk", 1e17, 1000.0, 1.0)).unwrap();
        store.add_product(NewProduct::new("More", 9.2e18, 1.0, 1.0)).unwrap();
        assert_eq!(store.stock_value(), Money::MAX);
        assert_eq!(store.total_units(), i64::MAX);

        let gold = store.add_product(NewProduct::new("Gold", 5.0, 5e16, 1.0)).unwrap().id;
        store.sell_one(&gold).unwrap();
        store.sell_one(&gold).unwrap();

        let summary = store.summary();
        assert_eq!(summary.revenue, Money::MAX);
        assert_eq!(summary.profit, Money::MAX);
    }

    #[test]
    fn test_from_parts_roundtrip() {
        let (mut store, id) = store_with_widget();
        store.sell_one(&id).unwrap();

        let (mut products, transactions) = store.into_parts();
        products[0].quantity = -4;

        let restored = InventoryStore::from_parts(products, transactions);
        assert_eq!(restored.products()[0].quantity, 0);
        assert_eq!(restored.summary().revenue, Money::from_cents(500));
        assert!(!restored.can_undo());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn change_strategy() -> impl Strategy<Value = StockChange> {
            prop_oneof![
                (1i64..20).prop_map(StockChange::sale),
                (1i64..20).prop_map(StockChange::restock),
                (-20i64..20).prop_map(StockChange::adjustment),
            ]
        }

        proptest! {
            #[test]
            fn add_product_floors_quantity(qty in 0.0f64..10_000.0, price in 0.0f64..1_000.0) {
                let mut store = InventoryStore::new();
                let product = store.add_product(NewProduct::new("P", qty, price, 0.0)).unwrap();

                prop_assert_eq!(store.products().len(), 1);
                prop_assert_eq!(product.quantity, qty.floor() as i64);
                prop_assert!(product.quantity >= 0);
            }

            #[test]
            fn quantity_never_negative(start in 0.0f64..50.0, changes in prop::collection::vec(change_strategy(), 0..40)) {
                let mut store = InventoryStore::new();
                let id = store.add_product(NewProduct::new("P", start, 3.0, 1.0)).unwrap().id;

                for change in changes {
                    store.apply_stock_change(&id, change).unwrap();
                    prop_assert!(store.get_product(&id).unwrap().quantity >= 0);
                }
            }

            #[test]
            fn undo_restores_exact_state(start in 0.0f64..50.0, history in prop::collection::vec(change_strategy(), 0..10), last in change_strategy()) {
                let mut store = InventoryStore::new();
                let id = store.add_product(NewProduct::new("P", start, 3.0, 1.0)).unwrap().id;
                for change in history {
                    store.apply_stock_change(&id, change).unwrap();
                }

                let before_qty = store.get_product(&id).unwrap().quantity;
                let before_summary = store.summary();

                if store.apply_stock_change(&id, last).unwrap().is_some() {
                    store.undo_last_action().unwrap();
                    prop_assert_eq!(store.get_product(&id).unwrap().quantity, before_qty);
                    prop_assert_eq!(store.summary(), before_summary);
                }
            }
        }
    }
}
