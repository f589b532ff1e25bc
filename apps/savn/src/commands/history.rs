//! # Summary and History Commands
//!
//! Read-only views over the ledger: the dashboard totals and the history
//! list (newest first, localized row text).

use savn_core::i18n::describe_transaction;
use savn_core::{Money, Product, Transaction, DEFAULT_LOW_STOCK_THRESHOLD};
use serde::Serialize;
use tracing::debug;

use crate::state::{InventoryState, SettingsState};

/// Dashboard totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub revenue: Money,
    pub expenses: Money,
    pub profit: Money,
    pub product_count: usize,
    pub total_units: i64,
    /// Quantity × selling price over all products.
    pub stock_value: Money,
    /// Products at or below the low-stock threshold.
    pub low_stock: Vec<Product>,
    pub can_undo: bool,
}

/// One row of the history screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub transaction: Transaction,
    /// e.g. "Sold 2 × Widget for $10.00"
    pub description: String,
}

/// Revenue, expenses and profit folded from the ledger, plus stock totals.
pub fn get_summary(inventory: &InventoryState) -> InventorySummary {
    inventory.with_store(|s| {
        let totals = s.summary();
        InventorySummary {
            revenue: totals.revenue,
            expenses: totals.expenses,
            profit: totals.profit,
            product_count: s.products().len(),
            total_units: s.total_units(),
            stock_value: s.stock_value(),
            low_stock: s
                .low_stock(DEFAULT_LOW_STOCK_THRESHOLD)
                .into_iter()
                .cloned()
                .collect(),
            can_undo: s.can_undo(),
        }
    })
}

/// The full history, newest first, described in the current language and
/// currency.
pub fn get_history(inventory: &InventoryState, settings: &SettingsState) -> Vec<HistoryEntry> {
    let current = settings.get();

    let entries: Vec<HistoryEntry> = inventory.with_store(|s| {
        s.ledger()
            .recent_first()
            .map(|tx| HistoryEntry {
                description: describe_transaction(current.language, current.currency, tx),
                transaction: tx.clone(),
            })
            .collect()
    });

    debug!(count = entries.len(), "get_history command");
    entries
}
