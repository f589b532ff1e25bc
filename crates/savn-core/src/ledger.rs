//! # Transaction Ledger
//!
//! Append-only, chronological record of every quantity-affecting action.
//!
//! ## Folding
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Ledger (insertion order = time order)                                  │
//! │                                                                         │
//! │   #1 sale        -1   +500  ──► revenue  += 500                        │
//! │   #2 restock     +1   +200  ──► expenses += 200                        │
//! │   #3 restock     -1   -200  ──► expenses -= 200   (reverses #2)        │
//! │   #4 adjustment  -1      0  ──► no effect                              │
//! │                                                                         │
//! │   summary = { revenue: 500, expenses: 0, profit: 500 }                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries are never edited. Undo appends a compensating entry; only
//! [`Ledger::clear`] (full reset) removes anything.

use crate::types::{LedgerSummary, Transaction, TransactionKind};

/// Append-only sequence of transactions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    entries: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Rebuilds a ledger from persisted entries, keeping their order.
    pub fn from_entries(entries: Vec<Transaction>) -> Self {
        Ledger { entries }
    }

    /// Appends an entry. Always succeeds.
    pub fn record(&mut self, tx: Transaction) {
        self.entries.push(tx);
    }

    /// All entries, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.entries
    }

    /// All entries, newest first (history screen order).
    pub fn recent_first(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter().rev()
    }

    /// Entries recorded against one product, oldest first.
    ///
    /// Works for removed products too: the reference is by id only.
    pub fn for_product<'a>(&'a self, product_id: &'a str) -> impl Iterator<Item = &'a Transaction> {
        self.entries
            .iter()
            .filter(move |tx| tx.product_id == product_id)
    }

    /// Looks up an entry by id.
    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.entries.iter().find(|tx| tx.id == id)
    }

    /// Folds revenue, expenses and profit from the entries.
    pub fn summary(&self) -> LedgerSummary {
        let mut summary = LedgerSummary::default();

        for tx in &self.entries {
            match tx.kind {
                TransactionKind::Sale => summary.revenue += tx.amount(),
                TransactionKind::Restock => summary.expenses += tx.amount(),
                TransactionKind::Adjustment => {}
            }
        }

        summary.profit = summary.revenue - summary.expenses;
        summary
    }

    /// Removes every entry (full reset only).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the ledger, returning the entries for persistence.
    pub fn into_entries(self) -> Vec<Transaction> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use chrono::Utc;

    fn tx(id: &str, kind: TransactionKind, product: &str, delta: i64, cents: i64) -> Transaction {
        Transaction {
            id: id.to_string(),
            kind,
            product_id: product.to_string(),
            product_name: format!("Product {}", product),
            quantity_delta: delta,
            amount_cents: cents,
            reverses: None,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_summary_folds_by_kind() {
        let mut ledger = Ledger::new();
        ledger.record(tx("1", TransactionKind::Sale, "p1", -2, 1000));
        ledger.record(tx("2", TransactionKind::Restock, "p1", 3, 600));
        ledger.record(tx("3", TransactionKind::Adjustment, "p1", -1, 0));

        let summary = ledger.summary();
        assert_eq!(summary.revenue, Money::from_cents(1000));
        assert_eq!(summary.expenses, Money::from_cents(600));
        assert_eq!(summary.profit, Money::from_cents(400));
    }

    #[test]
    fn test_compensating_entry_cancels_out() {
        let mut ledger = Ledger::new();
        ledger.record(tx("1", TransactionKind::Sale, "p1", -1, 500));

        let mut reversal = tx("2", TransactionKind::Sale, "p1", 1, -500);
        reversal.reverses = Some("1".to_string());
        ledger.record(reversal);

        assert_eq!(ledger.summary(), LedgerSummary::default());
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_ordering_and_filters() {
        let mut ledger = Ledger::new();
        ledger.record(tx("1", TransactionKind::Sale, "p1", -1, 500));
        ledger.record(tx("2", TransactionKind::Sale, "p2", -1, 300));
        ledger.record(tx("3", TransactionKind::Restock, "p1", 1, 200));

        let ids: Vec<_> = ledger.recent_first().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);

        let p1: Vec<_> = ledger.for_product("p1").map(|t| t.id.as_str()).collect();
        assert_eq!(p1, vec!["1", "3"]);

        assert!(ledger.get("2").is_some());
        assert!(ledger.get("9").is_none());
    }

    #[test]
    fn test_clear() {
        let mut ledger = Ledger::from_entries(vec![tx("1", TransactionKind::Sale, "p1", -1, 500)]);
        assert!(!ledger.is_empty());

        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.summary().revenue, Money::zero());
    }
}
