//! # Transaction Repository
//!
//! The ledger, stored as one JSON array under `"transactions"`, oldest
//! entry first.

use savn_core::Transaction;
use tracing::debug;

use super::kv::KeyValueRepository;
use super::TRANSACTIONS_KEY;
use crate::error::DbResult;

/// Repository for the persisted transaction ledger.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    kv: KeyValueRepository,
}

impl TransactionRepository {
    pub fn new(kv: KeyValueRepository) -> Self {
        TransactionRepository { kv }
    }

    /// Loads the ledger. A missing key loads as an empty ledger.
    pub async fn load(&self) -> DbResult<Vec<Transaction>> {
        let transactions: Vec<Transaction> =
            self.kv.get_json(TRANSACTIONS_KEY).await?.unwrap_or_default();

        debug!(count = transactions.len(), "Loaded transactions");
        Ok(transactions)
    }

    /// Replaces the stored ledger.
    pub async fn save(&self, transactions: &[Transaction]) -> DbResult<()> {
        debug!(count = transactions.len(), "Saving transactions");
        self.kv.put_json(TRANSACTIONS_KEY, transactions).await
    }

    /// Removes the stored ledger.
    pub async fn clear(&self) -> DbResult<()> {
        debug!("Clearing transactions");
        self.kv.delete(TRANSACTIONS_KEY).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig};
    use chrono::Utc;
    use savn_core::{Transaction, TransactionKind};

    fn sale(id: &str, reverses: Option<&str>) -> Transaction {
        Transaction {
            id: id.to_string(),
            kind: TransactionKind::Sale,
            product_id: "p1".to_string(),
            product_name: "Widget".to_string(),
            quantity_delta: if reverses.is_some() { 1 } else { -1 },
            amount_cents: if reverses.is_some() { -500 } else { 500 },
            reverses: reverses.map(str::to_string),
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_save_load_roundtrip() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let ledger = vec![sale("t1", None), sale("t2", Some("t1"))];

        db.transactions().save(&ledger).await.unwrap();
        assert_eq!(db.transactions().load().await.unwrap(), ledger);

        db.transactions().clear().await.unwrap();
        assert!(db.transactions().load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_loads_entries_without_reverses_field() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let json = r#"[{
            "id": "t1",
            "kind": "restock",
            "product_id": "p1",
            "product_name": "Tea",
            "quantity_delta": 3,
            "amount_cents": 600,
            "timestamp": "2024-10-01T08:00:00Z"
        }]"#;
        db.kv().put("transactions", json).await.unwrap();

        let loaded = db.transactions().load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].kind, TransactionKind::Restock);
        assert_eq!(loaded[0].reverses, None);
    }
}
