//! Persisting an inventory store and restoring it from a fresh handle.

use savn_core::inventory::{InventoryStore, NewProduct};
use savn_core::Money;
use savn_db::{Database, DbConfig};

#[tokio::test]
async fn test_save_inventory_then_restore() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();

    let mut store = InventoryStore::new();
    let widget = store
        .add_product(NewProduct::new("Widget", 10.0, 5.0, 2.0))
        .unwrap();
    store.sell_one(&widget.id).unwrap();
    store.restock_one(&widget.id).unwrap();
    store.undo_last_action().unwrap();

    db.save_inventory(store.products(), store.transactions())
        .await
        .unwrap();

    let restored = InventoryStore::from_parts(
        db.products().load().await.unwrap(),
        db.transactions().load().await.unwrap(),
    );

    assert_eq!(restored.products(), store.products());
    assert_eq!(restored.transactions(), store.transactions());
    assert_eq!(restored.summary().revenue, Money::from_cents(500));
    assert_eq!(restored.summary().expenses, Money::zero());
    assert!(!restored.can_undo());
}

#[tokio::test]
async fn test_file_database_survives_reopen() {
    let path = std::env::temp_dir().join(format!("savn-test-{}.db", uuid::Uuid::new_v4()));

    {
        let db = Database::new(DbConfig::new(path.clone())).await.unwrap();
        let mut store = InventoryStore::new();
        store.add_product(NewProduct::new("Tea", 4.0, 1.0, 0.5)).unwrap();
        db.save_inventory(store.products(), store.transactions())
            .await
            .unwrap();
        db.close().await;
    }

    let db = Database::new(DbConfig::new(path.clone())).await.unwrap();
    let products = db.products().load().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Tea");
    db.close().await;

    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{}", path.display(), suffix));
    }
}
