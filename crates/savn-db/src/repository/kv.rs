//! # Key-Value Repository
//!
//! Raw access to the `kv_store` table. Values are opaque text; the typed
//! repositories store JSON through [`KeyValueRepository::get_json`] and
//! [`KeyValueRepository::put_json`].

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

const UPSERT_SQL: &str = r#"
    INSERT INTO kv_store (key, value, updated_at)
    VALUES (?1, ?2, ?3)
    ON CONFLICT(key) DO UPDATE SET
        value = excluded.value,
        updated_at = excluded.updated_at
"#;

/// Repository for raw key-value storage.
///
/// ## Usage
/// ```rust,ignore
/// let kv = db.kv();
/// kv.put("greeting", "hello").await?;
/// assert_eq!(kv.get("greeting").await?, Some("hello".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct KeyValueRepository {
    pool: SqlitePool,
}

impl KeyValueRepository {
    pub fn new(pool: SqlitePool) -> Self {
        KeyValueRepository { pool }
    }

    /// Gets the value under `key`, if any.
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> = sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        debug!(key = %key, found = value.is_some(), "Loaded value");
        Ok(value)
    }

    /// Inserts or replaces the value under `key`.
    pub async fn put(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, bytes = value.len(), "Storing value");

        sqlx::query(UPSERT_SQL)
            .bind(key)
            .bind(value)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Inserts or replaces several values atomically.
    pub async fn put_many(&self, entries: &[(&str, &str)]) -> DbResult<()> {
        let now = Utc::now().to_rfc3339();
        let mut tx = self.pool.begin().await?;

        for (key, value) in entries {
            debug!(key = %key, bytes = value.len(), "Storing value");

            sqlx::query(UPSERT_SQL)
                .bind(*key)
                .bind(*value)
                .bind(&now)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Deletes `key`. Returns whether anything was removed.
    pub async fn delete(&self, key: &str) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        debug!(key = %key, removed = result.rows_affected(), "Deleted value");
        Ok(result.rows_affected() > 0)
    }

    /// Deletes several keys atomically. Returns the number of rows removed.
    ///
    /// Either every key is gone afterwards or none was touched.
    pub async fn delete_many(&self, keys: &[&str]) -> DbResult<u64> {
        let mut tx = self.pool.begin().await?;
        let mut removed = 0;

        for key in keys {
            let result = sqlx::query("DELETE FROM kv_store WHERE key = ?1")
                .bind(*key)
                .execute(&mut *tx)
                .await?;
            removed += result.rows_affected();
        }

        tx.commit().await?;

        debug!(keys = keys.len(), removed, "Deleted values");
        Ok(removed)
    }

    /// Lists all keys in ascending order.
    pub async fn keys(&self) -> DbResult<Vec<String>> {
        let keys: Vec<String> = sqlx::query_scalar("SELECT key FROM kv_store ORDER BY key")
            .fetch_all(&self.pool)
            .await?;

        Ok(keys)
    }

    /// Gets and decodes a JSON value.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> DbResult<Option<T>> {
        match self.get(key).await? {
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|e| DbError::serialization(key, e)),
            None => Ok(None),
        }
    }

    /// Encodes and stores a JSON value.
    pub async fn put_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> DbResult<()> {
        let text = serde_json::to_string(value).map_err(|e| DbError::serialization(key, e))?;
        self.put(key, &text).await
    }
}
