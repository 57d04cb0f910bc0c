use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::repository::{SnapshotStore, StorageError, validate_key};

use super::SqliteSnapshotStore;

#[async_trait]
impl SnapshotStore for SqliteSnapshotStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(self.pool())
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let value: String = row
            .try_get("value")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(value))
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        sqlx::query(
            r"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(self.pool())
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    async fn clear(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(key)
            .execute(self.pool())
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }
}
