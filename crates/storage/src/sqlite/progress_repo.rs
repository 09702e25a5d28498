use async_trait::async_trait;
use sqlx::Row;

use crate::repository::{ProgressKey, ProgressStore, StorageError};

use super::SqliteRepository;

#[async_trait]
impl ProgressStore for SqliteRepository {
    async fn get_progress(&self, key: &ProgressKey) -> Result<Option<String>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT value
            FROM progress_records
            WHERE key = ?1
            ",
        )
        .bind(key.storage_key())
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            tracing::debug!(%key, "no progress record");
            return Ok(None);
        };

        let value: String = row
            .try_get("value")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(value))
    }

    async fn put_progress(&self, key: &ProgressKey, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO progress_records (key, value, updated_at)
            VALUES (?1, ?2, CURRENT_TIMESTAMP)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(key.storage_key())
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        tracing::debug!(%key, "stored progress record");
        Ok(())
    }

    async fn remove_progress(&self, key: &ProgressKey) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM progress_records WHERE key = ?1")
            .bind(key.storage_key())
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }
}
