use async_trait::async_trait;
use chrono::Utc;

use super::{LocalStorageRepository, RepositoryError};
use crate::DbPool;

pub struct SqlLocalStorageRepository {
    pool: DbPool,
}

impl SqlLocalStorageRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub async fn updated_at(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let updated_at =
            sqlx::query_scalar::<_, String>("SELECT updated_at FROM local_storage WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;
        Ok(updated_at)
    }
}

#[async_trait]
impl LocalStorageRepository for SqlLocalStorageRepository {
    async fn get_item(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM local_storage WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO local_storage (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
