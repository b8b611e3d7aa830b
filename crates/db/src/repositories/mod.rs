use async_trait::async_trait;
use thiserror::Error;

pub mod local_storage;

pub use local_storage::SqlLocalStorageRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("async runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

#[async_trait]
pub trait LocalStorageRepository: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, RepositoryError>;
    async fn set_item(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
}
