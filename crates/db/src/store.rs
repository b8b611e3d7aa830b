use custform_core::config::{StorageBackend, StorageConfig};
use custform_core::errors::StoreError;
use custform_core::storage::{InMemoryKeyValueStore, KeyValueStore, LocalRecordStore};
use tokio::runtime::Runtime;
use tracing::info;

use crate::repositories::{LocalStorageRepository, RepositoryError, SqlLocalStorageRepository};
use crate::{connect_with_settings, migrations};

/// Synchronous key-value store over the `local_storage` table.
///
/// Owns a current-thread runtime and drives every query to completion before
/// returning. Must not be used from inside another tokio runtime.
pub struct SqliteKeyValueStore {
    runtime: Runtime,
    repository: SqlLocalStorageRepository,
}

impl SqliteKeyValueStore {
    /// Connects and applies pending migrations.
    pub fn open(
        database_url: &str,
        max_connections: u32,
        timeout_secs: u64,
    ) -> Result<Self, RepositoryError> {
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        let repository = runtime.block_on(async {
            let pool = connect_with_settings(database_url, max_connections, timeout_secs).await?;
            migrations::run_pending(&pool).await?;
            Ok::<_, RepositoryError>(SqlLocalStorageRepository::new(pool))
        })?;

        info!(
            event_name = "storage.migrations.applied",
            database_url = %database_url,
            "local storage ready"
        );
        Ok(Self { runtime, repository })
    }

    pub fn from_config(config: &StorageConfig) -> Result<Self, RepositoryError> {
        let max_connections = if config.is_in_memory() { 1 } else { config.max_connections };
        Self::open(&config.url, max_connections, config.timeout_secs)
    }

    pub fn updated_at(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.runtime.block_on(self.repository.updated_at(key)).map_err(backend_error)
    }

    pub fn close(self) {
        self.runtime.block_on(self.repository.pool().close());
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.runtime.block_on(self.repository.get_item(key)).map_err(backend_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.runtime.block_on(self.repository.set_item(key, value)).map_err(backend_error)
    }
}

fn backend_error(error: RepositoryError) -> StoreError {
    StoreError::Backend(error.to_string())
}

/// The key-value backend selected by `storage.backend`.
pub enum ConfiguredStore {
    Memory(InMemoryKeyValueStore),
    Sqlite(SqliteKeyValueStore),
}

impl ConfiguredStore {
    pub fn open(config: &StorageConfig) -> Result<Self, RepositoryError> {
        match config.backend {
            StorageBackend::Memory => Ok(Self::Memory(InMemoryKeyValueStore::new())),
            StorageBackend::Sqlite => SqliteKeyValueStore::from_config(config).map(Self::Sqlite),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Sqlite(_) => "sqlite",
        }
    }

    pub fn updated_at(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            Self::Memory(_) => Ok(None),
            Self::Sqlite(store) => store.updated_at(key),
        }
    }
}

impl KeyValueStore for ConfiguredStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            Self::Memory(store) => store.get_item(key),
            Self::Sqlite(store) => store.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            Self::Memory(store) => store.set_item(key, value),
            Self::Sqlite(store) => store.set_item(key, value),
        }
    }
}

/// Opens the configured backend and binds it to the configured record key.
pub fn open_record_store(
    config: &StorageConfig,
) -> Result<LocalRecordStore<ConfiguredStore>, RepositoryError> {
    let backend = ConfiguredStore::open(config)?;
    Ok(LocalRecordStore::with_key(backend, config.key.clone()))
}

#[cfg(test)]
mod tests {
    use custform_core::config::{AppConfig, StorageBackend};
    use custform_core::storage::{KeyValueStore, RecordStore};
    use custform_core::CustomerRecord;
    use tempfile::TempDir;

    use super::{open_record_store, ConfiguredStore, SqliteKeyValueStore};

    fn database_url(dir: &TempDir) -> String {
        format!("sqlite://{}?mode=rwc", dir.path().join("custform.db").display())
    }

    #[test]
    fn values_survive_reopening_the_database() {
        let dir = TempDir::new().expect("tempdir");
        let url = database_url(&dir);

        let store = SqliteKeyValueStore::open(&url, 1, 30).expect("open");
        store.set_item("customerData", r#"{"name":"Ada"}"#).expect("set");
        store.close();

        let reopened = SqliteKeyValueStore::open(&url, 1, 30).expect("reopen");
        assert_eq!(
            reopened.get_item("customerData").expect("get"),
            Some(r#"{"name":"Ada"}"#.to_owned())
        );
        assert!(reopened.updated_at("customerData").expect("updated_at").is_some());
    }

    #[test]
    fn in_memory_url_is_usable_through_one_connection() {
        let mut config = AppConfig::default().storage;
        config.url = "sqlite::memory:".to_string();
        config.max_connections = 8;

        let store = SqliteKeyValueStore::from_config(&config).expect("open in-memory");
        store.set_item("k", "v").expect("set");
        assert_eq!(store.get_item("k").expect("get").as_deref(), Some("v"));
    }

    #[test]
    fn configured_store_follows_backend_setting() {
        let mut config = AppConfig::default().storage;
        config.backend = StorageBackend::Memory;

        let store = ConfiguredStore::open(&config).expect("memory store");
        assert_eq!(store.backend_name(), "memory");
        assert_eq!(store.updated_at("customerData"), Ok(None));
    }

    #[test]
    fn record_store_round_trips_through_sqlite() {
        let dir = TempDir::new().expect("tempdir");
        let mut config = AppConfig::default().storage;
        config.url = database_url(&dir);
        config.key = "customerData.test".to_string();

        let record = CustomerRecord {
            name: "Margaret Hamilton".to_owned(),
            employee_id: "1936".to_owned(),
            city: "New York".to_owned(),
            gender: "Female".to_owned(),
        };

        let store = open_record_store(&config).expect("open record store");
        assert_eq!(store.key(), "customerData.test");
        assert_eq!(store.backend().backend_name(), "sqlite");
        store.save(&record).expect("save");

        let reopened = open_record_store(&config).expect("reopen record store");
        assert_eq!(reopened.load().expect("load"), record);
    }
}
