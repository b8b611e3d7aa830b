use super::{KeyValueStore, RecordStore};
use crate::domain::customer::CustomerRecord;
use crate::errors::{LoadError, StoreError};

pub const DEFAULT_STORAGE_KEY: &str = "customerData";

/// Stores the customer record as a JSON object under one fixed key.
#[derive(Debug)]
pub struct LocalRecordStore<K> {
    backend: K,
    key: String,
}

impl<K> LocalRecordStore<K>
where
    K: KeyValueStore,
{
    pub fn new(backend: K) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: K, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    pub fn into_backend(self) -> K {
        self.backend
    }
}

impl<K> RecordStore for LocalRecordStore<K>
where
    K: KeyValueStore,
{
    fn load(&self) -> Result<CustomerRecord, LoadError> {
        let raw = self
            .backend
            .get_item(&self.key)?
            .ok_or_else(|| LoadError::NotFound { key: self.key.clone() })?;

        serde_json::from_str::<CustomerRecord>(&raw)
            .map_err(|source| LoadError::Parse { key: self.key.clone(), source })
    }

    fn save(&self, record: &CustomerRecord) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(record).map_err(|error| StoreError::Encode {
            key: self.key.clone(),
            message: error.to_string(),
        })?;
        self.backend.set_item(&self.key, &encoded)
    }
}
