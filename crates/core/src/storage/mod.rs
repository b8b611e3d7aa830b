use crate::domain::customer::CustomerRecord;
use crate::errors::{LoadError, StoreError};

pub mod local;
pub mod memory;

pub use local::{LocalRecordStore, DEFAULT_STORAGE_KEY};
pub use memory::InMemoryKeyValueStore;

/// A persistent string key-value capability, the shape of browser local storage.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<K> KeyValueStore for &K
where
    K: KeyValueStore + ?Sized,
{
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }
}

/// Loads and saves the single customer record.
///
/// `load` must report a missing entry and a malformed entry as distinct
/// [`LoadError`] variants so callers can fall back to a blank record.
pub trait RecordStore {
    fn load(&self) -> Result<CustomerRecord, LoadError>;
    fn save(&self, record: &CustomerRecord) -> Result<(), StoreError>;
}
