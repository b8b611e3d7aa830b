pub mod connection;
pub mod migrations;
pub mod repositories;
pub mod store;

pub use connection::{connect, connect_with_settings, DbPool};
pub use repositories::{LocalStorageRepository, RepositoryError, SqlLocalStorageRepository};
pub use store::{open_record_store, ConfiguredStore, SqliteKeyValueStore};
