pub mod config;
pub mod domain;
pub mod errors;
pub mod form;
pub mod storage;
pub mod validation;

pub use domain::customer::{CustomerField, CustomerRecord, InputKind, CITY_OPTIONS, GENDER_OPTIONS};
pub use errors::{DomainError, FormError, LoadError, StoreError};
pub use form::{FormController, FormEvent, FormMode, ModeTransitionError, TransitionOutcome};
pub use storage::{
    InMemoryKeyValueStore, KeyValueStore, LocalRecordStore, RecordStore, DEFAULT_STORAGE_KEY,
};
pub use validation::{validate, FormErrors};
