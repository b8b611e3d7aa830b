use thiserror::Error;

use crate::domain::customer::CustomerField;
use crate::form::ModeTransitionError;
use crate::validation::FormErrors;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown customer field `{0}` (expected name|employeeId|city|gender)")]
    UnknownField(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),
    #[error("could not encode record for key `{key}`: {message}")]
    Encode { key: String, message: String },
}

/// Why a stored record could not be adopted.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no record stored under `{key}`")]
    NotFound { key: String },
    #[error("stored record under `{key}` is malformed: {source}")]
    Parse { key: String, source: serde_json::Error },
    #[error(transparent)]
    Backend(#[from] StoreError),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("field `{field}` cannot be changed while the form is read-only")]
    ReadOnly { field: CustomerField },
    #[error(transparent)]
    Transition(#[from] ModeTransitionError),
    #[error("save rejected: {} required field(s) missing", .0.len())]
    Validation(FormErrors),
    #[error("persistence failure: {0}")]
    Store(#[from] StoreError),
}

impl FormError {
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::ReadOnly { .. } | Self::Transition(_) => "read_only",
            Self::Validation(_) => "validation",
            Self::Store(_) => "storage",
        }
    }
}
