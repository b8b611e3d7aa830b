use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::customer::{CustomerField, CustomerRecord};

/// Per-field error messages; a field is present only while it fails validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<CustomerField, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: CustomerField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: CustomerField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: CustomerField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear_field(&mut self, field: CustomerField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn fields(&self) -> impl Iterator<Item = CustomerField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CustomerField, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

pub fn required_field_message(field: CustomerField) -> String {
    format!("Please enter the {} field", field.display_name())
}

/// Checks presence of every required field. Whitespace counts as present.
pub fn validate(record: &CustomerRecord) -> FormErrors {
    let mut errors = FormErrors::new();
    for field in CustomerField::ALL {
        if record.get(field).is_empty() {
            errors.insert(field, required_field_message(field));
        }
    }
    errors
}
