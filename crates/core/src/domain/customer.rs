use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::DomainError;

pub const CITY_OPTIONS: [&str; 3] = ["New York", "London", "Tokyo"];
pub const GENDER_OPTIONS: [&str; 2] = ["Male", "Female"];

/// The single customer record edited by the form.
///
/// Every field is a string on the wire, `employeeId` included. Missing or
/// `null` keys in stored data deserialize to empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub employee_id: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub city: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub gender: String,
}

impl CustomerRecord {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn get(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::Name => &self.name,
            CustomerField::EmployeeId => &self.employee_id,
            CustomerField::City => &self.city,
            CustomerField::Gender => &self.gender,
        }
    }

    pub fn set(&mut self, field: CustomerField, value: String) {
        let slot = match field {
            CustomerField::Name => &mut self.name,
            CustomerField::EmployeeId => &mut self.employee_id,
            CustomerField::City => &mut self.city,
            CustomerField::Gender => &mut self.gender,
        };
        *slot = value;
    }

    pub fn is_blank(&self) -> bool {
        CustomerField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CustomerField {
    Name,
    EmployeeId,
    City,
    Gender,
}

/// How the presentation layer offers a field for input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    NumericText,
    Select(&'static [&'static str]),
    ExclusiveChoice(&'static [&'static str]),
}

impl CustomerField {
    /// Required fields in the order the validator checks them.
    pub const ALL: [Self; 4] = [Self::Name, Self::City, Self::EmployeeId, Self::Gender];

    /// Fields in the order the form displays them.
    pub const FORM_ORDER: [Self; 4] = [Self::Name, Self::EmployeeId, Self::City, Self::Gender];

    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::EmployeeId => "employeeId",
            Self::City => "city",
            Self::Gender => "gender",
        }
    }

    /// Name used inside validation messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::EmployeeId => "Employee",
            other => other.key(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::EmployeeId => "Employee ID",
            Self::City => "City",
            Self::Gender => "Gender",
        }
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            Self::Name => InputKind::Text,
            Self::EmployeeId => InputKind::NumericText,
            Self::City => InputKind::Select(&CITY_OPTIONS),
            Self::Gender => InputKind::ExclusiveChoice(&GENDER_OPTIONS),
        }
    }

    /// Whether the field's input affordance can produce `value`.
    ///
    /// The empty value is always reachable (cleared input, unselected option).
    pub fn accepts(self, value: &str) -> bool {
        if value.is_empty() {
            return true;
        }

        match self.input_kind() {
            InputKind::Text => true,
            InputKind::NumericText => value.chars().all(|ch| ch.is_ascii_digit()),
            InputKind::Select(options) | InputKind::ExclusiveChoice(options) => {
                options.contains(&value)
            }
        }
    }
}

impl fmt::Display for CustomerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CustomerField {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "name" => Ok(Self::Name),
            "employeeId" | "employee_id" | "employee-id" => Ok(Self::EmployeeId),
            "city" => Ok(Self::City),
            "gender" => Ok(Self::Gender),
            other => Err(DomainError::UnknownField(other.to_string())),
        }
    }
}
