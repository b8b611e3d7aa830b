use clap::Args;
use custform_core::config::StorageBackend;
use custform_core::domain::customer::CustomerField;
use custform_core::errors::FormError;
use serde_json::json;

use crate::commands::{
    open_form, CommandResult, EXIT_INVALID_INPUT, EXIT_STORAGE, EXIT_VALIDATION,
};
use crate::view;

#[derive(Clone, Debug, Default, Args)]
pub struct SaveArgs {
    #[arg(long, help = "Customer name")]
    pub name: Option<String>,
    #[arg(long, help = "Numeric employee ID")]
    pub employee_id: Option<String>,
    #[arg(long, help = "One of: New York, London, Tokyo")]
    pub city: Option<String>,
    #[arg(long, help = "One of: Male, Female")]
    pub gender: Option<String>,
}

impl SaveArgs {
    /// Fields given on the command line, in form order.
    pub fn assignments(&self) -> Vec<(CustomerField, &str)> {
        [
            (CustomerField::Name, &self.name),
            (CustomerField::EmployeeId, &self.employee_id),
            (CustomerField::City, &self.city),
            (CustomerField::Gender, &self.gender),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|value| (field, value)))
        .collect()
    }
}

/// Starts from the stored record, applies the given fields, then saves.
pub fn run(args: &SaveArgs) -> CommandResult {
    let (config, mut form) = match open_form("save") {
        Ok(opened) => opened,
        Err(result) => return result,
    };

    form.begin_edit();
    for (field, value) in args.assignments() {
        if !field.accepts(value) {
            let expected = view::options_hint(field).unwrap_or_else(|| "digits only".to_string());
            return CommandResult::failure(
                "save",
                "invalid_input",
                format!("`{value}` is not a valid {} (expected {expected})", field.label()),
                EXIT_INVALID_INPUT,
            );
        }
        if let Err(error) = form.set_field(field, value) {
            return CommandResult::failure(
                "save",
                error.error_class(),
                error.to_string(),
                EXIT_INVALID_INPUT,
            );
        }
    }

    match form.save() {
        Ok(_) => CommandResult::success_with(
            "save",
            saved_message(config.storage.backend),
            Some(json!({ "record": form.draft(), "mode": form.mode() })),
        ),
        Err(FormError::Validation(errors)) => CommandResult::failure_with(
            "save",
            "validation",
            format!("save rejected: {} required field(s) missing", errors.len()),
            EXIT_VALIDATION,
            Some(json!({ "errors": errors, "record": form.draft() })),
        ),
        Err(error) => {
            CommandResult::failure("save", error.error_class(), error.to_string(), EXIT_STORAGE)
        }
    }
}

fn saved_message(backend: StorageBackend) -> &'static str {
    match backend {
        StorageBackend::Sqlite => "customer record saved",
        StorageBackend::Memory => {
            "customer record saved to the memory backend; it is discarded when the process exits"
        }
    }
}
