//! Text rendering of the customer form.
//!
//! The form shows each field with its current draft value (or placeholder),
//! the allowed options for choice fields, the field's validation error when
//! present, the single mode-dependent action, and a read-only summary.

use custform_core::domain::customer::{CustomerField, CustomerRecord, InputKind};
use custform_core::form::FormController;
use custform_core::storage::RecordStore;

const LABEL_WIDTH: usize = 12;

pub fn placeholder(field: CustomerField) -> &'static str {
    match field {
        CustomerField::Name => "Enter Name",
        CustomerField::EmployeeId => "Enter Employee ID",
        CustomerField::City => "▼ Select City ▼",
        CustomerField::Gender => "Select Gender",
    }
}

pub fn options_hint(field: CustomerField) -> Option<String> {
    match field.input_kind() {
        InputKind::Select(options) | InputKind::ExclusiveChoice(options) => {
            Some(options.join(" | "))
        }
        InputKind::Text | InputKind::NumericText => None,
    }
}

pub fn render_form<S>(form: &FormController<S>) -> String
where
    S: RecordStore,
{
    let mode = if form.mode().is_editable() { "editing" } else { "read-only" };
    let mut lines = vec![format!("Customer Record [{mode}]")];

    for field in CustomerField::FORM_ORDER {
        let value = form.draft().get(field);
        let shown =
            if value.is_empty() { format!("<{}>", placeholder(field)) } else { value.to_string() };
        let label = format!("{}:", field.label());
        let mut line = format!("  {label:<LABEL_WIDTH$} {shown}");
        if form.mode().is_editable() {
            if let Some(options) = options_hint(field) {
                line.push_str(&format!("  ({options})"));
            }
        }
        lines.push(line);

        if let Some(message) = form.error_for(field) {
            lines.push(format!("  {:LABEL_WIDTH$} ! {message}", ""));
        }
    }

    lines.push(format!("[ {} ]", form.mode().action_label()));
    lines.push(String::new());
    lines.push(render_summary(form.draft()));
    lines.join("\n")
}

pub fn render_summary(record: &CustomerRecord) -> String {
    let mut lines = vec!["Saved Data Display:".to_string()];
    for field in CustomerField::FORM_ORDER {
        lines.push(format!("{}: {}", field.label(), record.get(field)));
    }
    lines.join("\n")
}
