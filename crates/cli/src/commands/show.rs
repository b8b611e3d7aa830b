use serde_json::json;

use crate::commands::{open_form, CommandResult, EXIT_STORAGE};
use crate::view;

pub fn run(json_output: bool) -> CommandResult {
    let (config, form) = match open_form("show") {
        Ok(opened) => opened,
        Err(result) => return result,
    };

    if !json_output {
        return CommandResult { exit_code: 0, output: view::render_form(&form) };
    }

    let updated_at = match form.store().backend().updated_at(&config.storage.key) {
        Ok(updated_at) => updated_at,
        Err(error) => {
            return CommandResult::failure(
                "show",
                "storage",
                format!("failed to read local storage: {error}"),
                EXIT_STORAGE,
            );
        }
    };

    CommandResult::success_with(
        "show",
        "loaded customer record",
        Some(json!({
            "key": config.storage.key,
            "mode": form.mode(),
            "action": form.mode().action_label(),
            "record": form.draft(),
            "updated_at": updated_at,
        })),
    )
}
