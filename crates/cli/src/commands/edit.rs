use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use custform_core::domain::customer::CustomerField;
use custform_core::errors::FormError;
use custform_core::form::{FormController, FormMode};
use custform_core::storage::RecordStore;

use crate::commands::{open_form, CommandResult};
use crate::view;

const HELP: &str = "commands:
  show                  redraw the form
  edit                  make the form editable
  set <field> <value>   change a field (name, employeeId, city, gender)
  clear <field>         empty a field
  save                  validate and persist the record
  action                press the form's Edit/Save button
  help                  show this help
  quit                  leave the session";

#[derive(Clone, Debug, PartialEq, Eq)]
enum SessionCommand {
    Show,
    Edit,
    Set(CustomerField, String),
    Save,
    Action,
    Help,
    Quit,
}

impl SessionCommand {
    fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let command = match verb.to_ascii_lowercase().as_str() {
            "show" => Self::Show,
            "edit" => Self::Edit,
            "save" => Self::Save,
            "action" => Self::Action,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err("usage: set <field> <value>".to_string());
                }
                Self::Set(parse_field(field)?, value.trim().to_string())
            }
            "clear" => Self::Set(parse_field(rest)?, String::new()),
            other => return Err(format!("unknown command `{other}`; type `help`")),
        };
        Ok(Some(command))
    }
}

fn parse_field(raw: &str) -> Result<CustomerField, String> {
    raw.parse::<CustomerField>().map_err(|error| error.to_string())
}

pub fn run() -> CommandResult {
    let (_config, mut form) = match open_form("edit") {
        Ok(opened) => opened,
        Err(result) => return result,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_session(&mut form, stdin.lock(), stdout.lock()) {
        Ok(()) => CommandResult::success("edit", "edit session closed"),
        Err(error) => CommandResult::failure("edit", "io", format!("{error:#}"), 1),
    }
}

/// Runs a line-oriented edit session until `quit` or end of input.
pub fn run_session<S, R, W>(form: &mut FormController<S>, input: R, mut output: W) -> Result<()>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", view::render_form(form)).context("failed to write form")?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line = line.context("failed to read session input")?;
        match SessionCommand::parse(&line) {
            Ok(None) => {}
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(SessionCommand::Help)) => {
                writeln!(output, "{HELP}").context("failed to write help")?;
            }
            Ok(Some(command)) => {
                let message = apply(form, command);
                if !message.is_empty() {
                    writeln!(output, "{message}").context("failed to write message")?;
                }
                writeln!(output, "{}", view::render_form(form)).context("failed to write form")?;
            }
            Err(message) => {
                writeln!(output, "{message}").context("failed to write message")?;
            }
        }
        prompt(&mut output)?;
    }

    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> Result<()> {
    write!(output, "> ").context("failed to write prompt")?;
    output.flush().context("failed to flush output")
}

fn apply<S>(form: &mut FormController<S>, command: SessionCommand) -> String
where
    S: RecordStore,
{
    match command {
        SessionCommand::Show => String::new(),
        SessionCommand::Edit => {
            form.begin_edit();
            "editing".to_string()
        }
        SessionCommand::Action => match form.mode() {
            FormMode::ReadOnly => apply(form, SessionCommand::Edit),
            FormMode::Editable => apply(form, SessionCommand::Save),
        },
        SessionCommand::Set(field, value) => {
            if !field.accepts(&value) {
                let expected =
                    view::options_hint(field).unwrap_or_else(|| "digits only".to_string());
                return format!("`{value}` is not a valid {} (expected {expected})", field.label());
            }
            match form.set_field(field, value) {
                Ok(()) => format!("{} updated", field.label()),
                Err(FormError::ReadOnly { .. }) => {
                    "the form is read-only; type `edit` first".to_string()
                }
                Err(error) => error.to_string(),
            }
        }
        SessionCommand::Save => match form.save() {
            Ok(_) => "saved".to_string(),
            Err(FormError::Validation(errors)) => {
                format!("save rejected: {} required field(s) missing", errors.len())
            }
            Err(FormError::Transition(_)) => {
                "nothing to save; type `edit` to change the record".to_string()
            }
            Err(error) => format!("save failed: {error}"),
        },
        SessionCommand::Help | SessionCommand::Quit => String::new(),
    }
}
