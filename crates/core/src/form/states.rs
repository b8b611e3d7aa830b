use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    #[default]
    ReadOnly,
    Editable,
}

impl FormMode {
    pub fn is_editable(self) -> bool {
        matches!(self, Self::Editable)
    }

    /// Label of the single action control offered in this mode.
    pub fn action_label(self) -> &'static str {
        match self {
            Self::ReadOnly => "Edit",
            Self::Editable => "Save",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormEvent {
    BeginEdit,
    SaveAccepted,
    SaveRejected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionOutcome {
    pub from: FormMode,
    pub to: FormMode,
    pub event: FormEvent,
}
