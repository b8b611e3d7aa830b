use thiserror::Error;

use crate::form::states::{FormEvent, FormMode, TransitionOutcome};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ModeTransitionError {
    #[error("invalid transition from {state:?} using event {event:?}")]
    InvalidTransition { state: FormMode, event: FormEvent },
}

pub fn transition(
    current: FormMode,
    event: FormEvent,
) -> Result<TransitionOutcome, ModeTransitionError> {
    use FormEvent::{BeginEdit, SaveAccepted, SaveRejected};
    use FormMode::{Editable, ReadOnly};

    let to = match (current, event) {
        (_, BeginEdit) => Editable,
        (Editable, SaveAccepted) => ReadOnly,
        (Editable, SaveRejected) => Editable,
        (ReadOnly, SaveAccepted | SaveRejected) => {
            return Err(ModeTransitionError::InvalidTransition { state: current, event });
        }
    };

    Ok(TransitionOutcome { from: current, to, event })
}

#[cfg(test)]
mod tests {
    use super::{transition, ModeTransitionError};
    use crate::form::states::{FormEvent, FormMode};

    #[test]
    fn begin_edit_is_unconditional() {
        for mode in [FormMode::ReadOnly, FormMode::Editable] {
            let outcome = transition(mode, FormEvent::BeginEdit).expect("begin edit");
            assert_eq!(outcome.from, mode);
            assert_eq!(outcome.to, FormMode::Editable);
        }
    }

    #[test]
    fn save_outcomes_from_editable() {
        let accepted = transition(FormMode::Editable, FormEvent::SaveAccepted).expect("accepted");
        assert_eq!(accepted.to, FormMode::ReadOnly);

        let rejected = transition(FormMode::Editable, FormEvent::SaveRejected).expect("rejected");
        assert_eq!(rejected.to, FormMode::Editable);
    }

    #[test]
    fn save_from_read_only_is_rejected() {
        let error = transition(FormMode::ReadOnly, FormEvent::SaveAccepted)
            .expect_err("read-only form cannot be saved");

        assert_eq!(
            error,
            ModeTransitionError::InvalidTransition {
                state: FormMode::ReadOnly,
                event: FormEvent::SaveAccepted
            }
        );
    }

    #[test]
    fn machine_is_reentrant() {
        let events = [
            FormEvent::BeginEdit,
            FormEvent::SaveRejected,
            FormEvent::SaveAccepted,
            FormEvent::BeginEdit,
            FormEvent::SaveAccepted,
        ];

        let mut mode = FormMode::default();
        for event in events {
            mode = transition(mode, event).expect("valid sequence").to;
        }

        assert_eq!(mode, FormMode::ReadOnly);
        assert_eq!(mode.action_label(), "Edit");
        assert_eq!(FormMode::Editable.action_label(), "Save");
    }
}
