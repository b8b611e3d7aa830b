use tracing::{debug, info, warn};

use crate::domain::customer::{CustomerField, CustomerRecord};
use crate::errors::{FormError, LoadError};
use crate::form::engine::{transition, ModeTransitionError};
use crate::form::states::{FormEvent, FormMode, TransitionOutcome};
use crate::storage::RecordStore;
use crate::validation::{validate, FormErrors};

/// Owns the draft record, the edit mode and the per-field errors.
///
/// Every operation runs to completion synchronously; the draft only reaches
/// the store through [`FormController::save`].
#[derive(Debug)]
pub struct FormController<S> {
    store: S,
    draft: CustomerRecord,
    mode: FormMode,
    errors: FormErrors,
}

impl<S> FormController<S>
where
    S: RecordStore,
{
    /// Adopts the stored record, or a blank one when nothing usable is stored.
    /// Always starts read-only.
    pub fn initialize(store: S) -> Self {
        let draft = match store.load() {
            Ok(record) => {
                info!(
                    event_name = "form.initialized",
                    source = "store",
                    "adopted stored customer record"
                );
                record
            }
            Err(LoadError::NotFound { key }) => {
                debug!(
                    event_name = "form.initialized",
                    source = "blank",
                    key = %key,
                    "no stored customer record, starting blank"
                );
                CustomerRecord::blank()
            }
            Err(error) => {
                warn!(
                    event_name = "form.load.fallback",
                    error = %error,
                    "stored customer record is unusable, starting blank"
                );
                CustomerRecord::blank()
            }
        };

        Self { store, draft, mode: FormMode::ReadOnly, errors: FormErrors::new() }
    }

    pub fn draft(&self) -> &CustomerRecord {
        &self.draft
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error_for(&self, field: CustomerField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn set_field(
        &mut self,
        field: CustomerField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        if !self.mode.is_editable() {
            debug!(event_name = "form.field.rejected", field = %field, "form is read-only");
            return Err(FormError::ReadOnly { field });
        }

        self.draft.set(field, value.into());
        self.errors.clear_field(field);
        Ok(())
    }

    pub fn begin_edit(&mut self) -> TransitionOutcome {
        let outcome = TransitionOutcome {
            from: self.mode,
            to: FormMode::Editable,
            event: FormEvent::BeginEdit,
        };
        self.mode = outcome.to;
        outcome
    }

    /// Validates the draft and, when complete, persists it and returns to
    /// read-only. A rejected save leaves the form editable with `errors`
    /// populated; a failed store write leaves it editable with the draft intact.
    pub fn save(&mut self) -> Result<TransitionOutcome, FormError> {
        if !self.mode.is_editable() {
            return Err(ModeTransitionError::InvalidTransition {
                state: self.mode,
                event: FormEvent::SaveAccepted,
            }
            .into());
        }

        let errors = validate(&self.draft);
        if !errors.is_empty() {
            let outcome = transition(self.mode, FormEvent::SaveRejected)?;
            self.mode = outcome.to;
            self.errors = errors.clone();
            let missing: Vec<&str> = errors.fields().map(CustomerField::key).collect();
            info!(
                event_name = "form.save.rejected",
                missing = ?missing,
                "customer record is incomplete"
            );
            return Err(FormError::Validation(errors));
        }

        self.errors.clear();
        if let Err(error) = self.store.save(&self.draft) {
            warn!(
                event_name = "form.save.failed",
                error = %error,
                "customer record was not persisted"
            );
            return Err(error.into());
        }

        let outcome = transition(self.mode, FormEvent::SaveAccepted)?;
        self.mode = outcome.to;
        info!(event_name = "form.save.accepted", "customer record persisted");
        Ok(outcome)
    }
}
