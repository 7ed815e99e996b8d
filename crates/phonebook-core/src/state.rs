//! Directory state container.
//!
//! All session state lives in [`DirectoryState`] and changes only through
//! [`DirectoryState::dispatch`], one [`Action`] per logical transition.

use tracing::{debug, info};

use crate::loader::LoadError;
use crate::models::{Contact, DraftContact, DraftField, NewContact};
use crate::store::ContactStore;
use crate::validation::{validate, ValidationFailure};

/// Every transition the directory supports
#[derive(Debug)]
pub enum Action {
    LoadStarted,
    LoadSucceeded(Vec<Contact>),
    LoadFailed(LoadError),
    QueryChanged(String),
    DraftChanged { field: DraftField, value: String },
    /// Validate the draft and append it if it passes
    Submit,
    ContactAppended(NewContact),
}

/// What a dispatch did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    /// Action had no effect
    Ignored,
    /// Submission failed validation; draft and store untouched
    Rejected(ValidationFailure),
    /// A contact was appended with this id
    Appended(u64),
}

#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    pub store: ContactStore,
    pub query: String,
    pub draft: DraftContact,
    /// Set by a failed submit, cleared by a successful one
    pub validation_message: Option<String>,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: Action) -> Outcome {
        match action {
            Action::LoadStarted => {
                if self.store.begin_load() {
                    Outcome::Updated
                } else {
                    Outcome::Ignored
                }
            }
            Action::LoadSucceeded(contacts) => self.apply_load(Ok(contacts)),
            Action::LoadFailed(err) => self.apply_load(Err(err)),
            Action::QueryChanged(query) => {
                self.query = query;
                Outcome::Updated
            }
            Action::DraftChanged { field, value } => {
                self.draft.set(field, value);
                Outcome::Updated
            }
            Action::Submit => self.submit(),
            Action::ContactAppended(contact) => {
                let id = self.store.append(contact).id;
                self.draft.clear();
                Outcome::Appended(id)
            }
        }
    }

    fn apply_load(&mut self, outcome: Result<Vec<Contact>, LoadError>) -> Outcome {
        if self.store.finish_load(outcome) {
            Outcome::Updated
        } else {
            Outcome::Ignored
        }
    }

    fn submit(&mut self) -> Outcome {
        match validate(&self.draft) {
            Ok(contact) => {
                self.validation_message = None;
                let outcome = self.dispatch(Action::ContactAppended(contact));
                info!(?outcome, "contact added");
                outcome
            }
            Err(failure) => {
                debug!(errors = ?failure.errors, "draft rejected");
                self.validation_message = Some(failure.to_string());
                Outcome::Rejected(failure)
            }
        }
    }
}
