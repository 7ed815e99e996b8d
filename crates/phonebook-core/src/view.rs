//! What the presentation layer sees.
//!
//! [`DirectoryView`] is a pure projection of [`DirectoryState`]; nothing else
//! crosses into rendering.

use crate::models::{Contact, DraftContact};
use crate::search::filter_contacts;
use crate::state::DirectoryState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryView {
    pub visible: Vec<Contact>,
    pub result_count: usize,
    pub loading: bool,
    pub error: Option<String>,
    pub draft: DraftContact,
    pub validation_message: Option<String>,
}

impl DirectoryView {
    pub fn project(state: &DirectoryState) -> Self {
        let visible: Vec<Contact> = filter_contacts(state.store.contacts(), &state.query)
            .into_iter()
            .cloned()
            .collect();

        Self {
            result_count: visible.len(),
            visible,
            loading: state.store.is_loading(),
            error: state.store.error().map(str::to_string),
            draft: state.draft.clone(),
            validation_message: state.validation_message.clone(),
        }
    }

    /// e.g. "1 result", "3 results (loading...)", "3 results (error: ...)"
    pub fn results_label(&self) -> String {
        let noun = if self.result_count == 1 {
            "result"
        } else {
            "results"
        };
        let mut label = format!("{} {}", self.result_count, noun);
        if self.loading {
            label.push_str(" (loading...)");
        }
        if let Some(error) = &self.error {
            label.push_str(&format!(" (error: {})", error));
        }
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LoadError;
    use crate::models::{seed_contacts, DraftField};
    use crate::state::Action;

    #[test]
    fn test_failed_load_shows_seed_with_error() {
        let mut state = DirectoryState::new();
        state.dispatch(Action::LoadStarted);
        state.dispatch(Action::LoadFailed(LoadError::Aborted));

        let view = DirectoryView::project(&state);
        assert_eq!(view.visible, seed_contacts());
        assert!(view.results_label().starts_with("3 results (error: "));
        assert!(!view.loading);
    }

    #[test]
    fn test_empty_load_shows_zero_results() {
        let mut state = DirectoryState::new();
        state.dispatch(Action::LoadStarted);
        state.dispatch(Action::LoadSucceeded(vec![]));

        let view = DirectoryView::project(&state);
        assert!(view.visible.is_empty());
        assert_eq!(view.results_label(), "0 results");
    }

    #[test]
    fn test_loading_label_and_singular() {
        let mut state = DirectoryState::new();
        state.dispatch(Action::LoadStarted);
        state.dispatch(Action::QueryChanged("nabil".to_string()));

        let view = DirectoryView::project(&state);
        assert_eq!(view.result_count, 1);
        assert_eq!(view.results_label(), "1 result (loading...)");
    }

    #[test]
    fn test_appended_contact_is_first_and_draft_cleared() {
        let mut state = DirectoryState::new();
        for (field, value) in [
            (DraftField::Name, "Al"),
            (DraftField::Phone, "555"),
            (DraftField::Email, "x@y"),
        ] {
            state.dispatch(Action::DraftChanged {
                field,
                value: value.to_string(),
            });
        }
        state.dispatch(Action::Submit);

        let view = DirectoryView::project(&state);
        assert_eq!(view.visible[0].name, "Al");
        assert_eq!(view.draft, DraftContact::default());
        assert!(view.validation_message.is_none());
    }

    #[test]
    fn test_projection_follows_query() {
        let mut state = DirectoryState::new();
        state.dispatch(Action::QueryChanged("010-0102".to_string()));
        let view = DirectoryView::project(&state);
        assert_eq!(view.visible.len(), 1);
        assert_eq!(view.visible[0].id, 2);
    }
}
