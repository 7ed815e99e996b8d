use phonebook_core::{
    Action, ContactSource, DirectoryState, DirectoryView, DraftField, LoadPoll, LoadTask, Outcome,
};
use tracing::debug;

/// Which input receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Form(DraftField),
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Search => Focus::Form(DraftField::Name),
            Focus::Form(field) => field.next().map(Focus::Form).unwrap_or(Focus::Search),
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Focus::Search => Focus::Form(DraftField::Email),
            Focus::Form(field) => field.prev().map(Focus::Form).unwrap_or(Focus::Search),
        }
    }
}

pub struct App {
    pub state: DirectoryState,
    pub focus: Focus,
    pub running: bool,
    /// First Ctrl+C arms quitting, the second one quits
    pub pending_quit: bool,
    /// Name of the most recently added contact, shown in the footer
    pub last_added: Option<String>,
    /// Index of the first contact drawn in the list
    pub contact_offset: usize,
    load_task: Option<LoadTask>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            state: DirectoryState::new(),
            focus: Focus::Search,
            running: true,
            pending_quit: false,
            last_added: None,
            contact_offset: 0,
            load_task: None,
        }
    }

    /// Kick off the single contact load. Later calls are ignored.
    pub fn start_load(&mut self, source: ContactSource) {
        if self.state.dispatch(Action::LoadStarted) == Outcome::Ignored {
            return;
        }
        self.load_task = Some(LoadTask::spawn(source));
    }

    /// Poll the load task. Returns true if the state changed.
    pub fn tick(&mut self) -> bool {
        let Some(task) = self.load_task.as_mut() else {
            return false;
        };
        match task.poll() {
            LoadPoll::Pending => false,
            LoadPoll::Finished(outcome) => {
                self.load_task = None;
                self.contact_offset = 0;
                let action = match outcome {
                    Ok(contacts) => Action::LoadSucceeded(contacts),
                    Err(e) => Action::LoadFailed(e),
                };
                self.state.dispatch(action);
                true
            }
            LoadPoll::Consumed => {
                self.load_task = None;
                false
            }
        }
    }

    pub fn view(&self) -> DirectoryView {
        DirectoryView::project(&self.state)
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    fn focused_value(&self) -> &str {
        match self.focus {
            Focus::Search => &self.state.query,
            Focus::Form(field) => self.state.draft.get(field),
        }
    }

    fn set_focused_value(&mut self, value: String) {
        let action = match self.focus {
            Focus::Search => {
                self.contact_offset = 0;
                Action::QueryChanged(value)
            }
            Focus::Form(field) => Action::DraftChanged { field, value },
        };
        self.state.dispatch(action);
    }

    pub fn enter_char(&mut self, c: char) {
        let mut value = self.focused_value().to_string();
        value.push(c);
        self.set_focused_value(value);
    }

    pub fn delete_char(&mut self) {
        let mut value = self.focused_value().to_string();
        if value.pop().is_some() {
            self.set_focused_value(value);
        }
    }

    pub fn clear_query(&mut self) {
        if !self.state.query.is_empty() {
            self.contact_offset = 0;
            self.state.dispatch(Action::QueryChanged(String::new()));
        }
    }

    /// Scroll the contact list, never past the last visible contact
    pub fn scroll_down(&mut self, lines: usize) {
        let last = self.view().result_count.saturating_sub(1);
        self.contact_offset = self.contact_offset.saturating_add(lines).min(last);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.contact_offset = self.contact_offset.saturating_sub(lines);
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Submit the draft; on success focus returns to the name field
    pub fn submit(&mut self) -> Outcome {
        let outcome = self.state.dispatch(Action::Submit);
        match &outcome {
            Outcome::Appended(id) => {
                self.last_added = self
                    .state
                    .store
                    .contacts()
                    .first()
                    .filter(|c| c.id == *id)
                    .map(|c| c.name.clone());
                // Newest contacts are listed first
                self.contact_offset = 0;
                self.focus = Focus::Form(DraftField::Name);
            }
            Outcome::Rejected(failure) => {
                debug!(errors = ?failure.errors, "submit rejected");
                self.last_added = None;
                if let Some(field) = failure.errors.first().map(|e| e.field()) {
                    self.focus = Focus::Form(field);
                }
            }
            _ => {}
        }
        outcome
    }
}
