use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::layout::CONTACT_PAGE_SIZE;
use crate::ui::{App, Focus};

pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Up if matches!(app.focus, Focus::Form(_)) => app.focus_prev(),
        KeyCode::Down if matches!(app.focus, Focus::Form(_)) => app.focus_next(),
        KeyCode::Up => app.scroll_up(1),
        KeyCode::Down => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(CONTACT_PAGE_SIZE),
        KeyCode::PageDown => app.scroll_down(CONTACT_PAGE_SIZE),
        KeyCode::Esc => match app.focus {
            Focus::Search => app.clear_query(),
            Focus::Form(_) => app.focus = Focus::Search,
        },
        KeyCode::Enter => match app.focus {
            Focus::Search => app.focus = Focus::Form(phonebook_core::DraftField::Name),
            Focus::Form(_) => {
                app.submit();
            }
        },
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.enter_char(c)
        }
        _ => {}
    }
}
