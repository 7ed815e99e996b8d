use phonebook_core::{Contact, DirectoryView, DraftField};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::ui::layout;
use crate::ui::theme;
use crate::ui::{App, Focus};

pub(crate) fn render(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(theme::BG_APP));
    f.render_widget(bg_block, f.area());

    let padded = pad_horizontal(f.area(), layout::CONTENT_PADDING_H);
    let chunks = Layout::vertical([
        Constraint::Length(layout::HEADER_HEIGHT),
        Constraint::Length(layout::INPUT_HEIGHT),
        Constraint::Length(layout::RESULTS_LINE_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(layout::FORM_HEIGHT),
        Constraint::Length(layout::FOOTER_HEIGHT),
    ])
    .split(padded);

    let view = app.view();

    let header = Paragraph::new(Line::from(vec![
        Span::styled("Phonebook", theme::title()),
        Span::styled("  contact directory", theme::text_muted()),
    ]));
    f.render_widget(header, chunks[0]);

    render_input(
        f,
        chunks[1],
        "Search",
        &app.state.query,
        "Search by name or phone",
        app.focus == Focus::Search,
    );

    render_results_line(f, chunks[2], &view);
    render_contacts(f, chunks[3], &view.visible, app.contact_offset);
    render_form(f, chunks[4], app, &view);
    render_footer(f, chunks[5], app);
}

fn pad_horizontal(area: Rect, padding: u16) -> Rect {
    Rect::new(
        area.x + padding.min(area.width / 2),
        area.y,
        area.width.saturating_sub(padding * 2),
        area.height,
    )
}

fn render_results_line(f: &mut Frame, area: Rect, view: &DirectoryView) {
    let style = if view.error.is_some() {
        theme::error()
    } else if view.loading {
        Style::default().fg(theme::ACCENT_WARNING)
    } else {
        theme::text_muted()
    };
    let line = Paragraph::new(format!("Showing {}", view.results_label())).style(style);
    f.render_widget(line, area);
}

fn render_contacts(f: &mut Frame, area: Rect, contacts: &[Contact], offset: usize) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme::BORDER_ACTIVE))
        .title(Span::styled(" Contacts ", theme::text_bold()));

    if contacts.is_empty() {
        let empty = Paragraph::new("No contacts").style(theme::text_dim()).block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = contacts
        .iter()
        .map(|contact| {
            let email = if contact.email.is_empty() {
                Span::styled("no email", theme::text_dim())
            } else {
                Span::styled(contact.email.clone(), theme::text_muted())
            };
            let mut lines = vec![
                Line::from(Span::styled(contact.name.clone(), theme::text_bold())),
                Line::from(Span::styled(contact.phone.clone(), theme::text_primary())),
                Line::from(email),
            ];
            lines.resize(layout::CONTACT_CARD_HEIGHT as usize, Line::default());
            ListItem::new(lines).style(Style::default().bg(theme::BG_CARD))
        })
        .collect();

    let mut state = ListState::default().with_offset(offset.min(contacts.len() - 1));
    f.render_stateful_widget(List::new(items).block(block), area, &mut state);
}

fn render_form(f: &mut Frame, area: Rect, app: &App, view: &DirectoryView) {
    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(DraftField::ALL.iter().map(|_| Constraint::Length(layout::INPUT_HEIGHT)));
    constraints.push(Constraint::Length(1));
    let rows = Layout::vertical(constraints).split(area);

    f.render_widget(
        Paragraph::new("Add a Contact").style(theme::text_bold()),
        rows[0],
    );

    for (i, field) in DraftField::ALL.iter().enumerate() {
        render_input(
            f,
            rows[i + 1],
            field.label(),
            view.draft.get(*field),
            field.placeholder(),
            app.focus == Focus::Form(*field),
        );
    }

    if let Some(message) = &view.validation_message {
        f.render_widget(
            Paragraph::new(message.as_str()).style(theme::error()),
            rows[rows.len() - 1],
        );
    }
}

/// Bordered single-line input with placeholder and cursor
fn render_input(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::input_border(focused))
        .title(Span::styled(format!(" {} ", label), theme::input_label(focused)))
        .style(Style::default().bg(theme::BG_INPUT));

    let text = if value.is_empty() {
        Span::styled(placeholder.to_string(), theme::text_dim())
    } else {
        Span::styled(value.to_string(), theme::text_primary())
    };
    f.render_widget(Paragraph::new(Line::from(text)).block(block), area);

    if focused && area.height >= 3 && area.width >= 2 {
        let max_x = area.x.saturating_add(area.width - 2);
        let typed = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(typed).min(max_x);
        f.set_cursor_position((x, area.y + 1));
    }
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let line = if app.pending_quit {
        Line::from(Span::styled(
            "Press Ctrl+C again to quit",
            theme::error(),
        ))
    } else if let Some(name) = &app.last_added {
        Line::from(vec![
            Span::styled(format!("✓ Added {}", name), Style::default().fg(theme::ACCENT_SUCCESS)),
            Span::styled("  ·  Tab next field · Enter add · Esc back", theme::text_dim()),
        ])
    } else {
        Line::from(Span::styled(
            "Tab switch field · ↑/↓ PgUp/PgDn scroll · Enter add contact · Esc clear search · Ctrl+C quit",
            theme::text_dim(),
        ))
    };
    f.render_widget(Paragraph::new(line), area);
}
