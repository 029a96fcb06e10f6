use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};
use crate::tui::list_renderer::ActionKind;
use crate::tui::tabs::Tab;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('T') => app.toggle_theme(),

        // Tabs
        KeyCode::Char(c @ '1'..='3') => {
            if let Some(tab) = c.to_digit(10).and_then(|n| Tab::ALL.get(n as usize - 1)) {
                app.activate_tab(*tab);
            }
        }
        KeyCode::Tab => app.tabs.next(),
        KeyCode::BackTab => app.tabs.prev(),

        _ => match app.active_tab() {
            Tab::Tasks | Tab::Notes => handle_list_key(app, key),
            Tab::Calendar => handle_calendar_key(app, key),
        },
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor_to_end(false),
        KeyCode::Char('G') | KeyCode::End => app.cursor_to_end(true),
        KeyCode::Char('a') => app.open_form(),
        KeyCode::Char('e') | KeyCode::Enter => app.act_on_selection(ActionKind::Edit),
        KeyCode::Char('d') | KeyCode::Delete => app.act_on_selection(ActionKind::Delete),
        KeyCode::Char('/') if app.active_tab() == Tab::Notes => {
            app.mode = Mode::Search;
        }
        KeyCode::Esc if app.active_tab() == Tab::Notes && !app.search_query.is_empty() => {
            app.clear_search();
        }
        _ => {}
    }
}

fn handle_calendar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('n') => app.calendar_step(true),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('p') => app.calendar_step(false),
        KeyCode::Char('t') => app.calendar_today(),
        _ => {}
    }
}
