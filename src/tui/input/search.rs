use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Typing updates the note filter on every key
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        // Cancel: drop the filter
        KeyCode::Esc => {
            app.clear_search();
            app.mode = Mode::Navigate;
        }
        // Keep the filter and go back to the list
        KeyCode::Enter => {
            app.mode = Mode::Navigate;
        }
        KeyCode::Backspace => {
            let mut query = app.search_query.clone();
            query.pop();
            app.set_search_query(query);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut query = app.search_query.clone();
            query.push(c);
            app.set_search_query(query);
        }
        _ => {}
    }
}
