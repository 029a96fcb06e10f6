use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::tui::tabs::Tab;

use super::helpers::push_right_aligned;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let fill = Style::default().bg(bg);
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans: Vec<Span> = Vec::new();
    let hint = match app.mode {
        Mode::Search => {
            // Search prompt: /pattern▌
            spans.push(Span::styled(
                format!("/{}", app.search_query),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ));
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
            Some("Enter keep  Esc clear")
        }
        Mode::Form => Some("Tab next field  Enter save  Esc cancel"),
        Mode::Navigate => {
            if app.active_tab() == Tab::Notes && !app.search_query.is_empty() {
                spans.push(Span::styled(format!("/{}", app.search_query), dim));
                Some("Esc clear")
            } else if app.config.ui.show_key_hints {
                Some(match app.active_tab() {
                    Tab::Tasks => "a add  ? help  q quit",
                    Tab::Notes => "a add  / search  ? help  q quit",
                    Tab::Calendar => "h/l month  ? help  q quit",
                })
            } else {
                None
            }
        }
    };

    // A pending message replaces whatever is on the left
    if let Some(msg) = &app.status {
        spans.clear();
        spans.push(Span::styled(
            msg.clone(),
            Style::default().fg(app.theme.yellow).bg(bg),
        ));
    }

    if let Some(hint) = hint {
        push_right_aligned(&mut spans, vec![Span::styled(hint, dim)], width, fill);
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(fill);
    frame.render_widget(paragraph, area);
}
