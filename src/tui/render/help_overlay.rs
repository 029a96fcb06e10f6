use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::tabs::Tab;

use crate::util::unicode::fit_to_width;

use super::helpers::centered_rect;

const KEY_WIDTH: usize = 14;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    // Context-sensitive help
    match app.active_tab() {
        Tab::Tasks | Tab::Notes => {
            lines.push(Line::from(Span::styled(" List", header_style)));
            add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
            add_binding(&mut lines, " g/G", "Jump to top/bottom", key_style, desc_style);
            add_binding(&mut lines, " a", "Add item", key_style, desc_style);
            add_binding(&mut lines, " e/Enter", "Edit selected", key_style, desc_style);
            add_binding(&mut lines, " d/Del", "Delete selected", key_style, desc_style);
            if app.active_tab() == Tab::Notes {
                add_binding(&mut lines, " /", "Search notes", key_style, desc_style);
                add_binding(&mut lines, " Esc", "Clear search", key_style, desc_style);
            }
        }
        Tab::Calendar => {
            lines.push(Line::from(Span::styled(" Calendar", header_style)));
            add_binding(&mut lines, " \u{2190}/h p", "Previous month", key_style, desc_style);
            add_binding(&mut lines, " \u{2192}/l n", "Next month", key_style, desc_style);
            add_binding(&mut lines, " t", "Back to today", key_style, desc_style);
        }
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut lines, " 1 2 3", "Switch tab", key_style, desc_style);
    add_binding(&mut lines, " Tab/S-Tab", "Next/previous tab", key_style, desc_style);
    add_binding(&mut lines, " T", "Toggle light/dark", key_style, desc_style);
    add_binding(&mut lines, " ?", "Toggle this help", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    lines.push(Line::from(vec![
        Span::styled(fit_to_width(key, KEY_WIDTH), key_style),
        Span::styled(desc, desc_style),
    ]));
}
