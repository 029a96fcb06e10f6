use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use regex::Regex;

use crate::tui::app::App;
use crate::tui::list_renderer::ListNode;
use crate::tui::tabs::Tab;
use crate::util::unicode::{display_width, truncate_to_width};

use super::helpers::push_right_aligned;
use super::push_highlighted_spans;

/// Rows per node: title, body, footer, gap
const NODE_HEIGHT: usize = 4;

/// Render the task or note list for `tab`
pub fn render_list_view(frame: &mut Frame, app: &App, tab: Tab, area: Rect) {
    let (nodes, cursor, search_re) = match tab {
        Tab::Notes => (
            app.notes.listener().nodes(),
            app.note_cursor,
            app.search_regex(),
        ),
        _ => (app.tasks.listener().nodes(), app.task_cursor, None),
    };
    let bg = app.theme.background;
    let width = area.width as usize;

    if nodes.is_empty() {
        let msg = empty_message(app, tab);
        let line = Line::from(Span::styled(
            format!("  {}", msg),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        let paragraph = Paragraph::new(vec![Line::from(""), line]).style(Style::default().bg(bg));
        frame.render_widget(paragraph, area);
        return;
    }

    // Keep the cursor row on screen
    let per_page = (area.height as usize / NODE_HEIGHT).max(1);
    let first = cursor.saturating_sub(per_page - 1);

    let mut lines: Vec<Line> = Vec::new();
    for (row, node) in nodes.iter().enumerate().skip(first).take(per_page + 1) {
        push_node_lines(&mut lines, app, node, row == cursor, search_re.as_ref(), width);
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn empty_message(app: &App, tab: Tab) -> String {
    match tab {
        Tab::Notes if !app.search_query.is_empty() => {
            format!("No notes match \"{}\"", app.search_query)
        }
        Tab::Notes => "No notes yet. Press a to add one.".to_string(),
        _ => "No tasks yet. Press a to add one.".to_string(),
    }
}

fn push_node_lines<'a>(
    lines: &mut Vec<Line<'a>>,
    app: &App,
    node: &ListNode,
    selected: bool,
    search_re: Option<&Regex>,
    width: usize,
) {
    let theme = &app.theme;
    let row_bg = if selected {
        theme.selection_bg
    } else {
        theme.background
    };
    let fill = Style::default().bg(row_bg);
    let match_style = Style::default()
        .fg(theme.search_match_fg)
        .bg(theme.search_match_bg);

    // Title row: marker, title, badge on the right
    let marker = if selected { " \u{25B8} " } else { "   " };
    let badge = format!("[{}]", node.badge);
    let title_room = width.saturating_sub(display_width(marker) + display_width(&badge) + 2);
    let mut title_spans = vec![Span::styled(
        marker,
        Style::default().fg(theme.highlight).bg(row_bg),
    )];
    push_highlighted_spans(
        &mut title_spans,
        &truncate_to_width(&node.title, title_room),
        Style::default()
            .fg(theme.text_bright)
            .bg(row_bg)
            .add_modifier(Modifier::BOLD),
        match_style,
        search_re,
    );
    push_right_aligned(
        &mut title_spans,
        vec![
            Span::styled(
                badge,
                Style::default().fg(theme.tone_color(node.tone)).bg(row_bg),
            ),
            Span::styled(" ", fill),
        ],
        width,
        fill,
    );
    lines.push(Line::from(title_spans).style(fill));

    // Body row
    let mut body_spans = vec![Span::styled("   ", fill)];
    push_highlighted_spans(
        &mut body_spans,
        &truncate_to_width(&node.body, width.saturating_sub(4)),
        Style::default().fg(theme.text).bg(row_bg),
        match_style,
        search_re,
    );
    lines.push(Line::from(body_spans).style(fill));

    // Footer row, with action hints on the selected node
    let footer_style = if node.emphasized {
        Style::default()
            .fg(theme.highlight)
            .bg(row_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim).bg(row_bg)
    };
    let mut footer_spans = vec![
        Span::styled("   ", fill),
        Span::styled(node.footer.clone(), footer_style),
    ];
    if selected && app.config.ui.show_key_hints {
        push_right_aligned(
            &mut footer_spans,
            vec![Span::styled(
                "e edit  d delete ",
                Style::default().fg(theme.dim).bg(row_bg),
            )],
            width,
            fill,
        );
    }
    lines.push(Line::from(footer_spans).style(fill));
    lines.push(Line::from(""));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn render_tab(app: &App, tab: Tab) -> String {
        render_to_string(TERM_W, 20, |frame, area| {
            render_list_view(frame, app, tab, area);
        })
    }

    #[test]
    fn tasks_show_badge_and_due_label() {
        let app = sample_app();
        let out = render_tab(&app, Tab::Tasks);
        assert!(out.contains("Complete Math Assignment"));
        assert!(out.contains("[Medium]"));
        assert!(out.contains("Today"));
        assert!(out.contains("Read Chapter 4"));
        assert!(out.contains("[Low]"));
        assert!(out.contains("Due: Jul 27"));
    }

    #[test]
    fn cursor_marks_selected_node() {
        let mut app = sample_app();
        app.move_cursor(1);
        let out = render_tab(&app, Tab::Tasks);
        let marked = out.lines().find(|l| l.contains('\u{25B8}')).unwrap();
        assert!(marked.contains("Read Chapter 4"));
        assert!(out.contains("e edit  d delete"));
    }

    #[test]
    fn notes_show_subject_and_last_updated() {
        let app = sample_app();
        let out = render_tab(&app, Tab::Notes);
        assert!(out.contains("[Math]"));
        assert!(out.contains("[Science]"));
        assert!(out.contains("Last updated: 2 days ago"));
    }

    #[test]
    fn empty_lists_prompt_to_add() {
        let app = empty_app();
        assert!(render_tab(&app, Tab::Tasks).contains("No tasks yet"));
        assert!(render_tab(&app, Tab::Notes).contains("No notes yet"));
    }

    #[test]
    fn filtered_notes_only_show_matches() {
        let mut app = sample_app();
        app.activate_tab(Tab::Notes);
        app.set_search_query("biology".into());
        let out = render_tab(&app, Tab::Notes);
        assert!(out.contains("Biology Key Terms"));
        assert!(!out.contains("Calculus"));

        app.set_search_query("nothing here".into());
        assert!(render_tab(&app, Tab::Notes).contains("No notes match \"nothing here\""));
    }

    #[test]
    fn long_lists_scroll_to_cursor() {
        let mut app = empty_app();
        for i in 0..10 {
            app.tasks
                .add(crate::model::Task::new(
                    format!("t{i}"),
                    format!("Task number {i}"),
                    crate::model::Priority::Low,
                ))
                .unwrap();
        }
        app.cursor_to_end(true);
        let out = render_tab(&app, Tab::Tasks);
        assert!(out.contains("Task number 9"));
        assert!(!out.contains("Task number 0"));
    }
}
