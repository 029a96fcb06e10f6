use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::calendar::{DayCell, WEEKDAY_HEADER};
use crate::tui::app::App;

/// Columns per day cell
const CELL_W: usize = 4;

/// Render the month grid for the calendar cursor
pub fn render_calendar_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let grid = app.calendar.grid();

    let mut lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("\u{2039} ", Style::default().fg(theme.dim).bg(bg)),
            Span::styled(
                grid.title.clone(),
                Style::default()
                    .fg(theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" \u{203A}", Style::default().fg(theme.dim).bg(bg)),
        ]),
        Line::from(""),
    ];

    let header: String = WEEKDAY_HEADER
        .iter()
        .map(|d| format!("{:>w$}", d, w = CELL_W))
        .collect();
    lines.push(Line::from(Span::styled(
        header,
        Style::default().fg(theme.dim).bg(bg),
    )));

    for week in grid.weeks() {
        let mut spans: Vec<Span> = week.iter().map(|cell| day_span(app, cell)).collect();
        // Pad short trailing weeks so centering lines up with the header
        let pad = (7 - week.len()) * CELL_W;
        if pad > 0 {
            spans.push(Span::styled(" ".repeat(pad), Style::default().bg(bg)));
        }
        lines.push(Line::from(spans));
    }

    if app.config.ui.show_key_hints {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "h/l month  t today",
            Style::default().fg(theme.dim).bg(bg),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn day_span(app: &App, cell: &DayCell) -> Span<'static> {
    let theme = &app.theme;
    match *cell {
        DayCell::Blank => Span::styled(" ".repeat(CELL_W), Style::default().bg(theme.background)),
        DayCell::Day { day, is_today } => {
            let style = if is_today {
                Style::default()
                    .fg(theme.text_bright)
                    .bg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text).bg(theme.background)
            };
            Span::styled(format!("{:>w$}", day, w = CELL_W), style)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use crate::tui::tabs::Tab;

    fn render_cal(app: &App) -> String {
        render_to_string(TERM_W, 16, |frame, area| {
            render_calendar_view(frame, app, area);
        })
    }

    #[test]
    fn shows_current_month() {
        let mut app = sample_app();
        app.activate_tab(Tab::Calendar);
        let out = render_cal(&app);
        assert!(out.contains("July 2025"));
        assert!(out.contains("Su  Mo  Tu  We  Th  Fr  Sa"));
        assert!(out.contains("31"));
        assert!(!out.contains(" 32"));
    }

    #[test]
    fn navigation_changes_title() {
        let mut app = sample_app();
        app.calendar_step(true);
        assert!(render_cal(&app).contains("August 2025"));
        app.calendar_step(false);
        app.calendar_step(false);
        assert!(render_cal(&app).contains("June 2025"));
    }

    #[test]
    fn july_2025_starts_on_tuesday() {
        let app = sample_app();
        let out = render_cal(&app);
        let first_week = out
            .lines()
            .find(|l| l.trim_end().ends_with(" 5"))
            .unwrap();
        // Tue..Sat filled, Sun/Mon blank
        assert!(first_week.contains("1   2   3   4   5"));
        assert!(!first_week.contains("30"));
    }
}
