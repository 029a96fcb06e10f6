use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::form::{FieldKind, FormField, FormState};
use crate::util::unicode::truncate_to_width;

const POPUP_W: u16 = 60;

/// Render the create/edit form centered over `area`
pub fn render_form_popup(frame: &mut Frame, app: &App, form: &FormState, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    // label + value per field, one gap row, hint row, borders
    let height = form.fields.len() as u16 * 2 + 4;
    let popup = super::helpers::centered_rect_fixed(POPUP_W, height, area);
    frame.render_widget(Clear, popup);

    let inner_w = popup.width.saturating_sub(4) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == form.focus;
        let label_style = if focused {
            Style::default()
                .fg(theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim).bg(bg)
        };
        lines.push(Line::from(Span::styled(
            format!(" {}", field_label(field)),
            label_style,
        )));
        lines.push(value_line(app, field, focused, inner_w));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Tab next  Enter save  Esc cancel",
        Style::default().fg(theme.dim).bg(bg),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", form.title()))
        .border_style(Style::default().fg(theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup);
}

fn field_label(field: &FormField) -> String {
    match field.kind {
        FieldKind::Date => format!("{} (YYYY-MM-DD)", field.label),
        FieldKind::Priority => format!("{} (\u{2190}/\u{2192})", field.label),
        FieldKind::Text => field.label.to_string(),
    }
}

fn value_line(app: &App, field: &FormField, focused: bool, width: usize) -> Line<'static> {
    let theme = &app.theme;
    let style = Style::default().fg(theme.text_bright).bg(theme.background);

    if field.kind == FieldKind::Priority {
        let label = field
            .value
            .parse::<crate::model::Priority>()
            .map(|p| p.label())
            .unwrap_or_default();
        return Line::from(vec![
            Span::styled(" \u{2039} ", Style::default().fg(theme.dim).bg(theme.background)),
            Span::styled(label.to_string(), style),
            Span::styled(" \u{203A}", Style::default().fg(theme.dim).bg(theme.background)),
        ]);
    }

    if !focused {
        return Line::from(Span::styled(
            format!(" {}", truncate_to_width(&field.value, width)),
            style,
        ));
    }

    // Split at the cursor and draw a block between the halves
    let cursor = field.cursor.min(field.value.len());
    let (before, after) = field.value.split_at(cursor);
    Line::from(vec![
        Span::styled(format!(" {}", before), style),
        Span::styled(
            "\u{258C}",
            Style::default().fg(theme.highlight).bg(theme.background),
        ),
        Span::styled(after.to_string(), style),
    ])
}
