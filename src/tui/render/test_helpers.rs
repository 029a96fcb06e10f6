use std::rc::Rc;

use chrono::NaiveDate;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::ambient::FixedAmbient;
use crate::io::state::MemoryStore;
use crate::model::DashConfig;
use crate::tui::app::{App, AppOptions};
use crate::util::clock::FixedClock;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// The date every test app believes is today
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 26).unwrap()
}

/// An app on a frozen clock with an in-memory state store
pub fn app_with(config: DashConfig, empty: bool, prefers_dark: Option<bool>) -> App {
    let options = AppOptions {
        config,
        clock: Rc::new(FixedClock::new(test_today())),
        state: Box::new(MemoryStore::new()),
        empty,
    };
    App::new(options, &FixedAmbient(prefers_dark)).unwrap()
}

/// The dashboard with its sample tasks and notes
pub fn sample_app() -> App {
    app_with(DashConfig::default(), false, None)
}

/// The dashboard with nothing in it
pub fn empty_app() -> App {
    app_with(DashConfig::default(), true, None)
}
