use serde::Serialize;

use crate::ops::calendar::{DayCell, MonthGrid};
use crate::ops::theme_pref::ThemeMode;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct MonthJson {
    pub year: i32,
    /// 1-based, as in `--month YYYY-MM`
    pub month: u32,
    pub title: String,
    /// Weekday of day 1, 0 = Sunday
    pub start_day: u32,
    pub days_in_month: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<u32>,
    pub cells: Vec<DayCell>,
}

impl From<&MonthGrid> for MonthJson {
    fn from(grid: &MonthGrid) -> Self {
        MonthJson {
            year: grid.year,
            month: grid.month + 1,
            title: grid.title.clone(),
            start_day: grid.start_day,
            days_in_month: grid.days_in_month,
            today: grid.today_cell(),
            cells: grid.cells.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct ThemeJson {
    pub theme: ThemeMode,
    pub icon: &'static str,
}

impl From<ThemeMode> for ThemeJson {
    fn from(mode: ThemeMode) -> Self {
        ThemeJson {
            theme: mode,
            icon: mode.icon(),
        }
    }
}
