use std::rc::Rc;

use chrono::{Datelike, Month, NaiveDate};
use serde::Serialize;

use crate::util::clock::Clock;

/// Error type for calendar operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("month out of range: {0} (expected 0-11)")]
    InvalidMonth(u32),
    #[error("year out of range: {0}")]
    YearOutOfRange(i32),
}

/// The (year, month) pair on display. `month` is 0-based (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCursor {
    pub year: i32,
    pub month: u32,
}

impl CalendarCursor {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if month > 11 {
            return Err(CalendarError::InvalidMonth(month));
        }
        Ok(CalendarCursor { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        CalendarCursor {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// One month forward, rolling December into January of the next year
    pub fn next(self) -> Self {
        if self.month == 11 {
            CalendarCursor {
                year: self.year + 1,
                month: 0,
            }
        } else {
            CalendarCursor {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// One month back, rolling January into December of the previous year
    pub fn prev(self) -> Self {
        if self.month == 0 {
            CalendarCursor {
                year: self.year - 1,
                month: 11,
            }
        } else {
            CalendarCursor {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

/// Gregorian leap-year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a 0-based month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Weekday of the first of the month, 0 = Sunday .. 6 = Saturday
pub fn start_weekday(year: i32, month: u32) -> Result<u32, CalendarError> {
    let first = first_of_month(year, month)?;
    Ok(first.weekday().num_days_from_sunday())
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
    if month > 11 {
        return Err(CalendarError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month + 1, 1).ok_or(CalendarError::YearOutOfRange(year))
}

/// English month name for a 0-based month
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month + 1)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("", |m| m.name())
}

/// One cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DayCell {
    /// Leading padding before day 1
    Blank,
    Day { day: u32, is_today: bool },
}

/// A computed month: leading blanks followed by one cell per day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// e.g. "July 2025"
    pub title: String,
    pub start_day: u32,
    pub days_in_month: u32,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Compute the grid for a month, marking `today` if it falls inside it
    pub fn compute(year: i32, month: u32, today: NaiveDate) -> Result<Self, CalendarError> {
        let start_day = start_weekday(year, month)?;
        let days = days_in_month(year, month);
        let today_in_view = today.year() == year && today.month0() == month;

        let mut cells = Vec::with_capacity((start_day + days) as usize);
        cells.extend((0..start_day).map(|_| DayCell::Blank));
        cells.extend((1..=days).map(|day| DayCell::Day {
            day,
            is_today: today_in_view && today.day() == day,
        }));

        Ok(MonthGrid {
            year,
            month,
            title: format!("{} {}", month_name(month), year),
            start_day,
            days_in_month: days,
            cells,
        })
    }

    /// Cells split into rows of seven (the last row may be short)
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    /// The highlighted day, if today is in this month
    pub fn today_cell(&self) -> Option<u32> {
        self.cells.iter().find_map(|c| match c {
            DayCell::Day { day, is_today: true } => Some(*day),
            _ => None,
        })
    }
}

/// Short weekday header, Sunday first
pub const WEEKDAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Plain-text rendering in the style of `cal(1)`
pub fn format_month(grid: &MonthGrid) -> String {
    let width = WEEKDAY_HEADER.len() * 3 - 1;
    let pad = width.saturating_sub(grid.title.chars().count()) / 2;
    let mut out = format!("{}{}\n", " ".repeat(pad), grid.title);
    out.push_str(&WEEKDAY_HEADER.join(" "));
    out.push('\n');
    for week in grid.weeks() {
        let row: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                DayCell::Blank => "  ".to_string(),
                DayCell::Day { day, .. } => format!("{:>2}", day),
            })
            .collect();
        out.push_str(row.join(" ").trim_end());
        out.push('\n');
    }
    out
}

/// The calendar component: a cursor plus the grid rendered for it
pub struct CalendarView {
    cursor: CalendarCursor,
    grid: MonthGrid,
    clock: Rc<dyn Clock>,
}

impl CalendarView {
    /// Start on the clock's current month
    pub fn new(clock: Rc<dyn Clock>) -> Result<Self, CalendarError> {
        let today = clock.today();
        let cursor = CalendarCursor::from_date(today);
        let grid = MonthGrid::compute(cursor.year, cursor.month, today)?;
        Ok(CalendarView {
            cursor,
            grid,
            clock,
        })
    }

    pub fn cursor(&self) -> CalendarCursor {
        self.cursor
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    /// Move the cursor to (year, month) and recompute the grid.
    /// On error the previous cursor and grid are kept.
    pub fn render(&mut self, year: i32, month: u32) -> Result<(), CalendarError> {
        let cursor = CalendarCursor::new(year, month)?;
        self.grid = MonthGrid::compute(cursor.year, cursor.month, self.clock.today())?;
        self.cursor = cursor;
        Ok(())
    }

    pub fn next_month(&mut self) -> Result<(), CalendarError> {
        let next = self.cursor.next();
        self.render(next.year, next.month)
    }

    pub fn prev_month(&mut self) -> Result<(), CalendarError> {
        let prev = self.cursor.prev();
        self.render(prev.year, prev.month)
    }

    /// Jump back to the month containing today
    pub fn today(&mut self) -> Result<(), CalendarError> {
        let now = CalendarCursor::from_date(self.clock.today());
        self.render(now.year, now.month)
    }
}
