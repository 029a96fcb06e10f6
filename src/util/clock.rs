use chrono::{Local, NaiveDate, Utc};

/// Source of the current date and time
pub trait Clock {
    /// Today's date in the user's local time zone
    fn today(&self) -> NaiveDate;

    /// Milliseconds since the Unix epoch (used for id generation)
    fn now_millis(&self) -> i64;
}

/// The real wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock frozen at a fixed date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub date: NaiveDate,
    pub millis: i64,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        let millis = date
            .and_hms_opt(12, 0, 0)
            .map_or(0, |dt| dt.and_utc().timestamp_millis());
        FixedClock { date, millis }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }

    fn now_millis(&self) -> i64 {
        self.millis
    }
}
