//! Local date utilities.
//!
//! Everything here works on `chrono::NaiveDate` — a plain calendar date in
//! the user's locale with no timezone attached — so a completion logged at
//! 11pm in UTC-8 can never slide onto the next UTC day. The current date
//! comes from an injectable [`Clock`] so the engine is deterministic under
//! test.

use crate::types::DayName;
use crate::{Error, Result};
use chrono::{Datelike, Days, Local, NaiveDate};

/// Date format used everywhere on disk and in exports
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of "today" for the engine.
///
/// Production uses [`SystemClock`]; tests and the CLI `--today` override
/// use [`FixedClock`].
pub trait Clock {
    /// The current local calendar date
    fn today(&self) -> NaiveDate;

    /// Weekday identifier for the current local date
    fn today_day(&self) -> DayName {
        self.today().weekday().into()
    }
}

/// Wall-clock implementation using the local timezone
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fixed-date clock for deterministic tests and dev overrides
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Render a local date as `YYYY-MM-DD`
pub fn local_date_string(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` local date string
pub fn parse_local_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| Error::InvalidDate {
        input: s.to_string(),
    })
}

/// Weekday identifier for a local date
pub fn weekday_of(date: NaiveDate) -> DayName {
    date.weekday().into()
}

/// The most recent calendar date falling on `day`, inclusive of today.
///
/// If `day` is today's weekday this returns `today`; otherwise it walks
/// backward at most 6 days.
pub fn most_recent_date_for(day: DayName, today: NaiveDate) -> NaiveDate {
    let today_num = today.weekday().num_days_from_monday();
    let target_num = chrono::Weekday::from(day).num_days_from_monday();
    let back = (today_num + 7 - target_num) % 7;
    // Cannot underflow: `back` is at most 6
    today - Days::new(back as u64)
}
