use chrono::{DateTime, Days, Local, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::constants::MONTH_KEY_FORMAT;

/// Converts a UTC instant to the calendar date observed in `tz`.
///
/// This is the single source of truth for bucketing records by day.
pub fn journal_date_in<Z: TimeZone>(instant: DateTime<Utc>, tz: &Z) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// Calendar date of `instant` on the device clock.
pub fn journal_date_local(instant: DateTime<Utc>) -> NaiveDate {
    journal_date_in(instant, &Local)
}

/// Calendar date of `instant`, using `tz` when configured and the device
/// clock otherwise.
pub fn journal_date(instant: DateTime<Utc>, tz: Option<Tz>) -> NaiveDate {
    match tz {
        Some(tz) => journal_date_in(instant, &tz),
        None => journal_date_local(instant),
    }
}

/// Today's date, using `tz` when configured and the device clock otherwise.
pub fn journal_today(tz: Option<Tz>) -> NaiveDate {
    journal_date(Utc::now(), tz)
}

/// Formats the `YYYY-MM` bucket a date falls into.
pub fn month_key(date: NaiveDate) -> String {
    date.format(MONTH_KEY_FORMAT).to_string()
}

/// Returns `date` shifted forward by `days`, or `None` past the calendar end.
pub fn add_days(date: NaiveDate, days: u64) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(days))
}
