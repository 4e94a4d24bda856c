//! Calendar-day helpers shared by the analytics engine
//!
//! Every workout date is a local calendar day (`NaiveDate`); nothing here
//! looks at time-of-day. Functions that depend on "now" read the local clock
//! once, and each has a counterpart taking the reference day explicitly.

use chrono::{Datelike, Duration, Local, NaiveDate};

pub const ISO_DAY_FORMAT: &str = "%Y-%m-%d";

/// The current local calendar day
pub fn today() -> NaiveDate {
  Local::now().date_naive()
}

/// The local calendar day before today
pub fn yesterday() -> NaiveDate {
  today() - Duration::days(1)
}

/// Whole calendar days between two days, in either order
pub fn day_difference(a: NaiveDate, b: NaiveDate) -> i64 {
  (a - b).num_days().abs()
}

/// Parse an ISO day (`2024-01-02`) or the date part of an ISO timestamp
/// (`2024-01-02T23:10:00.000Z`). The offset of a timestamp is ignored: the
/// written date is the day.
pub fn parse_day(s: &str) -> Result<NaiveDate, chrono::ParseError> {
  let day = s.trim().split('T').next().unwrap_or_default();
  NaiveDate::parse_from_str(day, ISO_DAY_FORMAT)
}

pub fn format_day(day: NaiveDate) -> String {
  day.format(ISO_DAY_FORMAT).to_string()
}

/// Most recent Sunday on or before `day`
pub fn start_of_week(day: NaiveDate) -> NaiveDate {
  day - Duration::days(day.weekday().num_days_from_sunday() as i64)
}

pub fn start_of_month(day: NaiveDate) -> NaiveDate {
  day.with_day(1).unwrap_or(day)
}

/// Number of days (28-31) in the month containing `day`
pub fn days_in_month(day: NaiveDate) -> u32 {
  let first = start_of_month(day);
  let next_first = if first.month() == 12 {
    NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
  } else {
    NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
  };

  next_first
    .map(|next| (next - first).num_days() as u32)
    .unwrap_or(31)
}

/// "Today", "Yesterday", otherwise a short date like "Oct 7"
pub fn format_relative(day: NaiveDate, today: NaiveDate) -> String {
  if day == today {
    "Today".to_string()
  } else if day == today - Duration::days(1) {
    "Yesterday".to_string()
  } else {
    day.format("%b %-d").to_string()
  }
}
