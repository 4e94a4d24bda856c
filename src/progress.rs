//! Weekly/monthly progress statistics
//!
//! Windows are calendar based: the week runs from the most recent Sunday
//! through today, the month from its first day through today. Weekly
//! consistency always divides by 7, even early in the week, so it reads as
//! "days trained this week" rather than a share of elapsed days.

use chrono::NaiveDate;

use crate::dates;
use crate::models::{ProgressStats, WorkoutRecord};

const DAYS_PER_WEEK: f64 = 7.0;

/// Compute statistics relative to the local current day
pub fn calculate_progress_stats(workouts: &[WorkoutRecord]) -> ProgressStats {
  calculate_progress_stats_on(workouts, dates::today())
}

/// Compute statistics as they stand on `today`
pub fn calculate_progress_stats_on(workouts: &[WorkoutRecord], today: NaiveDate) -> ProgressStats {
  if workouts.is_empty() {
    return ProgressStats::default();
  }

  let week_start = dates::start_of_week(today);
  let month_start = dates::start_of_month(today);

  let current_week_workouts = count_between(workouts, week_start, today);
  let current_month_workouts = count_between(workouts, month_start, today);

  let weekly_consistency = percentage(current_week_workouts, DAYS_PER_WEEK);
  let monthly_consistency =
    percentage(current_month_workouts, dates::days_in_month(today) as f64);

  let total_workouts = workouts.len() as u32;
  let average_workouts_per_week = workouts
    .iter()
    .map(|w| w.date)
    .min()
    .map(|first| {
      let weeks = weeks_since(first, today);
      round_one_decimal(total_workouts as f64 / weeks as f64)
    })
    .unwrap_or(0.0);

  ProgressStats {
    weekly_consistency,
    monthly_consistency,
    total_workouts,
    average_workouts_per_week,
    current_week_workouts,
    current_month_workouts,
  }
}

/// Records dated within `start..=end`
fn count_between(workouts: &[WorkoutRecord], start: NaiveDate, end: NaiveDate) -> u32 {
  workouts
    .iter()
    .filter(|w| w.date >= start && w.date <= end)
    .count() as u32
}

fn percentage(count: u32, denominator: f64) -> u32 {
  ((count as f64 / denominator) * 100.0).round() as u32
}

/// Whole weeks (rounded up) since `first`, never less than one
fn weeks_since(first: NaiveDate, today: NaiveDate) -> i64 {
  let days = (today - first).num_days();
  let weeks = (days as f64 / DAYS_PER_WEEK).ceil() as i64;
  weeks.max(1)
}

fn round_one_decimal(value: f64) -> f64 {
  (value * 10.0).round() / 10.0
}
