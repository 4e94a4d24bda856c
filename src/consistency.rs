//! Yearly consistency grid
//!
//! A fixed window of 365 calendar days ending today, oldest first, with one
//! cell per day. Records outside the window are ignored.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use crate::dates;
use crate::models::{ConsistencyDay, Intensity, WorkoutRecord};

pub const GRID_DAYS: i64 = 365;

/// Build the grid ending at the local current day
pub fn generate_consistency_grid(workouts: &[WorkoutRecord]) -> Vec<ConsistencyDay> {
  generate_consistency_grid_on(workouts, dates::today())
}

/// Build the grid ending at `today`. Always returns exactly [`GRID_DAYS`] cells.
pub fn generate_consistency_grid_on(
  workouts: &[WorkoutRecord],
  today: NaiveDate,
) -> Vec<ConsistencyDay> {
  // day -> (workout count, total minutes)
  let mut by_day: HashMap<NaiveDate, (u32, u32)> = HashMap::new();
  for w in workouts {
    let entry = by_day.entry(w.date).or_insert((0, 0));
    entry.0 += 1;
    entry.1 = entry.1.saturating_add(w.duration);
  }

  (0..GRID_DAYS)
    .rev()
    .map(|days_back| {
      let date = today - Duration::days(days_back);
      let (workout_count, total_minutes) = by_day.get(&date).copied().unwrap_or((0, 0));

      ConsistencyDay {
        date,
        has_workout: workout_count > 0,
        workout_count,
        intensity: Intensity::from_total_minutes(total_minutes),
      }
    })
    .collect()
}

/// Split the grid into rows of seven cells for calendar layouts.
/// The last row is partial when the grid length is not a multiple of 7.
pub fn group_into_weeks(grid: &[ConsistencyDay]) -> Vec<Vec<ConsistencyDay>> {
  grid.chunks(7).map(|week| week.to_vec()).collect()
}

impl ConsistencyDay {
  /// Tooltip text, e.g. "Yesterday: 2 workouts (High intensity)"
  pub fn describe(&self, today: NaiveDate) -> String {
    let date = dates::format_relative(self.date, today);
    if !self.has_workout {
      return format!("{}: No workout", date);
    }

    let workouts = if self.workout_count == 1 {
      "1 workout".to_string()
    } else {
      format!("{} workouts", self.workout_count)
    };

    format!("{}: {} ({})", date, workouts, self.intensity.label())
  }
}
