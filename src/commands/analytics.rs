//! Analytics commands: streaks, progress stats and the consistency grid

use chrono::NaiveDate;
use serde::Serialize;

use crate::consistency::{generate_consistency_grid, generate_consistency_grid_on};
use crate::dates;
use crate::db::AppState;
use crate::models::{
  current_streak_caption, longest_streak_caption, ConsistencyDay, ConsistencyLevel, ProgressStats,
  StreakMilestone, StreakResult, StreakStatus, WorkoutRecord,
};
use crate::progress::{calculate_progress_stats, calculate_progress_stats_on};
use crate::streaks::{calculate_streaks, calculate_streaks_on};

/// Everything the dashboard renders, computed from one snapshot of the
/// collection against a single reference day
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
  pub today: NaiveDate,
  pub streaks: StreakResult,
  pub streak_status: StreakStatus,
  pub current_streak_caption: String,
  pub longest_streak_caption: String,
  pub milestones_reached: Vec<StreakMilestone>,
  pub next_milestone: Option<StreakMilestone>,
  pub progress: ProgressStats,
  pub weekly_level: ConsistencyLevel,
  pub monthly_level: ConsistencyLevel,
  pub consistency_grid: Vec<ConsistencyDay>,
  pub today_workouts: Vec<WorkoutRecord>,
}

impl Dashboard {
  pub fn compute(workouts: &[WorkoutRecord], today: NaiveDate) -> Self {
    let streaks = calculate_streaks_on(workouts, today);
    let progress = calculate_progress_stats_on(workouts, today);

    Self {
      today,
      streak_status: StreakStatus::from_result(&streaks),
      current_streak_caption: current_streak_caption(streaks.current_streak),
      longest_streak_caption: longest_streak_caption(streaks.longest_streak),
      milestones_reached: StreakMilestone::reached(streaks.current_streak),
      next_milestone: StreakMilestone::next(streaks.current_streak),
      weekly_level: ConsistencyLevel::from_percentage(progress.weekly_consistency),
      monthly_level: ConsistencyLevel::from_percentage(progress.monthly_consistency),
      consistency_grid: generate_consistency_grid_on(workouts, today),
      today_workouts: workouts.iter().filter(|w| w.date == today).cloned().collect(),
      streaks,
      progress,
    }
  }
}

async fn load_workouts(state: &AppState) -> Result<Vec<WorkoutRecord>, String> {
  state
    .store
    .workouts()
    .await
    .map_err(|e| format!("Failed to load workouts: {}", e))
}

pub async fn get_streak_info(state: &AppState) -> Result<StreakResult, String> {
  Ok(calculate_streaks(&load_workouts(state).await?))
}

pub async fn get_progress_stats(state: &AppState) -> Result<ProgressStats, String> {
  Ok(calculate_progress_stats(&load_workouts(state).await?))
}

pub async fn get_consistency_grid(state: &AppState) -> Result<Vec<ConsistencyDay>, String> {
  Ok(generate_consistency_grid(&load_workouts(state).await?))
}

pub async fn get_dashboard(state: &AppState) -> Result<Dashboard, String> {
  let workouts = load_workouts(state).await?;
  let dashboard = Dashboard::compute(&workouts, dates::today());

  tracing::debug!(
    workouts = workouts.len(),
    current_streak = dashboard.streaks.current_streak,
    longest_streak = dashboard.streaks.longest_streak,
    "Computed dashboard"
  );

  Ok(dashboard)
}
