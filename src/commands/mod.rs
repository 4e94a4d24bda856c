pub mod analytics;

use crate::db::AppState;
use crate::models::{NewWorkout, WorkoutRecord, WorkoutUpdate};
use chrono::NaiveDate;

/// ---------------------------------------------------------------------------
/// Workout Commands
/// ---------------------------------------------------------------------------

pub async fn get_workouts(state: &AppState) -> Result<Vec<WorkoutRecord>, String> {
  state
    .store
    .workouts()
    .await
    .map_err(|e| format!("Failed to fetch workouts: {}", e))
}

pub async fn get_workouts_for_date(
  state: &AppState,
  date: NaiveDate,
) -> Result<Vec<WorkoutRecord>, String> {
  state
    .store
    .workouts_for_date(date)
    .await
    .map_err(|e| format!("Failed to fetch workouts for {}: {}", date, e))
}

pub async fn add_workout(state: &AppState, workout: NewWorkout) -> Result<WorkoutRecord, String> {
  state
    .store
    .add_workout(workout)
    .await
    .map_err(|e| format!("Failed to add workout: {}", e))
}

pub async fn remove_workout(state: &AppState, workout_id: String) -> Result<(), String> {
  state
    .store
    .remove_workout(&workout_id)
    .await
    .map_err(|e| format!("Failed to remove workout: {}", e))
}

pub async fn update_workout(
  state: &AppState,
  workout_id: String,
  updates: WorkoutUpdate,
) -> Result<WorkoutRecord, String> {
  state
    .store
    .update_workout(&workout_id, updates)
    .await
    .map_err(|e| format!("Failed to update workout: {}", e))
}

/// ---------------------------------------------------------------------------
/// Data Management Commands
/// ---------------------------------------------------------------------------

pub async fn clear_all_data(state: &AppState) -> Result<(), String> {
  state
    .store
    .clear_all()
    .await
    .map_err(|e| format!("Failed to clear data: {}", e))
}

pub async fn export_data(state: &AppState) -> Result<String, String> {
  state
    .store
    .export_data()
    .await
    .map_err(|e| format!("Failed to export data: {}", e))
}

/// Returns the number of imported workouts
pub async fn import_data(state: &AppState, data: String) -> Result<usize, String> {
  state
    .store
    .import_data(&data)
    .await
    .map_err(|e| format!("Failed to import data: {}", e))
}
