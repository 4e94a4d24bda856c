//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Workout record factories

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::db::AppState;
use crate::models::{NewWorkout, WorkoutRecord, WorkoutType};
use crate::store::generate_workout_id;

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// App state backed by a fresh in-memory database
pub async fn setup_test_state() -> AppState {
  AppState::new(setup_test_db().await, "streakfit_workout_data")
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// A cardio workout on `date` lasting `duration` minutes
pub fn mock_workout(date: NaiveDate, duration: u32) -> WorkoutRecord {
  WorkoutRecord {
    id: generate_workout_id(),
    date,
    workout_type: WorkoutType::Cardio,
    duration,
    calories: Some(duration * 8),
    notes: None,
    completed_at: date.and_hms_opt(18, 0, 0).expect("valid time").and_utc(),
  }
}

/// One 30-minute workout per given date
pub fn mock_workouts_on(dates: &[NaiveDate]) -> Vec<WorkoutRecord> {
  dates.iter().map(|&d| mock_workout(d, 30)).collect()
}

pub fn mock_new_workout(workout_type: WorkoutType, duration: u32) -> NewWorkout {
  NewWorkout {
    workout_type,
    duration,
    calories: None,
    notes: None,
    date: None,
  }
}
