//! Workout store
//!
//! The whole record collection lives as one JSON document under a single key
//! of the `kv_store` table. Every mutation is a read-modify-write of the full
//! document, serialized through an async mutex so only one write is in flight.
//! Missing or unparsable data loads as an empty collection.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::consistency::generate_consistency_grid;
use crate::dates;
use crate::models::{
    ConsistencyDay, NewWorkout, ProgressStats, StreakResult, WorkoutData, WorkoutRecord,
    WorkoutUpdate,
};
use crate::progress::calculate_progress_stats;
use crate::streaks::calculate_streaks;

/// Upper bound accepted for a single workout, in minutes
pub const MAX_DURATION_MINUTES: u32 = 480;

// ---------------------------------------------------------------------------
/// Error Handling
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Workout not found: {0}")]
    NotFound(String),

    #[error("Invalid workout: {0}")]
    InvalidWorkout(String),

    #[error("Invalid import: {0}")]
    InvalidImport(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

// ---------------------------------------------------------------------------
/// Store
// ---------------------------------------------------------------------------

pub struct WorkoutStore {
    pool: SqlitePool,
    key: String,
    write_lock: Mutex<()>,
}

impl WorkoutStore {
    pub fn new(pool: SqlitePool, key: impl Into<String>) -> Self {
        Self {
            pool,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the persisted document, substituting an empty one when the key is
    /// absent or its value does not parse
    pub async fn load(&self) -> Result<WorkoutData, StoreError> {
        let raw = sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = ?1")
            .bind(&self.key)
            .fetch_optional(&self.pool)
            .await?;

        let Some(raw) = raw else {
            return Ok(WorkoutData::default());
        };

        match serde_json::from_str::<WorkoutData>(&raw) {
            Ok(data) => Ok(data),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Stored workout data is unreadable, starting empty");
                Ok(WorkoutData::default())
            }
        }
    }

    /// Replace the stored collection with `workouts`
    pub async fn save(&self, workouts: Vec<WorkoutRecord>) -> Result<WorkoutData, StoreError> {
        let _guard = self.write_lock.lock().await;
        self.write_document(workouts).await
    }

    /// Write the document, refreshing the denormalized streak fields.
    /// Callers must hold `write_lock`.
    async fn write_document(&self, workouts: Vec<WorkoutRecord>) -> Result<WorkoutData, StoreError> {
        let data = with_streaks(workouts);
        let json = serde_json::to_string(&data)?;

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, CURRENT_TIMESTAMP)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(&self.key)
        .bind(json)
        .execute(&self.pool)
        .await?;

        tracing::debug!(
            key = %self.key,
            workouts = data.workouts.len(),
            current_streak = data.current_streak,
            "Saved workout data"
        );

        Ok(data)
    }

    /// Read-modify-write of the full collection under the write lock
    async fn mutate<T>(
        &self,
        f: impl FnOnce(&mut Vec<WorkoutRecord>) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut workouts = self.load().await?.workouts;
        let out = f(&mut workouts)?;
        self.write_document(workouts).await?;

        Ok(out)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Log a workout, dated today unless the request names a day
    pub async fn add_workout(&self, new: NewWorkout) -> Result<WorkoutRecord, StoreError> {
        validate_duration(new.duration)?;

        let record = WorkoutRecord {
            id: generate_workout_id(),
            date: new.date.unwrap_or_else(dates::today),
            workout_type: new.workout_type,
            duration: new.duration,
            calories: new.calories,
            notes: new.notes,
            completed_at: Utc::now(),
        };

        let added = record.clone();
        self.mutate(move |workouts| {
            workouts.push(record);
            Ok(())
        })
        .await?;

        tracing::info!(id = %added.id, date = %added.date, kind = %added.workout_type, "Workout added");
        Ok(added)
    }

    pub async fn remove_workout(&self, id: &str) -> Result<(), StoreError> {
        self.mutate(|workouts| {
            let before = workouts.len();
            workouts.retain(|w| w.id != id);
            if workouts.len() == before {
                return Err(StoreError::NotFound(id.to_string()));
            }
            Ok(())
        })
        .await?;

        tracing::info!(id, "Workout removed");
        Ok(())
    }

    pub async fn update_workout(
        &self,
        id: &str,
        update: WorkoutUpdate,
    ) -> Result<WorkoutRecord, StoreError> {
        if let Some(duration) = update.duration {
            validate_duration(duration)?;
        }

        let updated = self
            .mutate(|workouts| {
                let record = workouts
                    .iter_mut()
                    .find(|w| w.id == id)
                    .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
                update.apply(record);
                Ok(record.clone())
            })
            .await?;

        tracing::info!(id, "Workout updated");
        Ok(updated)
    }

    /// Remove the stored document entirely
    pub async fn clear_all(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(&self.key)
            .execute(&self.pool)
            .await?;

        tracing::info!(key = %self.key, "Cleared all workout data");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub async fn workouts(&self) -> Result<Vec<WorkoutRecord>, StoreError> {
        Ok(self.load().await?.workouts)
    }

    pub async fn workouts_for_date(&self, date: NaiveDate) -> Result<Vec<WorkoutRecord>, StoreError> {
        let mut workouts = self.workouts().await?;
        workouts.retain(|w| w.date == date);
        Ok(workouts)
    }

    pub async fn has_workout_on_date(&self, date: NaiveDate) -> Result<bool, StoreError> {
        Ok(self.workouts().await?.iter().any(|w| w.date == date))
    }

    pub async fn today_workouts(&self) -> Result<Vec<WorkoutRecord>, StoreError> {
        self.workouts_for_date(dates::today()).await
    }

    pub async fn is_today_completed(&self) -> Result<bool, StoreError> {
        self.has_workout_on_date(dates::today()).await
    }

    pub async fn streak_info(&self) -> Result<StreakResult, StoreError> {
        Ok(calculate_streaks(&self.workouts().await?))
    }

    pub async fn progress_stats(&self) -> Result<ProgressStats, StoreError> {
        Ok(calculate_progress_stats(&self.workouts().await?))
    }

    pub async fn consistency_grid(&self) -> Result<Vec<ConsistencyDay>, StoreError> {
        Ok(generate_consistency_grid(&self.workouts().await?))
    }

    // -----------------------------------------------------------------------
    // Import / Export
    // -----------------------------------------------------------------------

    /// The stored document as pretty-printed JSON
    pub async fn export_data(&self) -> Result<String, StoreError> {
        let data = self.load().await?;
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Replace the collection with the `workouts` array of an exported
    /// document. Streak fields in the input are ignored and recomputed.
    /// Returns the number of imported records.
    pub async fn import_data(&self, json: &str) -> Result<usize, StoreError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| StoreError::InvalidImport(format!("not valid JSON: {}", e)))?;

        let workouts = value
            .get("workouts")
            .filter(|w| w.is_array())
            .cloned()
            .ok_or_else(|| StoreError::InvalidImport("missing `workouts` array".to_string()))?;

        let workouts: Vec<WorkoutRecord> = serde_json::from_value(workouts)
            .map_err(|e| StoreError::InvalidImport(format!("malformed workout: {}", e)))?;

        let count = workouts.len();
        let _guard = self.write_lock.lock().await;
        self.write_document(workouts).await?;

        tracing::info!(count, "Imported workout data");
        Ok(count)
    }
}

/// Build the persisted document for `workouts` with fresh streak fields
pub fn with_streaks(workouts: Vec<WorkoutRecord>) -> WorkoutData {
    let streaks = calculate_streaks(&workouts);
    WorkoutData {
        workouts,
        current_streak: streaks.current_streak,
        longest_streak: streaks.longest_streak,
        last_workout_date: streaks.last_workout_date,
    }
}

pub fn generate_workout_id() -> String {
    format!("workout_{}", Uuid::new_v4().simple())
}

fn validate_duration(duration: u32) -> Result<(), StoreError> {
    if duration == 0 || duration > MAX_DURATION_MINUTES {
        return Err(StoreError::InvalidWorkout(format!(
            "duration must be between 1 and {} minutes, got {}",
            MAX_DURATION_MINUTES, duration
        )));
    }
    Ok(())
}
