use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
  Cardio,
  Strength,
  Flexibility,
  Sports,
  Yoga,
  Pilates,
  Hiit,
  Other,
}

impl WorkoutType {
  pub const ALL: [WorkoutType; 8] = [
    WorkoutType::Cardio,
    WorkoutType::Strength,
    WorkoutType::Flexibility,
    WorkoutType::Sports,
    WorkoutType::Yoga,
    WorkoutType::Pilates,
    WorkoutType::Hiit,
    WorkoutType::Other,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      WorkoutType::Cardio => "cardio",
      WorkoutType::Strength => "strength",
      WorkoutType::Flexibility => "flexibility",
      WorkoutType::Sports => "sports",
      WorkoutType::Yoga => "yoga",
      WorkoutType::Pilates => "pilates",
      WorkoutType::Hiit => "hiit",
      WorkoutType::Other => "other",
    }
  }

  /// Human-readable name shown next to logged workouts
  pub fn display_name(&self) -> &'static str {
    match self {
      WorkoutType::Cardio => "Cardio",
      WorkoutType::Strength => "Strength Training",
      WorkoutType::Flexibility => "Flexibility",
      WorkoutType::Sports => "Sports",
      WorkoutType::Yoga => "Yoga",
      WorkoutType::Pilates => "Pilates",
      WorkoutType::Hiit => "HIIT",
      WorkoutType::Other => "Other",
    }
  }
}

impl std::fmt::Display for WorkoutType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for WorkoutType {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    WorkoutType::ALL
      .into_iter()
      .find(|t| t.as_str() == s)
      .ok_or_else(|| format!("Unknown workout type: {}", s))
  }
}

/// A single logged workout. Several records may share the same `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
  pub id: String,
  /// Calendar day the workout counts towards (`YYYY-MM-DD`)
  pub date: NaiveDate,
  #[serde(rename = "type")]
  pub workout_type: WorkoutType,
  /// Minutes
  pub duration: u32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub calories: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,
  /// Informational only, never used by the analytics
  pub completed_at: DateTime<Utc>,
}

/// For logging new workouts (without id, completed_at)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkout {
  #[serde(rename = "type")]
  pub workout_type: WorkoutType,
  pub duration: u32,
  #[serde(default)]
  pub calories: Option<u32>,
  #[serde(default)]
  pub notes: Option<String>,
  /// Defaults to today when absent
  #[serde(default)]
  pub date: Option<NaiveDate>,
}

/// Partial update applied to an existing record; `None` keeps the current value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutUpdate {
  #[serde(default, rename = "type")]
  pub workout_type: Option<WorkoutType>,
  #[serde(default)]
  pub duration: Option<u32>,
  #[serde(default)]
  pub calories: Option<u32>,
  #[serde(default)]
  pub notes: Option<String>,
  #[serde(default)]
  pub date: Option<NaiveDate>,
}

impl WorkoutUpdate {
  pub fn apply(&self, record: &mut WorkoutRecord) {
    if let Some(workout_type) = self.workout_type {
      record.workout_type = workout_type;
    }
    if let Some(duration) = self.duration {
      record.duration = duration;
    }
    if let Some(calories) = self.calories {
      record.calories = Some(calories);
    }
    if let Some(notes) = &self.notes {
      record.notes = Some(notes.clone());
    }
    if let Some(date) = self.date {
      record.date = date;
    }
  }
}

/// Persisted document: the record collection plus denormalized streak fields.
///
/// The streak fields are rewritten on every save and never read back by the
/// analytics, which always recompute from `workouts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutData {
  pub workouts: Vec<WorkoutRecord>,
  #[serde(default)]
  pub current_streak: u32,
  #[serde(default)]
  pub longest_streak: u32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_workout_date: Option<NaiveDate>,
}
