use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current and longest streak derived from the distinct workout days
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakResult {
  pub current_streak: u32,
  pub longest_streak: u32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_workout_date: Option<NaiveDate>,
  pub is_today_completed: bool,
  pub is_yesterday_completed: bool,
}

/// Coarse bucket for the summed duration of one day's workouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
  #[default]
  Low,
  Medium,
  High,
}

impl Intensity {
  /// >= 60 min is high, >= 30 min medium, anything less low
  pub fn from_total_minutes(minutes: u32) -> Self {
    match minutes {
      m if m >= 60 => Intensity::High,
      m if m >= 30 => Intensity::Medium,
      _ => Intensity::Low,
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      Intensity::Low => "Low intensity",
      Intensity::Medium => "Medium intensity",
      Intensity::High => "High intensity",
    }
  }
}

/// One cell of the yearly consistency grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyDay {
  pub date: NaiveDate,
  pub has_workout: bool,
  pub workout_count: u32,
  /// Meaningless when `has_workout` is false; renderers gate on that first
  pub intensity: Intensity,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
  /// Workouts this week over a fixed 7, as a rounded percentage
  pub weekly_consistency: u32,
  /// Workouts this month over the days in the month, as a rounded percentage
  pub monthly_consistency: u32,
  pub total_workouts: u32,
  /// Rounded to one decimal
  pub average_workouts_per_week: f64,
  pub current_week_workouts: u32,
  pub current_month_workouts: u32,
}

/// Qualitative band for a consistency percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyLevel {
  Excellent,
  Good,
  Fair,
  NeedsWork,
}

impl ConsistencyLevel {
  pub fn from_percentage(pct: u32) -> Self {
    match pct {
      p if p >= 80 => ConsistencyLevel::Excellent,
      p if p >= 60 => ConsistencyLevel::Good,
      p if p >= 40 => ConsistencyLevel::Fair,
      _ => ConsistencyLevel::NeedsWork,
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      ConsistencyLevel::Excellent => "Excellent",
      ConsistencyLevel::Good => "Good",
      ConsistencyLevel::Fair => "Fair",
      ConsistencyLevel::NeedsWork => "Needs Work",
    }
  }

  pub fn message(&self) -> &'static str {
    match self {
      ConsistencyLevel::Excellent => "Outstanding performance!",
      ConsistencyLevel::Good => "Great progress!",
      ConsistencyLevel::Fair => "Keep improving!",
      ConsistencyLevel::NeedsWork => "Time to step up!",
    }
  }
}

/// Where the user stands relative to their own record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakStatus {
  NoActiveStreak,
  PersonalBest,
  Building,
}

impl StreakStatus {
  pub fn from_result(result: &StreakResult) -> Self {
    if result.current_streak == 0 {
      StreakStatus::NoActiveStreak
    } else if result.current_streak == result.longest_streak {
      StreakStatus::PersonalBest
    } else {
      StreakStatus::Building
    }
  }
}

/// Achievement tiers for the current streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakMilestone {
  OneWeek,
  OneMonth,
  HundredDays,
}

impl StreakMilestone {
  pub const ALL: [StreakMilestone; 3] = [
    StreakMilestone::OneWeek,
    StreakMilestone::OneMonth,
    StreakMilestone::HundredDays,
  ];

  pub fn days(&self) -> u32 {
    match self {
      StreakMilestone::OneWeek => 7,
      StreakMilestone::OneMonth => 30,
      StreakMilestone::HundredDays => 100,
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      StreakMilestone::OneWeek => "7 days",
      StreakMilestone::OneMonth => "30 days",
      StreakMilestone::HundredDays => "100 days",
    }
  }

  /// Tiers reached by a streak of `days`, lowest first
  pub fn reached(days: u32) -> Vec<StreakMilestone> {
    Self::ALL.into_iter().filter(|m| days >= m.days()).collect()
  }

  /// The next tier still ahead, if any
  pub fn next(days: u32) -> Option<StreakMilestone> {
    Self::ALL.into_iter().find(|m| days < m.days())
  }
}

/// Caption under the current streak counter
pub fn current_streak_caption(days: u32) -> String {
  match days {
    0 => "Start your streak today!".to_string(),
    n => day_count(n),
  }
}

/// Caption under the longest streak counter
pub fn longest_streak_caption(days: u32) -> String {
  match days {
    0 => "No streak yet".to_string(),
    n => day_count(n),
  }
}

fn day_count(days: u32) -> String {
  if days == 1 {
    "1 day".to_string()
  } else {
    format!("{} days", days)
  }
}
