pub mod workout;
pub mod analysis;

pub use workout::{NewWorkout, WorkoutData, WorkoutRecord, WorkoutType, WorkoutUpdate};
pub use analysis::{
  current_streak_caption, longest_streak_caption, ConsistencyDay, ConsistencyLevel, Intensity,
  ProgressStats, StreakMilestone, StreakResult, StreakStatus,
};
