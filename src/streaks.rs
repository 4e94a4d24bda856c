//! Streak calculator
//!
//! A streak is a run of consecutive calendar days that each have at least one
//! workout. Only the distinct set of days matters: three workouts on a Monday
//! count the same as one.
//!
//! - The current streak is alive while today or yesterday has a workout.
//!   Missing both breaks it, whatever happened before.
//! - The longest streak is the longest run anywhere in the history, the
//!   current one included.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

use crate::dates;
use crate::models::{StreakResult, WorkoutRecord};

/// Compute streaks relative to the local current day
pub fn calculate_streaks(workouts: &[WorkoutRecord]) -> StreakResult {
    calculate_streaks_on(workouts, dates::today())
}

/// Compute streaks as they stand on `today`
pub fn calculate_streaks_on(workouts: &[WorkoutRecord], today: NaiveDate) -> StreakResult {
    if workouts.is_empty() {
        return StreakResult::default();
    }

    let days = distinct_days(workouts);
    let yesterday = today - Duration::days(1);

    let is_today_completed = days.contains(&today);
    let is_yesterday_completed = days.contains(&yesterday);

    let current_streak = if is_today_completed {
        run_ending_at(&days, today)
    } else if is_yesterday_completed {
        run_ending_at(&days, yesterday)
    } else {
        0
    };

    StreakResult {
        current_streak,
        longest_streak: longest_run(&days),
        last_workout_date: days.iter().next_back().copied(),
        is_today_completed,
        is_yesterday_completed,
    }
}

/// Distinct workout days, ascending
pub fn distinct_days(workouts: &[WorkoutRecord]) -> BTreeSet<NaiveDate> {
    workouts.iter().map(|w| w.date).collect()
}

/// Length of the longest run of consecutive days in the set
fn longest_run(days: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    for &day in days {
        run = match prev {
            Some(p) if dates::day_difference(day, p) == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }

    longest
}

/// Count consecutive days present in the set, walking backward from `anchor`
fn run_ending_at(days: &BTreeSet<NaiveDate>, anchor: NaiveDate) -> u32 {
    let mut count = 0;
    let mut expected = anchor;

    // Newest first; anything after the anchor is skipped
    for &day in days.range(..=anchor).rev() {
        if day != expected {
            break;
        }
        count += 1;
        expected = day - Duration::days(1);
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{day, mock_workout, mock_workouts_on};

    fn today() -> NaiveDate {
        day(2024, 6, 12)
    }

    fn days_ago(n: i64) -> NaiveDate {
        today() - Duration::days(n)
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let result = calculate_streaks_on(&[], today());

        assert_eq!(result, StreakResult::default());
        assert_eq!(result.current_streak, 0);
        assert_eq!(result.longest_streak, 0);
        assert!(!result.is_today_completed);
        assert!(!result.is_yesterday_completed);
        assert!(result.last_workout_date.is_none());
    }

    #[test]
    fn test_single_workout_today() {
        let workouts = vec![mock_workout(today(), 45)];

        let result = calculate_streaks_on(&workouts, today());

        assert_eq!(result.current_streak, 1);
        assert_eq!(result.longest_streak, 1);
        assert!(result.is_today_completed);
        assert!(!result.is_yesterday_completed);
        assert_eq!(result.last_workout_date, Some(today()));
    }

    #[test]
    fn test_three_consecutive_days_ending_today() {
        let workouts = mock_workouts_on(&[today(), days_ago(1), days_ago(2)]);

        let result = calculate_streaks_on(&workouts, today());

        assert_eq!(result.current_streak, 3);
        assert_eq!(result.longest_streak, 3);
        assert!(result.is_today_completed);
        assert!(result.is_yesterday_completed);
    }

    #[test]
    fn test_gap_breaks_current_streak() {
        let workouts = mock_workouts_on(&[today(), days_ago(5)]);

        let result = calculate_streaks_on(&workouts, today());

        assert_eq!(result.current_streak, 1);
        assert_eq!(result.longest_streak, 1);
    }

    #[test]
    fn test_streak_survives_from_yesterday() {
        // Nothing logged yet today: the run ending yesterday still counts
        let workouts = mock_workouts_on(&[days_ago(1), days_ago(2), days_ago(3), days_ago(4)]);

        let result = calculate_streaks_on(&workouts, today());

        assert_eq!(result.current_streak, 4);
        assert_eq!(result.longest_streak, 4);
        assert!(!result.is_today_completed);
        assert!(result.is_yesterday_completed);
    }

    #[test]
    fn test_missing_today_and_yesterday_resets_current() {
        let workouts = mock_workouts_on(&[days_ago(2), days_ago(3), days_ago(4)]);

        let result = calculate_streaks_on(&workouts, today());

        assert_eq!(result.current_streak, 0);
        assert_eq!(result.longest_streak, 3);
        assert_eq!(result.last_workout_date, Some(days_ago(2)));
    }

    #[test]
    fn test_historical_run_is_longest() {
        // Active 2-day run, then a gap, then an isolated 10-day run
        let mut dates = vec![today(), days_ago(1)];
        dates.extend((20..30).map(days_ago));
        let workouts = mock_workouts_on(&dates);

        let result = calculate_streaks_on(&workouts, today());

        assert_eq!(result.longest_streak, 10);
        assert_eq!(result.current_streak, 2);
    }

    #[test]
    fn test_duplicate_days_count_once() {
        let workouts = vec![
            mock_workout(today(), 20),
            mock_workout(today(), 30),
            mock_workout(days_ago(1), 15),
            mock_workout(days_ago(1), 60),
            mock_workout(days_ago(1), 10),
        ];

        let result = calculate_streaks_on(&workouts, today());

        assert_eq!(result.current_streak, 2);
        assert_eq!(result.longest_streak, 2);
    }

    #[test]
    fn test_input_order_is_irrelevant() {
        let ordered = mock_workouts_on(&[days_ago(6), days_ago(5), days_ago(1), today()]);
        let mut shuffled = ordered.clone();
        shuffled.swap(0, 3);
        shuffled.swap(1, 2);

        assert_eq!(
            calculate_streaks_on(&ordered, today()),
            calculate_streaks_on(&shuffled, today())
        );
    }

    #[test]
    fn test_future_days_do_not_extend_current_streak() {
        let tomorrow = today() + Duration::days(1);
        let workouts = mock_workouts_on(&[tomorrow, today()]);

        let result = calculate_streaks_on(&workouts, today());

        assert_eq!(result.current_streak, 1);
        assert_eq!(result.longest_streak, 2);
        assert_eq!(result.last_workout_date, Some(tomorrow));
    }

    #[test]
    fn test_current_never_exceeds_longest() {
        let patterns: Vec<Vec<i64>> = vec![
            vec![],
            vec![0],
            vec![1],
            vec![0, 1, 2, 3],
            vec![0, 2, 4, 6],
            vec![1, 2, 3, 10, 11, 12, 13, 14],
            vec![0, 1, 5, 6, 7, 8, 9, 40],
            (0..120).step_by(3).collect(),
            (0..400).collect(),
        ];

        for offsets in patterns {
            let dates: Vec<NaiveDate> = offsets.iter().map(|&n| days_ago(n)).collect();
            let workouts = mock_workouts_on(&dates);
            let result = calculate_streaks_on(&workouts, today());

            assert!(
                result.current_streak <= result.longest_streak,
                "current {} > longest {} for {:?}",
                result.current_streak,
                result.longest_streak,
                offsets
            );
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let workouts = mock_workouts_on(&[today(), days_ago(1), days_ago(7)]);

        let first = calculate_streaks_on(&workouts, today());
        let second = calculate_streaks_on(&workouts, today());

        assert_eq!(first, second);
    }

    #[test]
    fn test_wall_clock_variant_uses_local_today() {
        let workouts = vec![mock_workout(dates::today(), 30)];

        let result = calculate_streaks(&workouts);

        assert!(result.is_today_completed);
        assert_eq!(result.current_streak, 1);
    }
}
