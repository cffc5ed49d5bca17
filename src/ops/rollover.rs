use chrono::NaiveDate;
use log::info;

use crate::model::habit::Habit;
use crate::model::streak::Streak;
use crate::ops::{habit_ops, streak_ops};

/// What happened when a session started on `today`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayStart {
    /// The grace period was exceeded and the streak restarted today
    pub streak_reset: bool,
    /// Today differs from the last active day; all checks were cleared
    pub new_day: bool,
}

/// Bring loaded state up to `today`: normalize the streak first, then clear
/// yesterday's checks if this is a new day.
pub fn start_day(habits: &mut [Habit], streak: &mut Streak, today: NaiveDate) -> DayStart {
    let last_active = streak.last();
    let streak_reset = streak_ops::normalize(streak, today);
    if streak_reset {
        info!(
            "streak reset: last active {} is more than the grace period before {}",
            last_active, today
        );
    }

    let new_day = streak_ops::is_new_day(streak, today);
    if new_day {
        habit_ops::uncheck_all(habits);
        info!("new day {}: cleared checks on {} habits", today, habits.len());
    }

    DayStart {
        streak_reset,
        new_day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::habit::{HabitDraft, Weekday};
    use pretty_assertions::assert_eq;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn checked_habits() -> Vec<Habit> {
        let mut habits: Vec<Habit> = ["Read", "Run"]
            .iter()
            .map(|name| {
                HabitDraft {
                    name: name.to_string(),
                    weekdays: vec![Weekday::Mon],
                    ..Default::default()
                }
                .build()
            })
            .collect();
        for h in &mut habits {
            h.checked = true;
        }
        habits
    }

    #[test]
    fn same_day_keeps_checks() {
        let mut habits = checked_habits();
        let mut streak = Streak::seeded(d("2024-01-02"));
        let start = start_day(&mut habits, &mut streak, d("2024-01-02"));
        assert_eq!(start, DayStart::default());
        assert!(habits.iter().all(|h| h.checked));
    }

    #[test]
    fn next_day_clears_checks_keeps_streak() {
        let mut habits = checked_habits();
        let mut streak = Streak::seeded(d("2024-01-01"));
        let start = start_day(&mut habits, &mut streak, d("2024-01-02"));
        assert_eq!(
            start,
            DayStart {
                streak_reset: false,
                new_day: true
            }
        );
        assert!(habits.iter().all(|h| !h.checked));
        assert_eq!(streak.days(), &[d("2024-01-01")]);
    }

    #[test]
    fn reset_streak_is_not_a_new_day() {
        // After a reset the streak's last day is today, so checks survive.
        let mut habits = checked_habits();
        let mut streak = Streak::seeded(d("2024-01-01"));
        let start = start_day(&mut habits, &mut streak, d("2024-01-05"));
        assert_eq!(
            start,
            DayStart {
                streak_reset: true,
                new_day: false
            }
        );
        assert_eq!(streak.days(), &[d("2024-01-05")]);
        assert!(habits.iter().all(|h| h.checked));
    }
}
