use chrono::NaiveDate;

use crate::model::streak::{GRACE_PERIOD_DAYS, GrowthStage, Streak};

/// Whole calendar days between the last active day and `today`.
/// Negative when the clock went backwards since the last session.
pub fn days_since_active(streak: &Streak, today: NaiveDate) -> i64 {
    (today - streak.last()).num_days()
}

/// Reset the streak to `[today]` when the gap since the last active day
/// exceeds the grace period. Otherwise the streak is left as is, even if
/// today is not in it yet.
///
/// Returns true if the streak was reset.
pub fn normalize(streak: &mut Streak, today: NaiveDate) -> bool {
    let gap = days_since_active(streak, today);
    if gap > GRACE_PERIOD_DAYS {
        let days = streak.days_mut();
        days.clear();
        days.push(today);
        true
    } else {
        false
    }
}

/// Append `today` unless it is already the last active day.
///
/// A last day later than `today` (clock moved back) also counts as already
/// recorded, so the list never goes backwards.
///
/// Returns true if a day was added.
pub fn record_activity(streak: &mut Streak, today: NaiveDate) -> bool {
    if streak.last() >= today {
        return false;
    }
    streak.days_mut().push(today);
    true
}

/// Whether `today` differs from the last active day
pub fn is_new_day(streak: &Streak, today: NaiveDate) -> bool {
    streak.last() != today
}

/// Streak length: the number of recorded active days.
///
/// Gaps within the grace period are not penalized; every stored day counts.
pub fn length(streak: &Streak) -> usize {
    streak.days().len()
}

/// Growth stage of the plant for the current streak
pub fn growth_stage(streak: &Streak) -> GrowthStage {
    GrowthStage::for_length(length(streak))
}
