use chrono::NaiveDate;

use crate::model::habit::{Habit, Weekday};
use crate::model::streak::Streak;
use crate::ops::streak_ops;

// ---------------------------------------------------------------------------
// Create / edit / delete
// ---------------------------------------------------------------------------

/// Insert `record` into the list.
///
/// With `existing` present in the list, `record` replaces it at the same
/// position (edit). Otherwise `record` is appended (create). Returns the
/// index the record ended up at.
pub fn append_or_replace(habits: &mut Vec<Habit>, record: Habit, existing: Option<&Habit>) -> usize {
    if let Some(old) = existing
        && let Some(idx) = habits.iter().position(|h| h == old)
    {
        habits[idx] = record;
        return idx;
    }
    habits.push(record);
    habits.len() - 1
}

/// Replace the habit at `index`, keeping its position. Appends when the
/// index is past the end.
pub fn replace_at(habits: &mut Vec<Habit>, index: usize, record: Habit) -> usize {
    match habits.get_mut(index) {
        Some(slot) => {
            *slot = record;
            index
        }
        None => {
            habits.push(record);
            habits.len() - 1
        }
    }
}

/// Remove the first habit equal to `record`. Returns the removed habit, or
/// None if it was no longer in the list.
pub fn remove(habits: &mut Vec<Habit>, record: &Habit) -> Option<Habit> {
    let idx = habits.iter().position(|h| h == record)?;
    Some(habits.remove(idx))
}

/// Remove the habit at `index`, if there is one.
pub fn remove_at(habits: &mut Vec<Habit>, index: usize) -> Option<Habit> {
    if index < habits.len() {
        Some(habits.remove(index))
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Reorder
// ---------------------------------------------------------------------------

/// Exchange the habit at `index` with the one `delta` positions away.
///
/// Out-of-bounds targets leave the list untouched. Returns the habit's new
/// index when a swap happened.
pub fn swap_at(habits: &mut [Habit], index: usize, delta: isize) -> Option<usize> {
    if index >= habits.len() {
        return None;
    }
    let target = index.checked_add_signed(delta)?;
    if target >= habits.len() {
        return None;
    }
    habits.swap(index, target);
    Some(target)
}

/// Move `record` by `delta` positions by exchanging it with the habit
/// currently there. A missing record or out-of-bounds target is a no-op.
pub fn swap_adjacent(habits: &mut [Habit], record: &Habit, delta: isize) -> Option<usize> {
    let idx = habits.iter().position(|h| h == record)?;
    swap_at(habits, idx, delta)
}

// ---------------------------------------------------------------------------
// Check-off
// ---------------------------------------------------------------------------

/// Set a habit's checked flag. Checking a habit also records today as an
/// active day of the streak (once per day, no matter how many habits).
pub fn set_checked(habit: &mut Habit, value: bool, streak: &mut Streak, today: NaiveDate) {
    if value {
        streak_ops::record_activity(streak, today);
    }
    habit.checked = value;
}

/// Clear every habit's checked flag (start of a new day)
pub fn uncheck_all(habits: &mut [Habit]) {
    for habit in habits.iter_mut() {
        habit.checked = false;
    }
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// Habits scheduled on `day`, in list order. The iterator borrows the list
/// and can be cloned to walk it again.
pub fn filter_for_today(
    habits: &[Habit],
    day: Weekday,
) -> impl Iterator<Item = &Habit> + Clone + '_ {
    habits.iter().filter(move |h| h.is_scheduled_on(day))
}

/// List positions of the habits scheduled on `day`
pub fn positions_for_day(habits: &[Habit], day: Weekday) -> Vec<usize> {
    habits
        .iter()
        .enumerate()
        .filter(|(_, h)| h.is_scheduled_on(day))
        .map(|(i, _)| i)
        .collect()
}
