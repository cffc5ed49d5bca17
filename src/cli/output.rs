use serde::Serialize;

use crate::model::habit::{Habit, Weekday};
use crate::model::streak::{GrowthStage, Streak};
use crate::ops::streak_ops;
use crate::parse::DATE_FORMAT;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct HabitJson {
    /// 1-based position in the full list
    pub index: usize,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub note: String,
    pub weekdays: Vec<Weekday>,
    pub highlight: bool,
    pub checked: bool,
}

#[derive(Serialize)]
pub struct StreakJson {
    pub length: usize,
    pub stage: GrowthStage,
    pub first: String,
    pub last: String,
    pub days: Vec<String>,
}

#[derive(Serialize)]
pub struct TodayJson {
    pub date: String,
    pub weekday: Weekday,
    pub streak: usize,
    pub stage: GrowthStage,
    pub habits: Vec<HabitJson>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// `position` is the 0-based index in the full list
pub fn habit_to_json(position: usize, habit: &Habit) -> HabitJson {
    HabitJson {
        index: position + 1,
        name: habit.name.clone(),
        note: habit.note.clone(),
        weekdays: habit.weekdays.clone(),
        highlight: habit.highlight,
        checked: habit.checked,
    }
}

pub fn streak_to_json(streak: &Streak) -> StreakJson {
    StreakJson {
        length: streak_ops::length(streak),
        stage: streak_ops::growth_stage(streak),
        first: streak.first().format(DATE_FORMAT).to_string(),
        last: streak.last().format(DATE_FORMAT).to_string(),
        days: streak
            .days()
            .iter()
            .map(|d| d.format(DATE_FORMAT).to_string())
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Weekday set as a compact label: `every day`, `weekdays`, or `Mon Wed Fri`
pub fn format_weekdays(days: &[Weekday]) -> String {
    if days.is_empty() {
        return "never".to_string();
    }
    if Weekday::ALL.iter().all(|d| days.contains(d)) {
        return "every day".to_string();
    }
    let workweek = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];
    if days.len() == workweek.len() && workweek.iter().all(|d| days.contains(d)) {
        return "weekdays".to_string();
    }
    days.iter().map(|d| d.code()).collect::<Vec<_>>().join(" ")
}

/// One line of `jh today`: `[x] Floss  (note)`
pub fn format_today_line(habit: &Habit) -> String {
    let mark = if habit.checked { 'x' } else { ' ' };
    let star = if habit.highlight { "* " } else { "" };
    if habit.note.is_empty() {
        format!("[{}] {}{}", mark, star, habit.name)
    } else {
        format!("[{}] {}{}  ({})", mark, star, habit.name, habit.note)
    }
}

/// One line of `jh list`: index, check state, name and schedule
pub fn format_list_line(position: usize, habit: &Habit) -> String {
    let mark = if habit.checked { 'x' } else { ' ' };
    let star = if habit.highlight { " *" } else { "" };
    let mut line = format!(
        "{:>3}. [{}] {}{}  {}",
        position + 1,
        mark,
        habit.name,
        star,
        format_weekdays(&habit.weekdays)
    );
    if !habit.note.is_empty() {
        line.push_str(&format!("  ({})", habit.note));
    }
    line
}

/// Short streak summary used by `jh today` and `jh streak`
pub fn format_streak_summary(streak: &Streak) -> String {
    let len = streak_ops::length(streak);
    let unit = if len == 1 { "day" } else { "days" };
    format!(
        "streak: {} {} (stage {}/7)",
        len,
        unit,
        streak_ops::growth_stage(streak).number()
    )
}
