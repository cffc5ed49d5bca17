use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::util::unicode::truncate_graphemes;

/// Maximum length of a habit name, in grapheme clusters
pub const NAME_CHAR_LIMIT: usize = 22;
/// Maximum length of a habit note, in grapheme clusters
pub const NOTE_CHAR_LIMIT: usize = 35;

/// Day of the week a habit is scheduled on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    /// All days in display order (week starts on Sunday)
    pub const ALL: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    /// Three-letter code, as stored in the habit file
    pub fn code(self) -> &'static str {
        match self {
            Weekday::Sun => "Sun",
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
        }
    }

    /// Lowercase full name, accepted on input
    pub fn full_name(self) -> &'static str {
        match self {
            Weekday::Sun => "sunday",
            Weekday::Mon => "monday",
            Weekday::Tue => "tuesday",
            Weekday::Wed => "wednesday",
            Weekday::Thu => "thursday",
            Weekday::Fri => "friday",
            Weekday::Sat => "saturday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Weekday::Sun,
            chrono::Weekday::Mon => Weekday::Mon,
            chrono::Weekday::Tue => Weekday::Tue,
            chrono::Weekday::Wed => Weekday::Wed,
            chrono::Weekday::Thu => Weekday::Thu,
            chrono::Weekday::Fri => Weekday::Fri,
            chrono::Weekday::Sat => Weekday::Sat,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Weekday {
    type Err = String;

    /// Accepts `mon`, `Mon`, `monday`, ... (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| lower == day.code().to_ascii_lowercase() || lower == day.full_name())
            .ok_or_else(|| format!("unknown weekday: {}", s))
    }
}

/// Parse a comma-separated weekday list like `Mon,Wed,Fri`. `all` selects every day.
pub fn parse_weekday_list(s: &str) -> Result<Vec<Weekday>, String> {
    if s.trim().eq_ignore_ascii_case("all") {
        return Ok(Weekday::ALL.to_vec());
    }
    let mut days = s
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(Weekday::from_str)
        .collect::<Result<Vec<_>, _>>()?;
    days.sort();
    days.dedup();
    Ok(days)
}

/// A recurring habit, one line of the habit file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Habit {
    pub name: String,
    pub note: String,
    /// Days the habit shows up in the today view. Stored in file order.
    pub weekdays: Vec<Weekday>,
    /// Drawn with the highlight color
    pub highlight: bool,
    /// Completed today
    pub checked: bool,
}

impl Habit {
    /// Whether this habit is scheduled on `day`
    pub fn is_scheduled_on(&self, day: Weekday) -> bool {
        self.weekdays.contains(&day)
    }
}

/// The values a create or edit form produces
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitDraft {
    pub name: String,
    pub note: String,
    pub weekdays: Vec<Weekday>,
    pub highlight: bool,
}

impl HabitDraft {
    /// Prefill a draft from an existing habit (edit form)
    pub fn from_habit(habit: &Habit) -> Self {
        HabitDraft {
            name: habit.name.clone(),
            note: habit.note.clone(),
            weekdays: habit.weekdays.clone(),
            highlight: habit.highlight,
        }
    }

    /// Build the habit record. Text is cut to the length limits, weekdays
    /// are put in Sun..Sat order, and the habit starts unchecked.
    pub fn build(&self) -> Habit {
        let mut weekdays = self.weekdays.clone();
        weekdays.sort();
        weekdays.dedup();
        Habit {
            name: truncate_graphemes(&self.name, NAME_CHAR_LIMIT),
            note: truncate_graphemes(&self.note, NOTE_CHAR_LIMIT),
            weekdays,
            highlight: self.highlight,
            checked: false,
        }
    }
}
