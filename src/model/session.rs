use std::path::PathBuf;

use chrono::NaiveDate;

use super::config::AppConfig;
use super::habit::{Habit, Weekday};
use super::streak::Streak;

/// Everything one run of the app owns: loaded at start, saved once at exit
#[derive(Debug, Clone)]
pub struct Session {
    /// Directory holding `habits.json`, `streak.txt` and `config.toml`
    pub data_dir: PathBuf,
    /// Parsed config.toml (defaults if absent)
    pub config: AppConfig,
    /// Habits in display order
    pub habits: Vec<Habit>,
    pub streak: Streak,
    /// Calendar date the session runs on
    pub today: NaiveDate,
    /// No habit file existed when the session was loaded
    pub first_run: bool,
}

impl Session {
    /// Weekday of `today`, used to filter the today view
    pub fn weekday(&self) -> Weekday {
        use chrono::Datelike;
        Weekday::from(self.today.weekday())
    }
}
