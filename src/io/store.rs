use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use log::{info, warn};

use crate::io::config_io;
use crate::io::lock::LockError;
use crate::io::recovery::{self, RecoveryCategory, RecoveryEntry};
use crate::model::habit::Habit;
use crate::model::session::Session;
use crate::model::streak::Streak;
use crate::ops::rollover::{self, DayStart};
use crate::parse::{CodecError, parse_habits, parse_streak, serialize_habits, serialize_streak};

/// File name of the habit list
pub const HABIT_FILE_NAME: &str = "habits.json";
/// File name of the streak day list
pub const STREAK_FILE_NAME: &str = "streak.txt";

/// Error type for loading and saving session state
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse { path: PathBuf, source: CodecError },
    #[error("could not encode habits: {0}")]
    Encode(CodecError),
    #[error("could not parse {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error(transparent)]
    Lock(#[from] LockError),
    #[error("no data directory: set JH_DATA_DIR or HOME, or pass --data-dir")]
    NoDataDir,
}

/// Read a whole file, mapping "not found" to None
fn read_optional(path: &Path) -> Result<Option<String>, StoreError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StoreError::Read {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

// ---------------------------------------------------------------------------
// Habit file
// ---------------------------------------------------------------------------

/// Load the habit list. `Ok(None)` means the file does not exist (first run).
pub fn load_habits(path: &Path) -> Result<Option<Vec<Habit>>, StoreError> {
    let Some(text) = read_optional(path)? else {
        return Ok(None);
    };
    parse_habits(&text)
        .map(Some)
        .map_err(|e| StoreError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Overwrite the habit file with one record per line, in list order.
pub fn save_habits(path: &Path, habits: &[Habit]) -> Result<(), StoreError> {
    let content = serialize_habits(habits).map_err(StoreError::Encode)?;
    write_with_recovery(path, &content, "habit")
}

// ---------------------------------------------------------------------------
// Streak file
// ---------------------------------------------------------------------------

/// Load the streak. A missing or empty file starts a new streak on `today`.
pub fn load_streak(path: &Path, today: NaiveDate) -> Result<Streak, StoreError> {
    let Some(text) = read_optional(path)? else {
        return Ok(Streak::seeded(today));
    };
    let days = parse_streak(&text).map_err(|e| StoreError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    if days.is_empty() {
        warn!("{} is empty; starting a new streak", path.display());
    }
    Ok(Streak::from_days(days, today))
}

/// Overwrite the streak file with one date per line.
pub fn save_streak(path: &Path, streak: &Streak) -> Result<(), StoreError> {
    write_with_recovery(path, &serialize_streak(streak.days()), "streak")
}

/// Atomic write; on failure the content goes to the recovery log so it is
/// not lost with the process.
fn write_with_recovery(path: &Path, content: &str, what: &str) -> Result<(), StoreError> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let result = fs::create_dir_all(dir).and_then(|_| recovery::atomic_write(path, content.as_bytes()));
    if let Err(e) = result {
        log::error!("{} write to {} failed: {}", what, path.display(), e);
        recovery::log_recovery(
            dir,
            RecoveryEntry {
                timestamp: Utc::now(),
                category: RecoveryCategory::Write,
                description: format!("{} write failed", what),
                fields: vec![
                    ("Target".to_string(), path.display().to_string()),
                    ("Error".to_string(), e.to_string()),
                ],
                body: content.to_string(),
            },
        );
        return Err(StoreError::Write {
            path: path.to_path_buf(),
            source: e,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Load everything for a session running on `today` and bring it up to
/// date: the streak is normalized and yesterday's checks are cleared.
pub fn load_session(data_dir: &Path, today: NaiveDate) -> Result<(Session, DayStart), StoreError> {
    let config = config_io::read_config(data_dir)?;
    let loaded = load_habits(&data_dir.join(HABIT_FILE_NAME))?;
    let first_run = loaded.is_none();
    let mut habits = loaded.unwrap_or_default();
    let mut streak = load_streak(&data_dir.join(STREAK_FILE_NAME), today)?;

    let day_start = rollover::start_day(&mut habits, &mut streak, today);
    info!(
        "session loaded from {}: {} habits, streak {} days, first_run={}",
        data_dir.display(),
        habits.len(),
        streak.days().len(),
        first_run
    );

    let session = Session {
        data_dir: data_dir.to_path_buf(),
        config,
        habits,
        streak,
        today,
        first_run,
    };
    Ok((session, day_start))
}

/// Write both lists back. Both writes are attempted even if the first fails.
pub fn save_session(session: &Session) -> Result<(), StoreError> {
    let habits = save_habits(&session.data_dir.join(HABIT_FILE_NAME), &session.habits);
    let streak = save_streak(&session.data_dir.join(STREAK_FILE_NAME), &session.streak);
    habits?;
    streak?;
    info!(
        "session saved to {}: {} habits, streak {} days",
        session.data_dir.display(),
        session.habits.len(),
        session.streak.days().len()
    );
    Ok(())
}
