use std::error::Error;
use std::path::Path;

use log::info;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::lock::SessionLock;
use crate::io::recovery;
use crate::io::store;
use crate::model::habit::{HabitDraft, parse_weekday_list};
use crate::model::session::Session;
use crate::ops::{habit_ops, streak_ops};
use crate::parse::DATE_FORMAT;

type CmdResult = Result<(), Box<dyn Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run one subcommand against the data directory.
pub fn dispatch(command: Commands, json: bool, data_dir: &Path) -> CmdResult {
    match command {
        // Read commands
        Commands::Today => with_session(data_dir, |s| cmd_today(s, json)),
        Commands::List => with_session(data_dir, |s| cmd_list(s, json)),
        Commands::Streak => with_session(data_dir, |s| cmd_streak(s, json)),

        // Write commands
        Commands::Add(args) => with_session(data_dir, |s| cmd_add(s, args)),
        Commands::Edit(args) => with_session(data_dir, |s| cmd_edit(s, args)),
        Commands::Check(args) => with_session(data_dir, |s| cmd_set_checked(s, args.index, true)),
        Commands::Uncheck(args) => {
            with_session(data_dir, |s| cmd_set_checked(s, args.index, false))
        }
        Commands::Mv(args) => with_session(data_dir, |s| cmd_mv(s, args)),
        Commands::Rm(args) => with_session(data_dir, |s| cmd_rm(s, args)),

        // The recovery log is outside the session files
        Commands::Recovery(args) => cmd_recovery(data_dir, args, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// One CLI session: lock, load and roll over to today, run `f`, save once.
///
/// State is saved even for read commands because loading may have reset
/// the streak or cleared yesterday's checks. Nothing is saved when `f`
/// fails.
fn with_session<F>(data_dir: &Path, f: F) -> CmdResult
where
    F: FnOnce(&mut Session) -> CmdResult,
{
    let _lock = SessionLock::acquire_default(data_dir)?;
    let today = chrono::Local::now().date_naive();
    let (mut session, _) = store::load_session(data_dir, today)?;
    f(&mut session)?;
    store::save_session(&session)?;
    Ok(())
}

/// Turn a 1-based index from the command line into a list position.
fn resolve_index(session: &Session, index: usize) -> Result<usize, Box<dyn Error>> {
    let count = session.habits.len();
    if index == 0 || index > count {
        return Err(match count {
            0 => format!("no habit at index {}: the list is empty", index).into(),
            _ => format!("no habit at index {} (valid: 1-{})", index, count).into(),
        });
    }
    Ok(index - 1)
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_today(session: &mut Session, json: bool) -> CmdResult {
    let day = session.weekday();
    let positions = habit_ops::positions_for_day(&session.habits, day);

    if json {
        let out = TodayJson {
            date: session.today.format(DATE_FORMAT).to_string(),
            weekday: day,
            streak: streak_ops::length(&session.streak),
            stage: streak_ops::growth_stage(&session.streak),
            habits: positions
                .iter()
                .map(|&i| habit_to_json(i, &session.habits[i]))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{} ({})", session.today.format(DATE_FORMAT), day);
    println!("{}", format_streak_summary(&session.streak));
    if positions.is_empty() {
        println!("nothing scheduled today");
    }
    for habit in habit_ops::filter_for_today(&session.habits, day) {
        println!("{}", format_today_line(habit));
    }
    Ok(())
}

fn cmd_list(session: &mut Session, json: bool) -> CmdResult {
    if json {
        let out: Vec<HabitJson> = session
            .habits
            .iter()
            .enumerate()
            .map(|(i, h)| habit_to_json(i, h))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    if session.habits.is_empty() {
        println!("no habits yet: add one with `jh add NAME`");
    }
    for (i, habit) in session.habits.iter().enumerate() {
        println!("{}", format_list_line(i, habit));
    }
    Ok(())
}

fn cmd_streak(session: &mut Session, json: bool) -> CmdResult {
    if json {
        println!("{}", serde_json::to_string_pretty(&streak_to_json(&session.streak))?);
        return Ok(());
    }
    println!("{}", format_streak_summary(&session.streak));
    println!(
        "active since {}, last active {}",
        session.streak.first().format(DATE_FORMAT),
        session.streak.last().format(DATE_FORMAT)
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(session: &mut Session, args: AddArgs) -> CmdResult {
    let draft = HabitDraft {
        name: args.name,
        note: args.note,
        weekdays: parse_weekday_list(&args.days)?,
        highlight: args.highlight,
    };
    if draft.name.trim().is_empty() {
        return Err("habit name cannot be empty".into());
    }
    let record = draft.build();
    let name = record.name.clone();
    let idx = habit_ops::append_or_replace(&mut session.habits, record, None);
    info!("added habit {:?} at {}", name, idx);
    println!("added {}. {}", idx + 1, name);
    Ok(())
}

fn cmd_edit(session: &mut Session, args: EditArgs) -> CmdResult {
    let pos = resolve_index(session, args.index)?;
    let existing = session.habits[pos].clone();

    let mut draft = HabitDraft::from_habit(&existing);
    if let Some(name) = args.name {
        if name.trim().is_empty() {
            return Err("habit name cannot be empty".into());
        }
        draft.name = name;
    }
    if let Some(note) = args.note {
        draft.note = note;
    }
    if let Some(days) = args.days {
        draft.weekdays = parse_weekday_list(&days)?;
    }
    if args.highlight {
        draft.highlight = true;
    } else if args.no_highlight {
        draft.highlight = false;
    }

    let record = draft.build();
    let name = record.name.clone();
    let idx = habit_ops::replace_at(&mut session.habits, pos, record);
    info!("edited habit {:?} at {}", name, idx);
    println!("updated {}. {}", idx + 1, name);
    Ok(())
}

fn cmd_set_checked(session: &mut Session, index: usize, value: bool) -> CmdResult {
    let pos = resolve_index(session, index)?;
    let today = session.today;
    let habit = &mut session.habits[pos];
    habit_ops::set_checked(habit, value, &mut session.streak, today);
    info!("habit {:?} checked={}", habit.name, value);
    println!("{}", format_today_line(habit));
    Ok(())
}

fn cmd_mv(session: &mut Session, args: MvArgs) -> CmdResult {
    let pos = resolve_index(session, args.index)?;
    match habit_ops::swap_at(&mut session.habits, pos, args.delta()) {
        Some(new_pos) => {
            info!("moved habit from {} to {}", pos, new_pos);
            println!("moved {}. {}", new_pos + 1, session.habits[new_pos].name);
        }
        None => println!("unchanged: {}. {}", pos + 1, session.habits[pos].name),
    }
    Ok(())
}

fn cmd_rm(session: &mut Session, args: RmArgs) -> CmdResult {
    let pos = resolve_index(session, args.index)?;
    if !args.yes {
        return Err(format!(
            "refusing to delete {:?} without --yes (jh rm {} --yes)",
            session.habits[pos].name, args.index
        )
        .into());
    }

    let Some(removed) = habit_ops::remove_at(&mut session.habits, pos) else {
        return Ok(());
    };
    recovery::log_habit_deletion(
        &session.data_dir,
        &removed.name,
        &serde_json::to_string(&removed)?,
    );
    info!("removed habit {:?}", removed.name);
    println!("deleted {:?}", removed.name);
    Ok(())
}

// ---------------------------------------------------------------------------
// Recovery
// ---------------------------------------------------------------------------

fn cmd_recovery(data_dir: &Path, args: RecoveryCmd, json: bool) -> CmdResult {
    match args.action {
        Some(RecoveryAction::Path) => {
            println!("{}", recovery::recovery_log_path(data_dir).display());
            Ok(())
        }
        Some(RecoveryAction::Clear) => {
            let removed = recovery::clear_recovery(data_dir)?;
            println!("removed {} recovery entries", removed);
            Ok(())
        }
        None => {
            let entries = recovery::read_recovery_entries(data_dir, Some(args.limit.unwrap_or(10)));
            if json {
                let values: Vec<serde_json::Value> = entries.iter().map(|e| e.to_json()).collect();
                println!("{}", serde_json::to_string_pretty(&values)?);
                return Ok(());
            }
            if entries.is_empty() {
                println!("recovery log is empty");
                return Ok(());
            }
            for entry in &entries {
                println!(
                    "{} [{}] {}",
                    entry.timestamp.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
                    entry.category,
                    entry.description
                );
                for (key, value) in &entry.fields {
                    println!("  {}: {}", key, value);
                }
                for line in entry.body.lines() {
                    println!("  | {}", line);
                }
            }
            Ok(())
        }
    }
}
