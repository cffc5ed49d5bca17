//! Integration tests for the `jh` CLI.
//!
//! Each test creates a temp data directory, runs `jh` as a subprocess,
//! and verifies stdout and/or file contents.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use chrono::{Duration, Local, NaiveDate};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Get the path to the built `jh` binary.
fn jh_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("jh");
    path
}

/// Run `jh -C <dir> args...` and return the raw output.
fn run_jh(dir: &Path, args: &[&str]) -> Output {
    Command::new(jh_bin())
        .arg("-C")
        .arg(dir)
        .args(args)
        .env_remove("JH_DATA_DIR")
        .output()
        .expect("failed to run jh")
}

/// Run jh and assert success; return stdout.
fn run_jh_ok(dir: &Path, args: &[&str]) -> String {
    let out = run_jh(dir, args);
    assert!(
        out.status.success(),
        "jh {:?} failed:\nstdout: {}\nstderr: {}",
        args,
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout).unwrap()
}

/// Run jh and assert failure; return stderr.
fn run_jh_err(dir: &Path, args: &[&str]) -> String {
    let out = run_jh(dir, args);
    assert!(!out.status.success(), "jh {:?} unexpectedly succeeded", args);
    String::from_utf8(out.stderr).unwrap()
}

fn run_jh_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let mut full = args.to_vec();
    full.push("--json");
    serde_json::from_str(&run_jh_ok(dir, &full)).unwrap()
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn habit_lines(dir: &Path) -> Vec<serde_json::Value> {
    fs::read_to_string(dir.join("habits.json"))
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// First run and persistence
// ---------------------------------------------------------------------------

#[test]
fn first_run_creates_files() {
    let tmp = TempDir::new().unwrap();
    let out = run_jh_ok(tmp.path(), &["list"]);
    assert!(out.contains("no habits yet"));

    assert_eq!(fs::read_to_string(tmp.path().join("habits.json")).unwrap(), "");
    assert_eq!(
        fs::read_to_string(tmp.path().join("streak.txt")).unwrap(),
        format!("{}\n", ymd(today()))
    );
    assert!(tmp.path().join("logs").is_dir());
    // Lock is released on exit
    assert!(!tmp.path().join(".lock").exists());
}

#[test]
fn add_then_list() {
    let tmp = TempDir::new().unwrap();
    run_jh_ok(tmp.path(), &["add", "Floss"]);
    run_jh_ok(
        tmp.path(),
        &["add", "Read", "--note", "10 pages", "--days", "Mon,Wed", "--highlight"],
    );

    let out = run_jh_ok(tmp.path(), &["list"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("1. [ ] Floss"));
    assert!(lines[0].contains("every day"));
    assert!(lines[1].contains("2. [ ] Read *"));
    assert!(lines[1].contains("Mon Wed"));
    assert!(lines[1].contains("(10 pages)"));

    let records = habit_lines(tmp.path());
    assert_eq!(records[1]["weekdays"], serde_json::json!(["Mon", "Wed"]));
    assert_eq!(records[1]["highlight"], true);
    assert_eq!(records[1]["checked"], false);
}

#[test]
fn long_name_is_cut_to_limit() {
    let tmp = TempDir::new().unwrap();
    run_jh_ok(tmp.path(), &["add", "A very long habit name that goes on"]);
    let records = habit_lines(tmp.path());
    assert_eq!(records[0]["name"], "A very long habit name");
}

#[test]
fn add_rejects_bad_weekday() {
    let tmp = TempDir::new().unwrap();
    let err = run_jh_err(tmp.path(), &["add", "Run", "--days", "Mon,Funday"]);
    assert!(err.contains("unknown weekday"));
}

// ---------------------------------------------------------------------------
// Check-off and streak
// ---------------------------------------------------------------------------

#[test]
fn check_records_today_once() {
    let tmp = TempDir::new().unwrap();
    let yesterday = today() - Duration::days(1);
    fs::write(tmp.path().join("streak.txt"), format!("{}\n", ymd(yesterday))).unwrap();
    run_jh_ok(tmp.path(), &["add", "Floss"]);
    run_jh_ok(tmp.path(), &["add", "Stretch"]);

    let out = run_jh_ok(tmp.path(), &["check", "1"]);
    assert!(out.contains("[x] Floss"));
    run_jh_ok(tmp.path(), &["check", "2"]);

    assert_eq!(
        fs::read_to_string(tmp.path().join("streak.txt")).unwrap(),
        format!("{}\n{}\n", ymd(yesterday), ymd(today()))
    );
    let records = habit_lines(tmp.path());
    assert_eq!(records[0]["checked"], true);
    assert_eq!(records[1]["checked"], true);

    // Same-day reload keeps the checks
    let streak = run_jh_json(tmp.path(), &["streak"]);
    assert_eq!(streak["length"], 2);
    assert_eq!(streak["stage"], "stage2");

    run_jh_ok(tmp.path(), &["uncheck", "1"]);
    assert_eq!(habit_lines(tmp.path())[0]["checked"], false);
}

#[test]
fn stale_streak_resets() {
    let tmp = TempDir::new().unwrap();
    let old = today() - Duration::days(5);
    fs::write(tmp.path().join("streak.txt"), format!("{}\n", ymd(old))).unwrap();

    let streak = run_jh_json(tmp.path(), &["streak"]);
    assert_eq!(streak["length"], 1);
    assert_eq!(streak["days"], serde_json::json!([ymd(today())]));
}

#[test]
fn new_day_clears_checks() {
    let tmp = TempDir::new().unwrap();
    let yesterday = today() - Duration::days(1);
    fs::write(tmp.path().join("streak.txt"), format!("{}\n", ymd(yesterday))).unwrap();
    fs::write(
        tmp.path().join("habits.json"),
        r#"{"name":"Floss","note":"","weekdays":["Sun","Mon","Tue","Wed","Thu","Fri","Sat"],"highlight":false,"checked":true}
"#,
    )
    .unwrap();

    let today_json = run_jh_json(tmp.path(), &["today"]);
    assert_eq!(today_json["habits"][0]["checked"], false);
    assert_eq!(habit_lines(tmp.path())[0]["checked"], false);
}

#[test]
fn today_filters_by_weekday() {
    let tmp = TempDir::new().unwrap();
    let code = chrono::Datelike::weekday(&today()).to_string();
    let other = chrono::Datelike::weekday(&(today() + Duration::days(1))).to_string();
    run_jh_ok(tmp.path(), &["add", "Scheduled", "--days", &code]);
    run_jh_ok(tmp.path(), &["add", "Tomorrow only", "--days", &other]);

    let out = run_jh_ok(tmp.path(), &["today"]);
    assert!(out.contains("[ ] Scheduled"));
    assert!(!out.contains("Tomorrow only"));

    let json = run_jh_json(tmp.path(), &["today"]);
    assert_eq!(json["date"], ymd(today()));
    assert_eq!(json["habits"].as_array().unwrap().len(), 1);
    assert_eq!(json["habits"][0]["index"], 1);
}

// ---------------------------------------------------------------------------
// Edit, move, delete
// ---------------------------------------------------------------------------

#[test]
fn edit_replaces_in_place_and_unchecks() {
    let tmp = TempDir::new().unwrap();
    run_jh_ok(tmp.path(), &["add", "Floss"]);
    run_jh_ok(tmp.path(), &["add", "Read"]);
    run_jh_ok(tmp.path(), &["check", "1"]);

    run_jh_ok(
        tmp.path(),
        &["edit", "1", "--name", "Floss twice", "--days", "Sat", "--highlight"],
    );
    let records = habit_lines(tmp.path());
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["name"], "Floss twice");
    assert_eq!(records[0]["weekdays"], serde_json::json!(["Sat"]));
    assert_eq!(records[0]["highlight"], true);
    assert_eq!(records[0]["checked"], false);
    assert_eq!(records[1]["name"], "Read");
}

#[test]
fn edit_targets_the_given_row_among_duplicates() {
    let tmp = TempDir::new().unwrap();
    run_jh_ok(tmp.path(), &["add", "Read"]);
    run_jh_ok(tmp.path(), &["add", "Read"]);

    let out = run_jh_ok(tmp.path(), &["edit", "2", "--name", "Edited"]);
    assert!(out.contains("updated 2. Edited"));
    let names: Vec<String> = habit_lines(tmp.path())
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Read", "Edited"]);
}

#[test]
fn mv_swaps_and_ignores_out_of_range() {
    let tmp = TempDir::new().unwrap();
    for name in ["A", "B", "C"] {
        run_jh_ok(tmp.path(), &["add", name]);
    }
    run_jh_ok(tmp.path(), &["mv", "3", "--up"]);
    let names: Vec<String> = habit_lines(tmp.path())
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["A", "C", "B"]);

    let out = run_jh_ok(tmp.path(), &["mv", "1", "--up"]);
    assert!(out.contains("unchanged"));
    let out = run_jh_ok(tmp.path(), &["mv", "1", "--by", "5"]);
    assert!(out.contains("unchanged"));
    assert_eq!(habit_lines(tmp.path())[0]["name"], "A");
}

#[test]
fn rm_requires_yes_and_keeps_record() {
    let tmp = TempDir::new().unwrap();
    run_jh_ok(tmp.path(), &["add", "Floss"]);
    run_jh_ok(tmp.path(), &["add", "Read"]);

    let err = run_jh_err(tmp.path(), &["rm", "1"]);
    assert!(err.contains("--yes"));
    assert_eq!(habit_lines(tmp.path()).len(), 2);

    run_jh_ok(tmp.path(), &["rm", "1", "--yes"]);
    let records = habit_lines(tmp.path());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "Read");

    let out = run_jh_ok(tmp.path(), &["recovery"]);
    assert!(out.contains("[delete]"));
    assert!(out.contains("\"name\":\"Floss\""));

    let out = run_jh_ok(tmp.path(), &["recovery", "clear"]);
    assert!(out.contains("removed 1"));
    assert!(run_jh_ok(tmp.path(), &["recovery"]).contains("empty"));
}

#[test]
fn bad_index_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let err = run_jh_err(tmp.path(), &["check", "1"]);
    assert!(err.starts_with("error: "));
    assert!(err.contains("list is empty"));

    run_jh_ok(tmp.path(), &["add", "Floss"]);
    let err = run_jh_err(tmp.path(), &["check", "0"]);
    assert!(err.contains("valid: 1-1"));
}

// ---------------------------------------------------------------------------
// Failure handling
// ---------------------------------------------------------------------------

#[test]
fn malformed_habit_file_aborts_untouched() {
    let tmp = TempDir::new().unwrap();
    let content = "{\"name\":\"Floss\"}\nnot json\n";
    fs::write(tmp.path().join("habits.json"), content).unwrap();

    let err = run_jh_err(tmp.path(), &["list"]);
    assert!(err.contains("habits.json"));
    assert!(err.contains("line 1"));
    assert_eq!(
        fs::read_to_string(tmp.path().join("habits.json")).unwrap(),
        content
    );
}

#[test]
fn malformed_streak_file_aborts() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("streak.txt"), "2024-13-01\n").unwrap();
    let err = run_jh_err(tmp.path(), &["streak"]);
    assert!(err.contains("streak.txt"));
}

#[test]
fn invalid_log_level_still_runs() {
    let tmp = TempDir::new().unwrap();
    let out = run_jh(tmp.path(), &["--log-level", "loud", "list"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("logging disabled"));
}

#[test]
fn recovery_path() {
    let tmp = TempDir::new().unwrap();
    let out = run_jh_ok(tmp.path(), &["recovery", "path"]);
    assert_eq!(out.trim(), tmp.path().join(".recovery.log").display().to_string());
}
