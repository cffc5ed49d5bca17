use chrono::NaiveDate;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::config::AppConfig;
use crate::model::habit::{Habit, Weekday};
use crate::model::session::Session;
use crate::model::streak::Streak;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn habit(name: &str, note: &str, weekdays: &[Weekday]) -> Habit {
    Habit {
        name: name.into(),
        note: note.into(),
        weekdays: weekdays.to_vec(),
        highlight: false,
        checked: false,
    }
}

/// A session on Monday 2024-03-04 with a three day streak and four habits,
/// one of which ("Long run") is weekends only.
pub fn sample_session() -> Session {
    use Weekday::*;
    let mut journal = habit("Journal", "one line is enough", &[Mon, Wed, Fri]);
    journal.highlight = true;
    let today = date("2024-03-04");
    Session {
        data_dir: std::env::temp_dir().join("jh-tui-test"),
        config: AppConfig::default(),
        habits: vec![
            habit("Floss", "", &Weekday::ALL),
            habit("Meditate", "", &[Mon, Tue, Wed, Thu, Fri]),
            habit("Long run", "", &[Sun, Sat]),
            journal,
        ],
        streak: Streak::from_days(
            vec![date("2024-03-01"), date("2024-03-02"), date("2024-03-03")],
            today,
        ),
        today,
        first_run: false,
    }
}
