use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::info;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::lock::SessionLock;
use crate::io::{recovery, store};
use crate::model::habit::{Habit, HabitDraft, Weekday};
use crate::model::session::Session;
use crate::ops::habit_ops;
use crate::ops::rollover::DayStart;

use super::input;
use super::render;
use super::theme::Theme;

/// Which view is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Habits scheduled for today, with the plant
    Today,
    /// Every habit, for adding, editing, reordering and deleting
    Manage,
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// The create/edit form is open
    Form,
    /// Waiting for y/n on a deletion
    Confirm,
}

/// Field of the edit form that has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Note,
    Days,
    Highlight,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::Name,
        FormField::Note,
        FormField::Days,
        FormField::Highlight,
    ];

    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// State of the open create/edit form
#[derive(Debug, Clone)]
pub struct FormState {
    pub draft: HabitDraft,
    pub field: FormField,
    /// Cursor in the weekday row (0 = Sun)
    pub day_cursor: usize,
    /// List position of the habit being edited; None when creating
    pub editing: Option<usize>,
    /// Validation message shown under the form
    pub error: Option<String>,
}

impl FormState {
    pub fn create() -> Self {
        FormState {
            draft: HabitDraft {
                weekdays: Weekday::ALL.to_vec(),
                ..HabitDraft::default()
            },
            field: FormField::Name,
            day_cursor: 0,
            editing: None,
            error: None,
        }
    }

    pub fn edit(pos: usize, habit: &Habit) -> Self {
        FormState {
            draft: HabitDraft::from_habit(habit),
            field: FormField::Name,
            day_cursor: 0,
            editing: Some(pos),
            error: None,
        }
    }
}

/// Main application state
pub struct App {
    pub session: Session,
    pub view: View,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor in the today view (index into today's habits)
    pub today_cursor: usize,
    /// Cursor in the manage view (index into the full list)
    pub manage_cursor: usize,
    pub form: Option<FormState>,
    /// List position awaiting delete confirmation
    pub confirm_delete: Option<usize>,
    /// One-time welcome shown on first run
    pub show_welcome: bool,
    /// Transient message for the status row
    pub status_message: Option<String>,
}

impl App {
    pub fn new(session: Session) -> Self {
        let theme = Theme::from_config(&session.config.ui);
        let show_welcome = session.first_run;
        App {
            session,
            view: View::Today,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            today_cursor: 0,
            manage_cursor: 0,
            form: None,
            confirm_delete: None,
            show_welcome,
            status_message: None,
        }
    }

    /// Note what happened at load time in the status row
    pub fn announce_day_start(&mut self, start: DayStart) {
        if start.streak_reset {
            self.status_message = Some("streak restarted: more than 2 days missed".into());
        } else if start.new_day {
            self.status_message = Some("new day: checks cleared".into());
        }
    }

    /// List positions of today's habits, in display order
    pub fn today_positions(&self) -> Vec<usize> {
        habit_ops::positions_for_day(&self.session.habits, self.session.weekday())
    }

    /// Keep both cursors inside their lists
    pub fn clamp_cursors(&mut self) {
        let today_len = self.today_positions().len();
        self.today_cursor = self.today_cursor.min(today_len.saturating_sub(1));
        let len = self.session.habits.len();
        self.manage_cursor = self.manage_cursor.min(len.saturating_sub(1));
    }

    /// Flip the check mark of the habit under the today cursor
    pub fn toggle_today_check(&mut self) {
        let Some(&pos) = self.today_positions().get(self.today_cursor) else {
            return;
        };
        let today = self.session.today;
        let habit = &mut self.session.habits[pos];
        let value = !habit.checked;
        habit_ops::set_checked(habit, value, &mut self.session.streak, today);
        info!("habit {:?} checked={}", habit.name, value);
    }

    /// Swap the habit under the manage cursor with its neighbour
    pub fn move_selected(&mut self, delta: isize) {
        if let Some(new_pos) = habit_ops::swap_at(&mut self.session.habits, self.manage_cursor, delta)
        {
            info!("moved habit from {} to {}", self.manage_cursor, new_pos);
            self.manage_cursor = new_pos;
        }
    }

    pub fn open_create_form(&mut self) {
        self.form = Some(FormState::create());
        self.mode = Mode::Form;
    }

    pub fn open_edit_form(&mut self) {
        let Some(habit) = self.session.habits.get(self.manage_cursor) else {
            return;
        };
        self.form = Some(FormState::edit(self.manage_cursor, habit));
        self.mode = Mode::Form;
    }

    pub fn cancel_form(&mut self) {
        self.form = None;
        self.mode = Mode::Navigate;
    }

    /// Store the form's habit: replace the edited one in place, or append.
    /// An empty name keeps the form open with an error.
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        if form.draft.name.trim().is_empty() {
            form.error = Some("name cannot be empty".into());
            form.field = FormField::Name;
            return;
        }
        let record = form.draft.build();
        let name = record.name.clone();
        let editing = form.editing.take();
        let idx = match editing {
            Some(pos) => habit_ops::replace_at(&mut self.session.habits, pos, record),
            None => habit_ops::append_or_replace(&mut self.session.habits, record, None),
        };
        info!(
            "{} habit {:?} at {}",
            if editing.is_some() { "edited" } else { "added" },
            name,
            idx
        );
        self.manage_cursor = idx;
        self.form = None;
        self.mode = Mode::Navigate;
        self.clamp_cursors();
    }

    /// Ask for confirmation before deleting the habit under the manage cursor
    pub fn request_delete(&mut self) {
        if self.manage_cursor < self.session.habits.len() {
            self.confirm_delete = Some(self.manage_cursor);
            self.mode = Mode::Confirm;
        }
    }

    pub fn confirm_delete(&mut self) {
        self.mode = Mode::Navigate;
        let Some(pos) = self.confirm_delete.take() else {
            return;
        };
        if let Some(removed) = habit_ops::remove_at(&mut self.session.habits, pos) {
            if let Ok(json) = serde_json::to_string(&removed) {
                recovery::log_habit_deletion(&self.session.data_dir, &removed.name, &json);
            }
            info!("removed habit {:?}", removed.name);
            self.status_message = Some(format!("deleted {:?}", removed.name));
        }
        self.clamp_cursors();
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = None;
        self.mode = Mode::Navigate;
    }

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Today => View::Manage,
            View::Manage => View::Today,
        };
        self.clamp_cursors();
    }
}

/// Run the TUI application against `data_dir`.
///
/// The session is loaded once before the first frame and saved once after
/// the event loop ends.
pub fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = SessionLock::acquire_default(data_dir)?;
    let today = chrono::Local::now().date_naive();
    let (session, day_start) = store::load_session(data_dir, today)?;

    let mut app = App::new(session);
    app.announce_day_start(day_start);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);
    let restored = restore_terminal(&mut terminal);
    finish_session(&app.session, restored, result)
}

type TuiResult = Result<(), Box<dyn std::error::Error>>;

/// Save the session, then report a terminal-restore or event-loop error.
/// The save comes first so today's checks are kept either way.
fn finish_session(session: &Session, restored: TuiResult, result: TuiResult) -> TuiResult {
    store::save_session(session)?;
    restored?;
    result
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
