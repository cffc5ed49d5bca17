use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, View};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }
        (_, KeyCode::Tab) | (_, KeyCode::BackTab) => app.toggle_view(),
        (_, KeyCode::Char('1')) => app.view = View::Today,
        (_, KeyCode::Char('2')) => {
            app.view = View::Manage;
            app.clamp_cursors();
        }
        _ => match app.view {
            View::Today => handle_today(app, key),
            View::Manage => handle_manage(app, key),
        },
    }
}

fn handle_today(app: &mut App, key: KeyEvent) {
    let count = app.today_positions().len();
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            if app.today_cursor + 1 < count {
                app.today_cursor += 1;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.today_cursor = app.today_cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => app.today_cursor = 0,
        KeyCode::Char('G') => app.today_cursor = count.saturating_sub(1),
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('x') => app.toggle_today_check(),
        _ => {}
    }
}

fn handle_manage(app: &mut App, key: KeyEvent) {
    let count = app.session.habits.len();
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            if app.manage_cursor + 1 < count {
                app.manage_cursor += 1;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.manage_cursor = app.manage_cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => app.manage_cursor = 0,
        KeyCode::Char('G') => app.manage_cursor = count.saturating_sub(1),
        // Reorder: shifted j/k
        KeyCode::Char('J') => app.move_selected(1),
        KeyCode::Char('K') => app.move_selected(-1),
        KeyCode::Char('a') => app.open_create_form(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_form(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        _ => {}
    }
}
