mod confirm;
mod form;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

use confirm::handle_confirm;
use form::handle_form;
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // The welcome overlay swallows the first key
    if app.show_welcome {
        app.show_welcome = false;
        return;
    }
    app.status_message = None;

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Form => handle_form(app, key),
        Mode::Confirm => handle_confirm(app, key),
    }
}

#[cfg(test)]
pub(crate) mod test_keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn ch(c: char) -> KeyEvent {
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        KeyEvent::new(KeyCode::Char(c), modifiers)
    }
}

#[cfg(test)]
mod tests {
    use super::test_keys::*;
    use super::*;
    use crate::tui::render::test_helpers::sample_session;

    #[test]
    fn welcome_swallows_first_key() {
        let mut session = sample_session();
        session.first_run = true;
        let mut app = App::new(session);
        handle_key(&mut app, ch('q'));
        assert!(!app.show_welcome);
        assert!(!app.should_quit);
        handle_key(&mut app, ch('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn any_key_clears_status_message() {
        let mut app = App::new(sample_session());
        app.status_message = Some("new day".into());
        handle_key(&mut app, ch('j'));
        assert_eq!(app.status_message, None);
    }
}
