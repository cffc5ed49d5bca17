use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::habit::{NAME_CHAR_LIMIT, NOTE_CHAR_LIMIT, Weekday};
use crate::tui::app::{App, FormField};
use crate::util::unicode::{grapheme_count, pop_grapheme};

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.cancel_form();
            return;
        }
        KeyCode::Enter => {
            app.submit_form();
            return;
        }
        _ => {}
    }

    let Some(form) = app.form.as_mut() else {
        return;
    };
    form.error = None;

    match key.code {
        KeyCode::Tab | KeyCode::Down => form.field = form.field.next(),
        KeyCode::BackTab | KeyCode::Up => form.field = form.field.prev(),
        _ => match form.field {
            FormField::Name => edit_text(&mut form.draft.name, NAME_CHAR_LIMIT, key),
            FormField::Note => edit_text(&mut form.draft.note, NOTE_CHAR_LIMIT, key),
            FormField::Days => match key.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    form.day_cursor = form.day_cursor.saturating_sub(1);
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    form.day_cursor = (form.day_cursor + 1).min(Weekday::ALL.len() - 1);
                }
                KeyCode::Char(' ') => {
                    let day = Weekday::ALL[form.day_cursor];
                    let days = &mut form.draft.weekdays;
                    match days.iter().position(|d| *d == day) {
                        Some(i) => {
                            days.remove(i);
                        }
                        None => {
                            days.push(day);
                            days.sort();
                        }
                    }
                }
                KeyCode::Char('a') => form.draft.weekdays = Weekday::ALL.to_vec(),
                KeyCode::Char('n') => form.draft.weekdays.clear(),
                _ => {}
            },
            FormField::Highlight => {
                if key.code == KeyCode::Char(' ') {
                    form.draft.highlight = !form.draft.highlight;
                }
            }
        },
    }
}

/// Append typed characters up to `limit` graphemes; Backspace removes one
fn edit_text(buf: &mut String, limit: usize, key: KeyEvent) {
    match key.code {
        KeyCode::Backspace => pop_grapheme(buf),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => buf.clear(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut candidate = buf.clone();
            candidate.push(c);
            // Combining marks extend the last grapheme and stay within the limit
            if grapheme_count(&candidate) <= limit {
                *buf = candidate;
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::model::habit::{NAME_CHAR_LIMIT, Weekday};
    use crate::tui::app::{App, FormField, Mode};
    use crate::tui::input::handle_key;
    use crate::tui::input::test_keys::*;
    use crate::tui::render::test_helpers::sample_session;
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(app, ch(c));
        }
    }

    #[test]
    fn create_habit_through_form() {
        let mut app = App::new(sample_session());
        app.open_create_form();
        type_str(&mut app, "Water plants");
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "the fern too");
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.form.as_ref().unwrap().field, FormField::Days);
        // Clear all, then pick Sunday and Tuesday
        handle_key(&mut app, ch('n'));
        handle_key(&mut app, ch(' '));
        handle_key(&mut app, key(KeyCode::Right));
        handle_key(&mut app, key(KeyCode::Right));
        handle_key(&mut app, ch(' '));
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, ch(' '));
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Navigate);
        let habit = app.session.habits.last().unwrap();
        assert_eq!(habit.name, "Water plants");
        assert_eq!(habit.note, "the fern too");
        assert_eq!(habit.weekdays, vec![Weekday::Sun, Weekday::Tue]);
        assert!(habit.highlight);
        assert!(!habit.checked);
    }

    #[test]
    fn name_input_stops_at_limit() {
        let mut app = App::new(sample_session());
        app.open_create_form();
        type_str(&mut app, &"x".repeat(NAME_CHAR_LIMIT + 5));
        assert_eq!(
            app.form.as_ref().unwrap().draft.name.chars().count(),
            NAME_CHAR_LIMIT
        );
        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(
            app.form.as_ref().unwrap().draft.name.chars().count(),
            NAME_CHAR_LIMIT - 1
        );
    }

    #[test]
    fn esc_discards_edit() {
        let mut app = App::new(sample_session());
        app.manage_cursor = 1;
        app.open_edit_form();
        type_str(&mut app, " daily");
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.form.is_none());
        assert_eq!(app.session.habits[1].name, "Meditate");
    }

    #[test]
    fn field_focus_wraps() {
        let mut app = App::new(sample_session());
        app.open_create_form();
        handle_key(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.form.as_ref().unwrap().field, FormField::Highlight);
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.form.as_ref().unwrap().field, FormField::Name);
    }
}
