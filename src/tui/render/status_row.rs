use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, View};

use super::helpers::spans_width;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = Vec::new();
    match app.mode {
        Mode::Confirm => {
            let name = app
                .confirm_delete
                .and_then(|pos| app.session.habits.get(pos))
                .map(|h| h.name.as_str())
                .unwrap_or_default();
            spans.push(Span::styled(
                format!(" Delete \"{}\"? ", name),
                Style::default()
                    .fg(app.theme.red)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                "y/n",
                Style::default().fg(app.theme.text_bright).bg(bg),
            ));
        }
        Mode::Navigate | Mode::Form => {
            if let Some(message) = &app.status_message {
                spans.push(Span::styled(
                    format!(" {}", message),
                    Style::default().fg(app.theme.text).bg(bg),
                ));
            }
            if app.mode == Mode::Navigate && app.session.config.ui.show_key_hints {
                let hint = key_hints(app.view);
                let used = spans_width(&spans);
                if used + hint.len() < width {
                    spans.push(Span::styled(
                        " ".repeat(width - used - hint.len()),
                        Style::default().bg(bg),
                    ));
                    spans.push(Span::styled(
                        hint,
                        Style::default().fg(app.theme.dim).bg(bg),
                    ));
                }
            }
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn key_hints(view: View) -> &'static str {
    match view {
        View::Today => "space check  tab manage  q quit ",
        View::Manage => "a add  e edit  d delete  J/K move  tab today  q quit ",
    }
}
