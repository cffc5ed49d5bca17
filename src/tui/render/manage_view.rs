use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::cli::output::format_weekdays;
use crate::model::habit::NAME_CHAR_LIMIT;
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::{checkbox, scroll_offset, spans_width};

/// Render the manage view: every habit with its position and schedule
pub fn render_manage_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let habits = &app.session.habits;

    if habits.is_empty() {
        let empty = Paragraph::new("\n No habits yet. Press a to add one.")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let visible = (area.height as usize).saturating_sub(1);
    let scroll = scroll_offset(app.manage_cursor, visible);
    let width = area.width as usize;

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (i, habit) in habits.iter().enumerate().skip(scroll).take(visible) {
        let is_cursor = i == app.manage_cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let dim = Style::default().fg(app.theme.dim).bg(row_bg);

        let name_fg = if habit.highlight {
            app.theme.highlight
        } else {
            app.theme.text_bright
        };
        let mut name_style = Style::default().fg(name_fg).bg(row_bg);
        if is_cursor {
            name_style = name_style.add_modifier(Modifier::BOLD);
        }

        let mut spans = vec![
            Span::styled(format!(" {:>2}  ", i + 1), dim),
            Span::styled(
                checkbox(habit.checked),
                Style::default().fg(app.theme.checked).bg(row_bg),
            ),
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(
                unicode::pad_to_width(&habit.name, NAME_CHAR_LIMIT),
                name_style,
            ),
            Span::styled("  ", Style::default().bg(row_bg)),
            Span::styled(
                unicode::pad_to_width(&format_weekdays(&habit.weekdays), 12),
                Style::default().fg(app.theme.accent).bg(row_bg),
            ),
        ];
        if !habit.note.is_empty() {
            let room = width.saturating_sub(spans_width(&spans) + 2);
            if room > 1 {
                spans.push(Span::styled("  ", Style::default().bg(row_bg)));
                spans.push(Span::styled(unicode::truncate_to_width(&habit.note, room), dim));
            }
        }
        if is_cursor {
            let used = spans_width(&spans);
            if used < width {
                spans.push(Span::styled(
                    " ".repeat(width - used),
                    Style::default().bg(row_bg),
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
