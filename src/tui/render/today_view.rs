use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::streak_ops;
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::{checkbox, scroll_offset, spans_width};
use super::plant::{PLANT_WIDTH, plant_art};

/// Narrower terminals drop the plant and show only the streak line
const MIN_WIDTH_FOR_PLANT: u16 = 50;

/// Render the today view: plant and streak on the left, today's habits on
/// the right
pub fn render_today_view(frame: &mut Frame, app: &App, area: Rect) {
    if area.width >= MIN_WIDTH_FOR_PLANT {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(PLANT_WIDTH as u16 + 4),
                Constraint::Min(1),
            ])
            .split(area);
        render_plant(frame, app, chunks[0]);
        render_habits(frame, app, chunks[1]);
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(area);
        let line = Line::from(Span::styled(
            format!(" {}", streak_label(app)),
            Style::default().fg(app.theme.checked).bg(app.theme.background),
        ));
        frame.render_widget(Paragraph::new(line), chunks[0]);
        render_habits(frame, app, chunks[1]);
    }
}

fn streak_label(app: &App) -> String {
    let len = streak_ops::length(&app.session.streak);
    format!("{} day streak", len)
}

fn render_plant(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let art_style = Style::default().fg(app.theme.accent).bg(bg);
    let stage = streak_ops::growth_stage(&app.session.streak);

    let mut lines: Vec<Line> = vec![Line::from("")];
    for row in plant_art(stage) {
        lines.push(Line::from(Span::styled(format!("  {}", row), art_style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", streak_label(app)),
        Style::default()
            .fg(app.theme.checked)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!("  stage {}/7", stage.number()),
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn render_habits(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let positions = app.today_positions();

    if positions.is_empty() {
        let hint = if app.session.habits.is_empty() {
            " No habits yet. Press Tab, then a to add one."
        } else {
            " Nothing scheduled today."
        };
        let empty = Paragraph::new(format!("\n{}", hint))
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // One blank row on top, one row per habit
    let visible = (area.height as usize).saturating_sub(1);
    let scroll = scroll_offset(app.today_cursor, visible);
    let width = area.width as usize;

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (row, &pos) in positions.iter().enumerate().skip(scroll).take(visible) {
        let habit = &app.session.habits[pos];
        let is_cursor = row == app.today_cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let box_style = if habit.checked {
            Style::default().fg(app.theme.checked).bg(row_bg)
        } else {
            Style::default().fg(app.theme.dim).bg(row_bg)
        };
        let name_fg = if habit.highlight {
            app.theme.highlight
        } else {
            app.theme.text
        };
        let mut name_style = Style::default().fg(name_fg).bg(row_bg);
        if is_cursor {
            name_style = name_style.add_modifier(Modifier::BOLD);
        }
        if habit.checked {
            name_style = name_style.add_modifier(Modifier::CROSSED_OUT);
        }

        let mut spans = vec![
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(checkbox(habit.checked), box_style),
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(habit.name.clone(), name_style),
        ];
        if !habit.note.is_empty() {
            let room = width.saturating_sub(spans_width(&spans) + 2);
            if room > 1 {
                spans.push(Span::styled("  ", Style::default().bg(row_bg)));
                spans.push(Span::styled(
                    unicode::truncate_to_width(&habit.note, room),
                    Style::default().fg(app.theme.dim).bg(row_bg),
                ));
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
