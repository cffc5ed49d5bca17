use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::centered_rect;

const WELCOME_TEXT: [&str; 9] = [
    "Build small habits, one day at a time.",
    "",
    "Check off a habit and today counts toward",
    "your streak. Miss more than two days in a",
    "row and the streak starts over.",
    "",
    "The longer the streak, the bigger the plant.",
    "",
    "Tab switches to Manage, where a adds a habit.",
];

/// Render the one-time welcome shown on first run
pub fn render_welcome_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(52, WELCOME_TEXT.len() as u16 + 6, area);
    frame.render_widget(Clear, popup);

    let bg = app.theme.background;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " Welcome to Just Habits ",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(app.theme.accent).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.extend(
        WELCOME_TEXT
            .iter()
            .map(|row| Line::from(Span::styled(format!(" {}", row), text_style))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Press any key to start",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}
