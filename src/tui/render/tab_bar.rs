use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::parse::DATE_FORMAT;
use crate::tui::app::{App, View};

use super::helpers::spans_width;

/// Render the tab bar: view tabs on the left, today's date on the right,
/// with a separator line below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_tabs(frame, app, chunks[0]);

    let separator = Paragraph::new(Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ));
    frame.render_widget(separator, chunks[1]);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let bg_style = Style::default().bg(app.theme.background);
    let sep = Span::styled(
        "\u{2502}",
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    );

    let mut spans: Vec<Span> = vec![
        Span::styled(" ", bg_style),
        Span::styled(
            "\u{273F}",
            Style::default().fg(app.theme.accent).bg(app.theme.background),
        ),
        Span::styled(" ", bg_style),
    ];
    for (view, label) in [(View::Today, "Today"), (View::Manage, "Manage")] {
        spans.push(Span::styled(
            format!(" {} ", label),
            tab_style(app, app.view == view),
        ));
        spans.push(sep.clone());
    }

    let date = format!(
        "{} {} ",
        app.session.weekday(),
        app.session.today.format(DATE_FORMAT)
    );
    let used = spans_width(&spans);
    let width = area.width as usize;
    if used + date.len() < width {
        spans.push(Span::styled(" ".repeat(width - used - date.len()), bg_style));
        spans.push(Span::styled(
            date,
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bg_style), area);
}

fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(app.theme.background)
    }
}
