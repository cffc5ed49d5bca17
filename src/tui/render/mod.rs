pub mod edit_form;
mod helpers;
pub mod manage_view;
pub mod plant;
pub mod status_row;
pub mod tab_bar;
pub mod today_view;
pub mod welcome_overlay;

#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode, View};

/// Main render function: dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: tab bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tab bar + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);

    match app.view {
        View::Today => today_view::render_today_view(frame, app, chunks[1]),
        View::Manage => manage_view::render_manage_view(frame, app, chunks[1]),
    }

    if app.mode == Mode::Form {
        edit_form::render_edit_form(frame, app, chunks[1]);
    }

    // Welcome overlay (rendered on top of everything)
    if app.show_welcome {
        welcome_overlay::render_welcome_overlay(frame, app, area);
    }

    status_row::render_status_row(frame, app, chunks[2]);
}
