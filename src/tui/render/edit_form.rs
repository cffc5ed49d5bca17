use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::habit::{NAME_CHAR_LIMIT, NOTE_CHAR_LIMIT, Weekday};
use crate::tui::app::{App, FormField, FormState};
use crate::util::unicode::grapheme_count;

use super::helpers::centered_rect;

const FORM_WIDTH: u16 = 56;
const FORM_HEIGHT: u16 = 12;

/// Render the create/edit form as a centered popup
pub fn render_edit_form(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.form else {
        return;
    };
    let popup = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);
    frame.render_widget(Clear, popup);

    let bg = app.theme.background;
    let title = if form.editing.is_some() {
        " Edit habit "
    } else {
        " New habit "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(app.theme.accent).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut lines: Vec<Line> = vec![
        Line::from(""),
        text_row(app, form, FormField::Name, "Name", &form.draft.name, NAME_CHAR_LIMIT),
        text_row(app, form, FormField::Note, "Note", &form.draft.note, NOTE_CHAR_LIMIT),
        Line::from(""),
        days_row(app, form),
        highlight_row(app, form),
        Line::from(""),
    ];
    match &form.error {
        Some(error) => lines.push(Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(app.theme.red).bg(bg),
        ))),
        None => lines.push(Line::from("")),
    }
    lines.push(Line::from(Span::styled(
        " Enter save  Esc cancel  Tab next field",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}

fn label(app: &App, form: &FormState, field: FormField, text: &str) -> Span<'static> {
    let focused = form.field == field;
    let marker = if focused { '\u{25B8}' } else { ' ' };
    let mut style = Style::default().fg(app.theme.accent).bg(app.theme.background);
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }
    Span::styled(format!("{}{:<10}", marker, text), style)
}

fn text_row<'a>(
    app: &App,
    form: &FormState,
    field: FormField,
    name: &str,
    value: &'a str,
    limit: usize,
) -> Line<'a> {
    let bg = app.theme.background;
    let mut spans = vec![
        label(app, form, field, name),
        Span::styled(value, Style::default().fg(app.theme.text_bright).bg(bg)),
    ];
    if form.field == field {
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.accent).bg(bg),
        ));
    }
    spans.push(Span::styled(
        format!("  {}/{}", grapheme_count(value), limit),
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    Line::from(spans)
}

fn days_row(app: &App, form: &FormState) -> Line<'static> {
    let bg = app.theme.background;
    let focused = form.field == FormField::Days;
    let mut spans = vec![label(app, form, FormField::Days, "Days")];
    for (i, day) in Weekday::ALL.iter().enumerate() {
        let on = form.draft.weekdays.contains(day);
        let mut style = if on {
            Style::default().fg(app.theme.checked).bg(bg)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        if focused && i == form.day_cursor {
            style = style.bg(app.theme.selection_bg).add_modifier(Modifier::BOLD);
        }
        let text = if on {
            day.code().to_string()
        } else {
            day.code().to_ascii_lowercase()
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }
    Line::from(spans)
}

fn highlight_row(app: &App, form: &FormState) -> Line<'static> {
    let bg = app.theme.background;
    let value = if form.draft.highlight { "[x]" } else { "[ ]" };
    Line::from(vec![
        label(app, form, FormField::Highlight, "Highlight"),
        Span::styled(value, Style::default().fg(app.theme.highlight).bg(bg)),
    ])
}
