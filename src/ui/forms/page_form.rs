//! Page form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{Form, FormField, PageForm};
use crate::ui::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a single-line field (borders included)
const LINE_FIELD_HEIGHT: u16 = 3;
/// Rows taken by a multiline field (borders included)
const MULTILINE_FIELD_HEIGHT: u16 = 6;

fn field_height(field: &FormField) -> u16 {
    if field.is_multiline() {
        MULTILINE_FIELD_HEIGHT
    } else {
        LINE_FIELD_HEIGHT
    }
}

/// Index of the first field to draw for a scroll offset in rows
fn first_visible_field(form: &PageForm, scroll_offset: u16) -> usize {
    let mut top = 0u16;
    for (idx, field) in form.fields.iter().enumerate() {
        top = top.saturating_add(field_height(field));
        if top > scroll_offset {
            return idx;
        }
    }
    form.fields.len().saturating_sub(1)
}

/// Largest useful scroll offset: the top row of the last field
pub fn max_form_scroll(form: &PageForm) -> u16 {
    let Some((_, above)) = form.fields.split_last() else {
        return 0;
    };
    above
        .iter()
        .fold(0u16, |rows, field| rows.saturating_add(field_height(field)))
}

/// Draw the form of the current page
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App, form: &PageForm, palette: &Palette) {
    let entry = app.state.current_route();

    let block = Block::default()
        .title(format!(" {} ", entry.title.unwrap_or(entry.name)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let first = first_visible_field(form, app.state.scroll_offset);
    let visible = &form.fields[first..];

    let mut constraints = vec![Constraint::Length(1)]; // Description
    constraints.extend(visible.iter().map(|f| Constraint::Length(field_height(f))));
    constraints.push(Constraint::Min(0)); // Help

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(entry.description, Style::default().fg(palette.muted))),
        chunks[0],
    );

    for (offset, field) in visible.iter().enumerate() {
        let idx = first + offset;
        draw_field(
            frame,
            chunks[offset + 1],
            field,
            idx == form.active_field(),
            palette,
        );
    }

    let help = Line::from(vec![
        Span::styled("* обязательное поле  ", Style::default().fg(palette.muted)),
        Span::styled(
            format!("{SUBMIT_SHORTCUT}: сохранить"),
            Style::default().fg(palette.accent),
        ),
    ]);
    if let Some(help_area) = chunks.last() {
        frame.render_widget(Paragraph::new(help), *help_area);
    }
}
