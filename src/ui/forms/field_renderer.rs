//! Field rendering utilities for forms

use crate::phone::InputTarget;
use crate::state::FormField;
use crate::ui::Palette;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// Split a value at a character offset
fn split_at_cursor(value: &str, cursor: usize) -> (&str, &str) {
    let at = value
        .char_indices()
        .nth(cursor)
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    value.split_at(at)
}

/// Build the text lines of a field, with the cursor drawn when active
fn field_lines<'a>(field: &'a FormField, is_active: bool, palette: &Palette) -> Vec<Line<'a>> {
    let text_style = if is_active {
        Style::default().fg(palette.text)
    } else {
        Style::default().fg(palette.muted)
    };
    let cursor_style = Style::default().fg(palette.accent);

    if !is_active {
        let value = field.value();
        if value.is_empty() {
            return vec![Line::from(Span::styled("(empty)", text_style))];
        }
        return value
            .split('\n')
            .map(|l| Line::from(Span::styled(l, text_style)))
            .collect();
    }

    let (before, after) = split_at_cursor(field.value(), field.cursor());
    let mut lines: Vec<Line> = before
        .split('\n')
        .map(|l| Line::from(Span::styled(l, text_style)))
        .collect();

    let mut rest = after.split('\n');
    if let Some(last) = lines.last_mut() {
        last.spans.push(Span::styled(CURSOR, cursor_style));
        if let Some(tail) = rest.next() {
            last.spans.push(Span::styled(tail, text_style));
        }
    }
    lines.extend(rest.map(|l| Line::from(Span::styled(l, text_style))));
    lines
}

/// Draw a form field with its label and, below it, any validation error
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    palette: &Palette,
) {
    let border_color = if field.error.is_some() {
        palette.error
    } else if is_active {
        palette.accent
    } else {
        palette.muted
    };

    let label = if field.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };

    let mut block = Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if let Some(error) = &field.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(palette.error),
        )));
    }

    let content = Paragraph::new(field_lines(field, is_active, palette));
    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
