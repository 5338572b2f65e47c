//! Home page: description and recent submissions

use super::Palette;
use crate::app::App;
use crate::store::FormSubmission;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use serde_json::Value;

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let entry = app.state.current_route();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // History
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            entry.title.unwrap_or(entry.name),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(entry.description, Style::default().fg(palette.text))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted)),
    );
    frame.render_widget(header, chunks[0]);

    let total = app.store.get_all_forms().len();
    let recent = app.store.get_recent_forms(app.recent_limit);

    let lines: Vec<Line> = if recent.is_empty() {
        vec![Line::from(Span::styled(
            "История пуста",
            Style::default().fg(palette.muted),
        ))]
    } else {
        recent
            .iter()
            .flat_map(|submission| submission_lines(submission, palette))
            .collect()
    };

    let history = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" История ({}/{total}) ", recent.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset.min(max_history_scroll(app)), 0));
    frame.render_widget(history, chunks[1]);
}

/// Lines drawn per submission
const LINES_PER_SUBMISSION: usize = 2;

/// Largest useful scroll offset of the history list: its last line on top
pub fn max_history_scroll(app: &App) -> u16 {
    let shown = app.store.get_recent_forms(app.recent_limit).len();
    let lines = (shown * LINES_PER_SUBMISSION).saturating_sub(1);
    u16::try_from(lines).unwrap_or(u16::MAX)
}

/// Two lines per submission: header and a field summary
fn submission_lines<'a>(submission: &'a FormSubmission, palette: &Palette) -> Vec<Line<'a>> {
    let when = submission
        .submitted_at()
        .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_else(|| "—".to_string());

    vec![
        Line::from(vec![
            Span::styled(when, Style::default().fg(palette.muted)),
            Span::raw("  "),
            Span::styled(
                submission.form_name.as_str(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {}", summarize(submission)),
            Style::default().fg(palette.text),
        )),
    ]
}

/// `key: value` pairs of the non-empty fields on one line
fn summarize(submission: &FormSubmission) -> String {
    submission
        .data
        .iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::String(s) if s.is_empty() => return None,
                Value::String(s) => s.replace('\n', " "),
                Value::Null => return None,
                other => other.to_string(),
            };
            Some(format!("{key}: {text}"))
        })
        .collect::<Vec<_>>()
        .join(", ")
}
