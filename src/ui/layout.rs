//! Layout components (sidebar, status bar)

use super::Palette;
use crate::app::App;
use crate::platform::{HISTORY_SHORTCUT, SUBMIT_SHORTCUT};
use crate::router::{self, Page};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(rows[0]);

    (chunks[0], chunks[1])
}

/// Draw the page list, one line per route with its function key
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let current = app.state.current_route();

    let lines: Vec<Line> = router::entries()
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let label = entry.title.unwrap_or(entry.name);
            let is_selected = entry.page == current.page;
            let style = if is_selected {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            let marker = if is_selected { "▸ " } else { "  " };
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("F{} ", idx + 1), Style::default().fg(palette.muted)),
                Span::styled(label, style),
            ])
        })
        .collect();

    let block = Block::default()
        .title(format!(" {} ", router::APP_NAME))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the status bar: prompt or message on the left, theme on the right
pub fn draw_status_bar(frame: &mut Frame, app: &App, palette: &Palette) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };
    let bar_style = Style::default().bg(palette.status_bg).fg(palette.text);

    let mut spans = vec![];

    if let Some(prompt) = &app.state.path_prompt {
        spans.push(Span::styled(" Go to: ", Style::default().fg(palette.accent)));
        spans.push(Span::raw(prompt.clone()));
        spans.push(Span::styled("▌", Style::default().fg(palette.accent)));
    } else {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            get_page_hints(app.state.current_page()),
            Style::default().fg(palette.muted),
        ));
        if let Some(msg) = &app.state.status_message {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(msg.clone(), Style::default().fg(palette.success)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bar_style), status_area);

    let theme = app.state.document.theme().unwrap_or_default();
    let theme_hint = format!(" ^T:{theme}  ^C^C:quit ");
    let hint_width = theme_hint.chars().count() as u16;
    let hint_area = Rect {
        x: area.width.saturating_sub(hint_width),
        y: area.height.saturating_sub(1),
        width: hint_width.min(area.width),
        height: 1,
    };
    frame.render_widget(Paragraph::new(theme_hint).style(bar_style), hint_area);
}

/// Get keyboard hints for the current page
fn get_page_hints(page: Page) -> String {
    match page {
        Page::Home => format!("F1-F5:pages  ^G:go to  {HISTORY_SHORTCUT}:history  ^X:clear"),
        _ => format!("Tab:next  {SUBMIT_SHORTCUT}:save  Esc:back  {HISTORY_SHORTCUT}:history"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_status_line() {
        let (sidebar, main) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(sidebar.width, 24);
        assert_eq!(sidebar.height, 23);
        assert_eq!(main.x, 24);
        assert_eq!(main.width, 56);
    }

    #[test]
    fn test_form_hints_mention_submit() {
        assert!(get_page_hints(Page::Contact).contains(SUBMIT_SHORTCUT));
        assert!(get_page_hints(Page::Home).contains("^X"));
    }
}
