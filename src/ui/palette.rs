//! Colors for the light and dark themes

use crate::store::Theme;
use ratatui::style::{Color, Style};

/// Colors used across the UI for one theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub error: Color,
    pub success: Color,
    pub background: Color,
    pub status_bg: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                accent: Color::Blue,
                text: Color::Black,
                muted: Color::Gray,
                error: Color::Red,
                success: Color::Green,
                background: Color::White,
                status_bg: Color::Gray,
            },
            Theme::Dark => Self {
                accent: Color::Cyan,
                text: Color::White,
                muted: Color::DarkGray,
                error: Color::LightRed,
                success: Color::LightGreen,
                background: Color::Black,
                status_bg: Color::DarkGray,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }
}
