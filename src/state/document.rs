//! Document-wide display attributes

use crate::router::APP_NAME;
use crate::store::Theme;

/// Window-level attributes shared by every page: the title shown in the
/// terminal window and the theme attribute that selects the palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    title: String,
    theme: Option<Theme>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            title: APP_NAME.to_string(),
            theme: None,
        }
    }
}

impl Document {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// Theme attribute, `None` until one has been applied
    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }
}
