//! Application state definitions

use super::document::Document;
use super::forms::PageForm;
use crate::router::{Navigation, Page, RouteEntry, Router};

/// Lines moved by one page scroll
pub const SCROLL_STEP: u16 = 5;

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    // Navigation
    pub document: Document,
    pub router: Router,

    // Form of the current page, `None` on the home page
    pub form: Option<PageForm>,

    // UI state
    pub scroll_offset: u16,
    pub status_message: Option<String>,
    /// Path being typed in the "go to" prompt
    pub path_prompt: Option<String>,
}

impl AppState {
    /// State positioned at `start_path`
    pub fn new(start_path: &str) -> Self {
        let mut document = Document::default();
        let router = Router::new(start_path, &mut document);
        let form = PageForm::for_page(router.current().page);
        Self {
            document,
            router,
            form,
            scroll_offset: 0,
            status_message: None,
            path_prompt: None,
        }
    }

    pub fn current_route(&self) -> &'static RouteEntry {
        self.router.current()
    }

    pub fn current_page(&self) -> Page {
        self.router.current().page
    }

    /// Navigate to a path; unknown paths land on the home page. Navigating to
    /// the page already shown keeps its form and scroll offset.
    pub fn navigate(&mut self, path: &str) {
        if let Some(navigation) = self
            .router
            .push(path, self.scroll_offset, &mut self.document)
        {
            self.apply(navigation);
        }
    }

    pub fn go_back(&mut self) -> bool {
        match self.router.back(self.scroll_offset, &mut self.document) {
            Some(navigation) => {
                self.apply(navigation);
                true
            }
            None => false,
        }
    }

    pub fn go_forward(&mut self) -> bool {
        match self.router.forward(self.scroll_offset, &mut self.document) {
            Some(navigation) => {
                self.apply(navigation);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, navigation: Navigation) {
        self.scroll_offset = navigation.scroll;
        self.form = PageForm::for_page(navigation.entry.page);
        self.status_message = None;
    }

    /// Scroll down by `step` rows, never past `max_offset`
    pub fn scroll_down(&mut self, step: u16, max_offset: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(step).min(max_offset);
    }

    pub fn scroll_up(&mut self, step: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(step);
    }
}
