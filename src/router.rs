//! Path routing between pages
//!
//! The route table is static. Unknown paths fall through to a catch-all that
//! redirects to the home page.

use crate::state::Document;

/// Application name appended to every page title
pub const APP_NAME: &str = "FormGenerator";

/// Pages the router can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Registration,
    Feedback,
    Profile,
    Contact,
}

impl Page {
    /// Whether the page hosts a form
    pub fn has_form(&self) -> bool {
        !matches!(self, Page::Home)
    }
}

/// A static route: path, page identity and display metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub page: Page,
    pub title: Option<&'static str>,
    pub description: &'static str,
}

/// Path pattern of a route table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoutePattern {
    Exact(usize),
    /// Matches anything and redirects to the given path
    CatchAll { redirect: &'static str },
}

static ROUTES: [RouteEntry; 5] = [
    RouteEntry {
        path: "/",
        name: "Home",
        page: Page::Home,
        title: Some("Главная"),
        description: "Генератор форм на Vue 3",
    },
    RouteEntry {
        path: "/registration",
        name: "Registration",
        page: Page::Registration,
        title: Some("Регистрация"),
        description: "Форма регистрации нового пользователя",
    },
    RouteEntry {
        path: "/feedback",
        name: "Feedback",
        page: Page::Feedback,
        title: Some("Обратная связь"),
        description: "Форма для отправки обратной связи",
    },
    RouteEntry {
        path: "/profile",
        name: "Profile",
        page: Page::Profile,
        title: Some("Настройки профиля"),
        description: "Управление настройками профиля",
    },
    RouteEntry {
        path: "/contact",
        name: "Contact",
        page: Page::Contact,
        title: Some("Контакты"),
        description: "Свяжитесь с нами",
    },
];

/// Matching order: named routes first, the catch-all last
const PATTERNS: [RoutePattern; 6] = [
    RoutePattern::Exact(0),
    RoutePattern::Exact(1),
    RoutePattern::Exact(2),
    RoutePattern::Exact(3),
    RoutePattern::Exact(4),
    RoutePattern::CatchAll { redirect: "/" },
];

/// All named routes in table order
pub fn entries() -> &'static [RouteEntry] {
    &ROUTES
}

/// Route entry for a page
pub fn entry_for(page: Page) -> &'static RouteEntry {
    ROUTES
        .iter()
        .find(|e| e.page == page)
        .unwrap_or(&ROUTES[0])
}

/// Strip query, fragment and trailing slashes
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = path[..end].trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Resolve a path to its route entry, following the catch-all redirect.
///
/// Matching ignores case, the query string, the fragment and a trailing slash.
pub fn resolve(path: &str) -> &'static RouteEntry {
    let path = normalize(path);
    for pattern in PATTERNS {
        match pattern {
            RoutePattern::Exact(idx) if ROUTES[idx].path.eq_ignore_ascii_case(path) => {
                return &ROUTES[idx];
            }
            RoutePattern::Exact(_) => {}
            RoutePattern::CatchAll { redirect } => {
                tracing::debug!("No route for {path}, redirecting to {redirect}");
                return resolve(redirect);
            }
        }
    }
    &ROUTES[0]
}

/// Window title for a route
pub fn document_title(entry: &RouteEntry) -> String {
    match entry.title {
        Some(title) => format!("{title} | {APP_NAME}"),
        None => APP_NAME.to_string(),
    }
}

/// Result of a navigation: where we landed and which scroll offset to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub entry: &'static RouteEntry,
    pub scroll: u16,
}

#[derive(Debug, Clone)]
struct HistorySlot {
    entry: &'static RouteEntry,
    scroll: u16,
}

/// Router with back/forward history and per-slot scroll offsets
#[derive(Debug, Clone)]
pub struct Router {
    history: Vec<HistorySlot>,
    position: usize,
}

impl Router {
    /// Start at `path` and apply its title
    pub fn new(path: &str, document: &mut Document) -> Self {
        let entry = resolve(path);
        document.set_title(document_title(entry));
        Self {
            history: vec![HistorySlot { entry, scroll: 0 }],
            position: 0,
        }
    }

    /// Currently shown route
    pub fn current(&self) -> &'static RouteEntry {
        self.history[self.position].entry
    }

    pub fn can_go_back(&self) -> bool {
        self.position > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.position + 1 < self.history.len()
    }

    /// Navigate to a new path; the target always starts scrolled to the top.
    ///
    /// Returns `None` when the path resolves to the route already shown: the
    /// history is left untouched and the page keeps its state.
    pub fn push(
        &mut self,
        path: &str,
        current_scroll: u16,
        document: &mut Document,
    ) -> Option<Navigation> {
        let entry = resolve(path);
        if std::ptr::eq(entry, self.current()) {
            tracing::debug!("Already on {}, ignoring navigation", entry.path);
            return None;
        }

        self.history[self.position].scroll = current_scroll;
        self.history.truncate(self.position + 1);

        document.set_title(document_title(entry));
        tracing::debug!("Navigating to {} ({})", entry.path, entry.name);

        self.history.push(HistorySlot { entry, scroll: 0 });
        self.position = self.history.len() - 1;
        Some(Navigation { entry, scroll: 0 })
    }

    /// Go back one step, restoring the scroll offset saved for that page
    pub fn back(&mut self, current_scroll: u16, document: &mut Document) -> Option<Navigation> {
        if !self.can_go_back() {
            return None;
        }
        Some(self.step(self.position - 1, current_scroll, document))
    }

    /// Go forward one step, restoring the scroll offset saved for that page
    pub fn forward(&mut self, current_scroll: u16, document: &mut Document) -> Option<Navigation> {
        if !self.can_go_forward() {
            return None;
        }
        Some(self.step(self.position + 1, current_scroll, document))
    }

    fn step(&mut self, target: usize, current_scroll: u16, document: &mut Document) -> Navigation {
        self.history[self.position].scroll = current_scroll;
        self.position = target;
        let slot = &self.history[target];
        document.set_title(document_title(slot.entry));
        Navigation {
            entry: slot.entry,
            scroll: slot.scroll,
        }
    }
}
