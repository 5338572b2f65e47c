//! Application state and core logic

use crate::config::AppConfig;
use crate::phone::PhoneMask;
use crate::platform::HISTORY_MODIFIER;
use crate::router;
use crate::state::{AppState, Form, FormField, SCROLL_STEP};
use crate::store::{FileStorage, FormStore, KeyValueStorage, MemoryStorage};
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// Window for the second Ctrl+C press that quits
const QUIT_WINDOW: Duration = Duration::from_secs(1);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Saved submissions and theme
    pub store: FormStore<Box<dyn KeyValueStorage>>,
    /// Live-edit mask for phone fields
    phone_mask: PhoneMask,
    /// Number of submissions listed on the home page
    pub recent_limit: usize,
    /// Whether the app should quit
    quit: bool,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance from the user configuration
    pub fn new(config: &AppConfig) -> Self {
        let storage: Box<dyn KeyValueStorage> = match config
            .storage_path
            .clone()
            .or_else(FileStorage::default_path)
        {
            Some(path) => {
                tracing::info!("Using storage file {}", path.display());
                Box::new(FileStorage::open(path))
            }
            None => {
                tracing::warn!("No data directory available, history will not be kept");
                Box::new(MemoryStorage::new())
            }
        };
        Self::with_storage(storage, config)
    }

    /// Create an App on top of an existing storage backend
    pub fn with_storage(storage: Box<dyn KeyValueStorage>, config: &AppConfig) -> Self {
        let store = FormStore::load(storage);
        let mut state = AppState::new(config.start_path());
        store.init_theme(&mut state.document);

        Self {
            state,
            store,
            phone_mask: PhoneMask::new(),
            recent_limit: config.recent_limit(),
            quit: false,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            let now = Instant::now();
            if self
                .last_ctrl_c
                .is_some_and(|last| now.duration_since(last) < QUIT_WINDOW)
            {
                self.quit = true;
            } else {
                self.last_ctrl_c = Some(now);
                self.state.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
            return;
        }

        // The path prompt is modal
        if self.state.path_prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        if self.state.current_page().has_form() {
            self.handle_form_key(key);
        } else {
            self.handle_home_key(key);
        }
    }

    /// Keys that work on every page. Returns true if the key was consumed.
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::F(n @ 1..=5) => {
                let entry = &router::entries()[usize::from(n) - 1];
                self.navigate(entry.path);
            }
            KeyCode::Left if key.modifiers.contains(HISTORY_MODIFIER) => {
                self.state.go_back();
            }
            KeyCode::Right if key.modifiers.contains(HISTORY_MODIFIER) => {
                self.state.go_forward();
            }
            KeyCode::Char('g') if ctrl => {
                self.state.path_prompt = Some(self.state.current_route().path.to_string());
            }
            KeyCode::Char('t') if ctrl => self.toggle_theme(),
            KeyCode::PageDown => {
                let max_offset = self.max_scroll_offset();
                self.state.scroll_down(SCROLL_STEP, max_offset);
            }
            KeyCode::PageUp => self.state.scroll_up(SCROLL_STEP),
            _ => return false,
        }
        true
    }

    /// Scroll limit of the current page's content
    fn max_scroll_offset(&self) -> u16 {
        match &self.state.form {
            Some(form) => ui::max_form_scroll(form),
            None => ui::max_history_scroll(self),
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.state.path_prompt.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char(c) => prompt.push(c),
            KeyCode::Backspace => {
                prompt.pop();
            }
            KeyCode::Enter => {
                let path = std::mem::take(prompt);
                self.state.path_prompt = None;
                self.navigate(&path);
            }
            KeyCode::Esc => self.state.path_prompt = None,
            _ => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('x') if ctrl => self.clear_history(),
            KeyCode::Down | KeyCode::Char('j') => {
                let max_offset = self.max_scroll_offset();
                self.state.scroll_down(1, max_offset);
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(1),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let Some(form) = self.state.form.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Char('s') if ctrl => {
                self.submit_form();
                return;
            }
            KeyCode::Esc => {
                if !self.state.go_back() {
                    self.navigate("/");
                }
                return;
            }
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Enter => {
                if form.get_active_field_mut().is_multiline() {
                    self.edit_active_field(|field| field.insert_char('\n'));
                } else {
                    form.next_field();
                }
            }
            KeyCode::Left => form.get_active_field_mut().move_left(),
            KeyCode::Right => form.get_active_field_mut().move_right(),
            KeyCode::Home => form.get_active_field_mut().move_home(),
            KeyCode::End => form.get_active_field_mut().move_end(),
            KeyCode::Char(c) if !ctrl => self.edit_active_field(|field| field.insert_char(c)),
            KeyCode::Backspace => self.edit_active_field(|field| field.backspace()),
            KeyCode::Delete => self.edit_active_field(|field| field.delete()),
            _ => {}
        }
    }

    /// Apply an edit to the active field, re-mask phone fields and let the
    /// form react to the change
    fn edit_active_field(&mut self, edit: impl FnOnce(&mut FormField)) {
        let Some(form) = self.state.form.as_mut() else {
            return;
        };
        let field = form.get_active_field_mut();
        edit(field);
        if field.is_phone() {
            self.phone_mask.handle_input(field);
        }
        form.sync_changes();
    }

    /// Validate the current form and save it to the history
    pub fn submit_form(&mut self) {
        let Some(form) = self.state.form.as_mut() else {
            return;
        };

        if !form.validate() {
            let count = form.error_count();
            tracing::debug!("{} form has {count} invalid fields", form.form_name);
            self.state.status_message = Some(format!("Исправьте ошибки в форме ({count})"));
            return;
        }

        let data = form.to_data();
        let form_name = form.form_name;
        match self.store.save_form(form_name, data) {
            Ok(()) => {
                self.state.status_message = Some("Форма сохранена".to_string());
            }
            Err(e) => {
                tracing::error!("Failed to persist {form_name} submission: {e}");
                self.state.status_message = Some(format!("Форма сохранена без записи: {e}"));
            }
        }
        form.reset();
    }

    pub fn toggle_theme(&mut self) {
        match self.store.toggle_theme(&mut self.state.document) {
            Ok(theme) => tracing::debug!("Theme switched to {theme}"),
            Err(e) => {
                tracing::error!("Failed to persist theme: {e}");
                self.state.status_message = Some(format!("Тема не сохранена: {e}"));
            }
        }
    }

    pub fn clear_history(&mut self) {
        match self.store.clear_history() {
            Ok(()) => {
                self.state.scroll_offset = 0;
                self.state.status_message = Some("История очищена".to_string());
            }
            Err(e) => {
                tracing::error!("Failed to clear stored history: {e}");
                self.state.status_message = Some(format!("История не удалена: {e}"));
            }
        }
    }

    pub fn navigate(&mut self, path: &str) {
        self.state.navigate(path);
    }
}
