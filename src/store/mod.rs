//! Form history store
//!
//! Holds the saved form submissions and the theme flag, mirrored to a
//! key-value storage backend so they survive restarts.

mod history;
mod storage;
mod theme;

pub use history::{FormStore, FormSubmission, DEFAULT_RECENT_LIMIT};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use theme::Theme;

#[cfg(test)]
pub use history::{FORM_HISTORY_KEY, THEME_KEY};
#[cfg(test)]
pub use storage::MockKeyValueStorage;
