//! Saved form submissions and theme state

use super::storage::{KeyValueStorage, StorageError};
use super::theme::Theme;
use crate::state::Document;
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Storage key of the serialized submission list
pub const FORM_HISTORY_KEY: &str = "formHistory";

/// Storage key of the theme flag
pub const THEME_KEY: &str = "theme";

/// Maximum number of submissions kept, oldest dropped first
pub const MAX_HISTORY: usize = 50;

/// Default size of `get_recent_forms`
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// One saved form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub form_name: String,
    pub data: Map<String, Value>,
    /// Epoch milliseconds
    pub timestamp: i64,
}

impl FormSubmission {
    pub fn submitted_at(&self) -> Option<DateTime<Local>> {
        Utc.timestamp_millis_opt(self.timestamp)
            .single()
            .map(|dt| dt.with_timezone(&Local))
    }
}

/// Submission history and theme, mirrored to key-value storage.
///
/// In-memory state is updated before the storage write, so a failed write
/// leaves the session consistent and only loses persistence.
#[derive(Debug)]
pub struct FormStore<S: KeyValueStorage> {
    storage: S,
    form_history: Vec<FormSubmission>,
    theme: Theme,
}

impl<S: KeyValueStorage> FormStore<S> {
    /// Rehydrate state from storage, falling back to defaults for absent or
    /// undecodable values
    pub fn load(storage: S) -> Self {
        let mut form_history = match storage.load(FORM_HISTORY_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<FormSubmission>>(&raw) {
                Ok(history) => history,
                Err(e) => {
                    tracing::warn!("Discarding undecodable form history: {e}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        form_history.truncate(MAX_HISTORY);

        let theme = storage
            .load(THEME_KEY)
            .and_then(|raw| raw.parse::<Theme>().ok())
            .unwrap_or_default();

        tracing::debug!(
            "Loaded {} saved forms, theme {theme}",
            form_history.len()
        );

        Self {
            storage,
            form_history,
            theme,
        }
    }

    /// Record a submission as the most recent entry and persist the history
    pub fn save_form(
        &mut self,
        form_name: &str,
        data: Map<String, Value>,
    ) -> Result<(), StorageError> {
        let submission = FormSubmission {
            form_name: form_name.to_string(),
            data,
            timestamp: Utc::now().timestamp_millis(),
        };
        self.add_submission(submission)
    }

    fn add_submission(&mut self, submission: FormSubmission) -> Result<(), StorageError> {
        tracing::debug!("Saving {} submission", submission.form_name);
        self.form_history.insert(0, submission);
        self.form_history.truncate(MAX_HISTORY);
        let encoded = serde_json::to_string(&self.form_history)?;
        self.storage.save(FORM_HISTORY_KEY, &encoded)
    }

    /// Drop every submission and the persisted key
    pub fn clear_history(&mut self) -> Result<(), StorageError> {
        tracing::debug!("Clearing {} saved forms", self.form_history.len());
        self.form_history.clear();
        self.storage.remove(FORM_HISTORY_KEY)
    }

    /// Flip the theme, persist it and apply it to the document
    pub fn toggle_theme(&mut self, document: &mut Document) -> Result<Theme, StorageError> {
        self.theme = self.theme.toggle();
        document.set_theme(self.theme);
        self.storage.save(THEME_KEY, self.theme.as_str())?;
        Ok(self.theme)
    }

    /// Apply the loaded theme to the document without changing it
    pub fn init_theme(&self, document: &mut Document) {
        document.set_theme(self.theme);
    }

    pub fn current_theme(&self) -> Theme {
        self.theme
    }

    pub fn get_all_forms(&self) -> &[FormSubmission] {
        &self.form_history
    }

    pub fn get_forms_by_name(&self, form_name: &str) -> Vec<&FormSubmission> {
        self.form_history
            .iter()
            .filter(|f| f.form_name == form_name)
            .collect()
    }

    pub fn get_recent_forms(&self, limit: usize) -> &[FormSubmission] {
        &self.form_history[..limit.min(self.form_history.len())]
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[cfg(test)]
    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStorage, MockKeyValueStorage};
    use mockall::predicate::eq;
    use serde_json::json;

    fn data(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test data must be an object"),
        }
    }

    fn empty_store() -> FormStore<MemoryStorage> {
        FormStore::load(MemoryStorage::new())
    }

    mod loading {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_defaults_when_storage_empty() {
            let store = empty_store();
            assert!(store.get_all_forms().is_empty());
            assert_eq!(store.current_theme(), Theme::Light);
        }

        #[test]
        fn test_reads_persisted_state() {
            let mut storage = MemoryStorage::new();
            storage
                .save(
                    FORM_HISTORY_KEY,
                    r#"[{"formName":"Contact","data":{"name":"Anna"},"timestamp":1700000000000}]"#,
                )
                .unwrap();
            storage.save(THEME_KEY, "dark").unwrap();

            let store = FormStore::load(storage);
            assert_eq!(store.current_theme(), Theme::Dark);
            assert_eq!(
                store.get_all_forms(),
                &[FormSubmission {
                    form_name: "Contact".to_string(),
                    data: data(json!({"name": "Anna"})),
                    timestamp: 1_700_000_000_000,
                }]
            );
        }

        #[test]
        fn test_undecodable_history_is_empty() {
            let mut storage = MemoryStorage::new();
            storage.save(FORM_HISTORY_KEY, "{broken").unwrap();
            storage.save(THEME_KEY, "sepia").unwrap();

            let store = FormStore::load(storage);
            assert!(store.get_all_forms().is_empty());
            assert_eq!(store.current_theme(), Theme::Light);
        }
    }

    mod history {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_save_form_is_most_recent_first() {
            let mut store = empty_store();
            store.save_form("Feedback", data(json!({"n": 1}))).unwrap();
            store.save_form("Contact", data(json!({"n": 2}))).unwrap();

            let names: Vec<_> = store
                .get_all_forms()
                .iter()
                .map(|f| f.form_name.as_str())
                .collect();
            assert_eq!(names, vec!["Contact", "Feedback"]);
            assert!(store.get_all_forms()[0].timestamp > 0);
        }

        #[test]
        fn test_history_is_capped() {
            let mut store = empty_store();
            for n in 0..51 {
                store.save_form("Feedback", data(json!({ "n": n }))).unwrap();
            }

            let forms = store.get_all_forms();
            assert_eq!(forms.len(), MAX_HISTORY);
            assert_eq!(forms[0].data["n"], json!(50));
            assert_eq!(forms[49].data["n"], json!(1));

            let persisted: Vec<FormSubmission> = serde_json::from_str(
                &store.storage().load(FORM_HISTORY_KEY).unwrap(),
            )
            .unwrap();
            assert_eq!(persisted.len(), MAX_HISTORY);
        }

        #[test]
        fn test_persisted_layout_uses_camel_case() {
            let mut store = empty_store();
            store.save_form("Profile", data(json!({"bio": "hi"}))).unwrap();
            let raw = store.storage().load(FORM_HISTORY_KEY).unwrap();
            assert!(raw.contains("\"formName\":\"Profile\""));
            assert!(raw.contains("\"timestamp\":"));
        }

        #[test]
        fn test_clear_then_reload_is_empty() {
            let mut store = empty_store();
            store.save_form("Contact", Map::new()).unwrap();
            store.clear_history().unwrap();
            assert!(store.get_all_forms().is_empty());

            let storage = store.into_storage();
            assert!(storage.load(FORM_HISTORY_KEY).is_none());
            let reloaded = FormStore::load(storage);
            assert!(reloaded.get_all_forms().is_empty());
        }

        #[test]
        fn test_reload_keeps_submissions() {
            let mut store = empty_store();
            store.save_form("Registration", data(json!({"email": "a@b.ru"}))).unwrap();
            let reloaded = FormStore::load(store.into_storage());
            assert_eq!(reloaded.get_all_forms().len(), 1);
            assert_eq!(reloaded.get_all_forms()[0].form_name, "Registration");
        }
    }

    mod queries {
        use super::*;
        use pretty_assertions::assert_eq;

        fn filled_store() -> FormStore<MemoryStorage> {
            let mut store = empty_store();
            for n in 0..12 {
                let name = if n % 3 == 0 { "Contact" } else { "Feedback" };
                store.save_form(name, data(json!({ "n": n }))).unwrap();
            }
            store
        }

        #[test]
        fn test_forms_by_name() {
            let store = filled_store();
            let contacts = store.get_forms_by_name("Contact");
            assert_eq!(contacts.len(), 4);
            assert!(contacts.iter().all(|f| f.form_name == "Contact"));
            assert!(store.get_forms_by_name("contact").is_empty());
        }

        #[test]
        fn test_recent_forms() {
            let store = filled_store();
            let recent = store.get_recent_forms(DEFAULT_RECENT_LIMIT);
            assert_eq!(recent.len(), 10);
            assert_eq!(recent[0].data["n"], json!(11));
            assert_eq!(store.get_recent_forms(100).len(), 12);
            assert!(store.get_recent_forms(0).is_empty());
        }

        #[test]
        fn test_queries_do_not_touch_storage() {
            let mut storage = MockKeyValueStorage::new();
            storage.expect_load().returning(|_| None);
            storage.expect_save().never();
            storage.expect_remove().never();

            let store = FormStore::load(storage);
            assert!(store.get_all_forms().is_empty());
            assert!(store.get_forms_by_name("Contact").is_empty());
            assert!(store.get_recent_forms(DEFAULT_RECENT_LIMIT).is_empty());
        }
    }

    mod theme {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_toggle_twice_restores_theme() {
            let mut store = empty_store();
            let mut document = Document::default();
            assert_eq!(store.toggle_theme(&mut document).unwrap(), Theme::Dark);
            assert_eq!(document.theme(), Some(Theme::Dark));
            assert_eq!(store.storage().load(THEME_KEY).as_deref(), Some("dark"));

            assert_eq!(store.toggle_theme(&mut document).unwrap(), Theme::Light);
            assert_eq!(document.theme(), Some(Theme::Light));
            assert_eq!(store.storage().load(THEME_KEY).as_deref(), Some("light"));
        }

        #[test]
        fn test_init_theme_applies_without_persisting() {
            let mut storage = MockKeyValueStorage::new();
            storage
                .expect_load()
                .with(eq(THEME_KEY))
                .returning(|_| Some("dark".to_string()));
            storage
                .expect_load()
                .with(eq(FORM_HISTORY_KEY))
                .returning(|_| None);
            storage.expect_save().never();

            let store = FormStore::load(storage);
            let mut document = Document::default();
            store.init_theme(&mut document);
            store.init_theme(&mut document);
            assert_eq!(document.theme(), Some(Theme::Dark));
            assert_eq!(store.current_theme(), Theme::Dark);
        }

        #[test]
        fn test_failed_write_keeps_memory_state() {
            let mut storage = MockKeyValueStorage::new();
            storage.expect_load().returning(|_| None);
            storage
                .expect_save()
                .returning(|_, _| Err(StorageError::Io(std::io::Error::other("disk full"))));

            let mut store = FormStore::load(storage);
            let mut document = Document::default();
            assert!(store.toggle_theme(&mut document).is_err());
            assert_eq!(store.current_theme(), Theme::Dark);
            assert_eq!(document.theme(), Some(Theme::Dark));

            assert!(store.save_form("Contact", Map::new()).is_err());
            assert_eq!(store.get_all_forms().len(), 1);
        }
    }
}
