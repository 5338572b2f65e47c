//! Form state management and the page forms

use super::field::FormField;
use crate::phone::{InputTarget, PhoneRule};
use crate::router::{self, Page};
use serde_json::{Map, Value};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The form shown on one of the form pages
#[derive(Debug, Clone)]
pub struct PageForm {
    /// Name the submission is saved under
    pub form_name: &'static str,
    pub fields: Vec<FormField>,
    pub active_field_index: usize,
}

impl PageForm {
    fn new(page: Page, fields: Vec<FormField>) -> Self {
        Self {
            form_name: router::entry_for(page).name,
            fields,
            active_field_index: 0,
        }
    }

    /// Build the empty form for a page; the home page has none
    pub fn for_page(page: Page) -> Option<Self> {
        let fields = match page {
            Page::Home => return None,
            Page::Registration => vec![
                FormField::text("name", "Имя").required(),
                FormField::email("email", "Email").required(),
                FormField::phone("phone", "Телефон", PhoneRule::Required),
            ],
            Page::Feedback => vec![
                FormField::text("name", "Имя").required(),
                FormField::email("email", "Email"),
                FormField::phone("phone", "Телефон", PhoneRule::Optional),
                FormField::multiline("message", "Сообщение").required(),
            ],
            Page::Profile => vec![
                FormField::text("name", "Имя").required(),
                FormField::phone("phone", "Телефон", PhoneRule::Optional),
                FormField::multiline("bio", "О себе"),
            ],
            Page::Contact => vec![
                FormField::text("name", "Имя").required(),
                FormField::phone("phone", "Телефон", PhoneRule::Required),
                FormField::multiline("message", "Сообщение").required(),
            ],
        };
        Some(Self::new(page, fields))
    }

    /// Validate every field, storing each field's error. Returns whether the
    /// form is valid.
    pub fn validate(&mut self) -> bool {
        let mut valid = true;
        for field in &mut self.fields {
            field.error = field.validate().err();
            valid &= field.error.is_none();
        }
        valid
    }

    /// Number of fields currently showing an error
    pub fn error_count(&self) -> usize {
        self.fields.iter().filter(|f| f.error.is_some()).count()
    }

    /// Field values keyed by field name
    pub fn to_data(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), Value::String(f.value().trim().to_string())))
            .collect()
    }

    /// Drop stale errors on fields whose value changed since the last check
    pub fn sync_changes(&mut self) {
        for field in &mut self.fields {
            if field.take_change() {
                field.error = None;
            }
        }
    }

    /// Empty every field and return to the first one
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_field_index = 0;
    }
}

impl Form for PageForm {
    fn field_count(&self) -> usize {
        self.fields.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len().saturating_sub(1));
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        &mut self.fields[self.active_field_index]
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
