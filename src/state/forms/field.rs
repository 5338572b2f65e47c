//! Form field value objects

use crate::phone::{InputTarget, PhoneRule, PhoneValidationError};
use thiserror::Error;

/// Validation failure for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Заполните это поле")]
    Required,
    #[error("Некорректный email")]
    InvalidEmail,
    #[error(transparent)]
    Phone(#[from] PhoneValidationError),
}

/// What kind of input a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    Email,
    Phone(PhoneRule),
}

/// A single form field: value, cursor and validation state.
///
/// The cursor is a character offset into the value.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub error: Option<FieldError>,
    value: String,
    cursor: usize,
    changed: bool,
}

impl FormField {
    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: false,
            error: None,
            value: String::new(),
            cursor: 0,
            changed: false,
        }
    }

    /// Create a new single-line text field
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// Create a new multiline text field
    pub fn multiline(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Multiline)
    }

    /// Create a new email field
    pub fn email(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    /// Create a new masked phone field; the rule decides whether it is required
    pub fn phone(name: &str, label: &str, rule: PhoneRule) -> Self {
        let mut field = Self::new(name, label, FieldKind::Phone(rule));
        field.required = rule == PhoneRule::Required;
        field
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Multiline
    }

    pub fn is_phone(&self) -> bool {
        matches!(self.kind, FieldKind::Phone(_))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
        self.changed = true;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
        self.changed = true;
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
        self.changed = true;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Clear the value and any validation error
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.error = None;
        self.changed = false;
    }

    /// Returns whether the value changed since the last call
    pub fn take_change(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// Check the current value against the field rules
    pub fn validate(&self) -> Result<(), FieldError> {
        let value = self.value.trim();
        match self.kind {
            FieldKind::Phone(rule) => rule.validate(Some(value)).map_err(FieldError::from),
            _ if value.is_empty() => {
                if self.required {
                    Err(FieldError::Required)
                } else {
                    Ok(())
                }
            }
            FieldKind::Email if !is_plausible_email(value) => Err(FieldError::InvalidEmail),
            _ => Ok(()),
        }
    }
}

/// `local@domain.tld` with no whitespace
fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

impl InputTarget for FormField {
    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
        self.cursor = self.cursor.min(self.char_len());
    }

    fn selection_start(&self) -> Option<usize> {
        Some(self.cursor)
    }

    fn set_selection_range(&mut self, start: usize, _end: usize) {
        self.cursor = start.min(self.char_len());
    }

    fn dispatch_input(&mut self) {
        self.changed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phone::PhoneMask;

    fn typed(mut field: FormField, text: &str) -> FormField {
        for c in text.chars() {
            field.insert_char(c);
        }
        field
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_insert_at_cursor() {
            let mut field = typed(FormField::text("name", "Имя"), "Анна");
            field.move_left();
            field.move_left();
            field.insert_char('-');
            assert_eq!(field.value(), "Ан-на");
            assert_eq!(field.cursor(), 3);
        }

        #[test]
        fn test_backspace_and_delete() {
            let mut field = typed(FormField::text("name", "Имя"), "abc");
            field.backspace();
            assert_eq!(field.value(), "ab");
            field.move_home();
            field.delete();
            assert_eq!(field.value(), "b");
            field.backspace();
            assert_eq!(field.value(), "b");
        }

        #[test]
        fn test_cursor_bounds() {
            let mut field = typed(FormField::text("name", "Имя"), "ab");
            field.move_right();
            assert_eq!(field.cursor(), 2);
            field.move_home();
            field.move_left();
            assert_eq!(field.cursor(), 0);
            field.move_end();
            assert_eq!(field.cursor(), 2);
        }

        #[test]
        fn test_take_change_resets() {
            let mut field = typed(FormField::text("name", "Имя"), "a");
            assert!(field.take_change());
            assert!(!field.take_change());
        }

        #[test]
        fn test_clear() {
            let mut field = typed(FormField::text("name", "Имя"), "abc");
            field.error = Some(FieldError::Required);
            field.clear();
            assert_eq!(field.value(), "");
            assert_eq!(field.cursor(), 0);
            assert!(field.error.is_none());
        }
    }

    mod masking {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_through_mask() {
            let mask = PhoneMask::new();
            let mut field = FormField::phone("phone", "Телефон", PhoneRule::Required);
            for c in "71234567890".chars() {
                field.insert_char(c);
                mask.handle_input(&mut field);
            }
            assert_eq!(field.value(), "+7 (123) 456-78-90");
            assert_eq!(field.cursor(), 18);
        }

        #[test]
        fn test_backspace_through_mask() {
            let mask = PhoneMask::new();
            let mut field = FormField::phone("phone", "Телефон", PhoneRule::Required);
            for c in "71234".chars() {
                field.insert_char(c);
                mask.handle_input(&mut field);
            }
            assert_eq!(field.value(), "+7 (123) 4");
            field.backspace();
            mask.handle_input(&mut field);
            assert_eq!(field.value(), "+7 (123)");
            assert_eq!(field.cursor(), 8);
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_required_text() {
            let field = FormField::text("name", "Имя").required();
            assert_eq!(field.validate(), Err(FieldError::Required));
            assert_eq!(typed(field, "  ").validate(), Err(FieldError::Required));
        }

        #[test]
        fn test_optional_text_accepts_blank() {
            assert_eq!(FormField::multiline("bio", "О себе").validate(), Ok(()));
        }

        #[test]
        fn test_email() {
            let field = FormField::email("email", "Email");
            assert_eq!(field.validate(), Ok(()));
            assert_eq!(
                typed(field.clone(), "anna@").validate(),
                Err(FieldError::InvalidEmail)
            );
            assert_eq!(typed(field, "anna@mail.ru").validate(), Ok(()));
        }

        #[test]
        fn test_phone_rules() {
            let required = FormField::phone("phone", "Телефон", PhoneRule::Required);
            assert!(required.required);
            assert_eq!(
                required.validate(),
                Err(FieldError::Phone(PhoneValidationError::Missing))
            );
            assert_eq!(
                typed(required, "+7 (123").validate(),
                Err(FieldError::Phone(PhoneValidationError::Malformed))
            );

            let optional = FormField::phone("phone", "Телефон", PhoneRule::Optional);
            assert_eq!(optional.validate(), Ok(()));
        }

        #[test]
        fn test_phone_error_message_passes_through() {
            let err = FieldError::from(PhoneValidationError::Malformed);
            assert_eq!(
                err.to_string(),
                "Некорректный номер телефона, +7(###)###-##-##"
            );
        }
    }
}
