//! Phone display mask: `+7 (123) 456-78-90`

use std::cell::Cell;

/// Maximum number of digits kept from the input
const MAX_DIGITS: usize = 11;

/// Group lengths: country code, area code, first, second and third part
const GROUP_LENGTHS: [usize; 5] = [1, 3, 3, 2, 2];

/// Literal characters the mask inserts between digit groups
const FORMAT_CHARS: [char; 4] = [' ', '(', ')', '-'];

/// A text input that the live-edit handler can read and rewrite.
///
/// Cursor positions are character offsets into `value()`.
pub trait InputTarget {
    /// Current text of the input
    fn value(&self) -> &str;

    /// Replace the text of the input
    fn set_value(&mut self, value: String);

    /// Start of the current selection, if the input has one
    fn selection_start(&self) -> Option<usize>;

    /// Move the selection to `start..end`
    fn set_selection_range(&mut self, start: usize, end: usize);

    /// Notify observers that the value changed programmatically
    fn dispatch_input(&mut self);
}

/// Strip everything but ASCII digits
pub fn clean_phone(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Check that the value holds an 11-digit number starting with `7`
pub fn is_valid_phone(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    let digits = clean_phone(value);
    digits.len() == MAX_DIGITS && digits.starts_with('7')
}

/// Format raw input as a masked phone number.
///
/// Digits fill the groups left to right; a group is only started once every
/// group before it is full. The area code is closed with `)` only when all
/// three of its digits are present. Input without any digit is returned as is.
pub fn format_phone(raw: &str) -> String {
    let digits: String = clean_phone(raw).chars().take(MAX_DIGITS).collect();
    if digits.is_empty() {
        return raw.to_string();
    }

    let mut groups = [""; 5];
    let mut rest = digits.as_str();
    for (group, len) in groups.iter_mut().zip(GROUP_LENGTHS) {
        let (head, tail) = rest.split_at(rest.len().min(len));
        *group = head;
        rest = tail;
    }
    let [country_code, area_code, first_part, second_part, third_part] = groups;

    let mut result = String::with_capacity(18);
    if !country_code.is_empty() {
        result.push('+');
        result.push_str(country_code);
    }
    if !area_code.is_empty() {
        result.push_str(" (");
        result.push_str(area_code);
        if area_code.len() == GROUP_LENGTHS[1] {
            result.push(')');
        }
    }
    if !first_part.is_empty() {
        result.push(' ');
        result.push_str(first_part);
    }
    if !second_part.is_empty() {
        result.push('-');
        result.push_str(second_part);
    }
    if !third_part.is_empty() {
        result.push('-');
        result.push_str(third_part);
    }
    result
}

/// Live-edit handler that keeps a phone input masked while the user types
#[derive(Debug, Default)]
pub struct PhoneMask {
    is_updating: Cell<bool>,
}

impl PhoneMask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reformat the input in place and keep the cursor next to the digit
    /// the user just typed.
    ///
    /// Calls made while a rewrite is in progress (for example from an
    /// observer of the synthetic input notification) return immediately.
    pub fn handle_input<T: InputTarget + ?Sized>(&self, input: &mut T) {
        if self.is_updating.get() {
            return;
        }

        let start = input.selection_start().unwrap_or(0);
        let old_value = input.value().to_string();
        let formatted = format_phone(&old_value);
        if formatted == old_value {
            return;
        }

        self.is_updating.set(true);

        let old_length = old_value.chars().count() as isize;
        let new_length = formatted.chars().count() as isize;
        let length_diff = new_length - old_length;

        let mut new_position = start as isize + length_diff;
        if length_diff > 0 && new_position >= 1 {
            let before = formatted.chars().nth((new_position - 1) as usize);
            if before.is_some_and(|c| FORMAT_CHARS.contains(&c)) {
                new_position += 1;
            }
        }
        let new_position = new_position.clamp(0, new_length) as usize;

        input.set_value(formatted);
        input.set_selection_range(new_position, new_position);
        input.dispatch_input();

        self.is_updating.set(false);
    }

    /// Whether a rewrite is currently in progress
    #[cfg(test)]
    pub fn is_updating(&self) -> bool {
        self.is_updating.get()
    }
}
