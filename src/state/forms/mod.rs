//! Form domain layer
//!
//! Type-safe form handling for the form pages.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{Form, PageForm};

#[cfg(test)]
pub use field::FieldError;
