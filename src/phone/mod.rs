//! Phone number masking and validation
//!
//! - `mask`: display formatting and the live-edit input handler
//! - `validation`: optional/required phone field rules

mod mask;
mod validation;

pub use mask::{InputTarget, PhoneMask};
pub use validation::{PhoneRule, PhoneValidationError};
