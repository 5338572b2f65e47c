//! Phone field validation rules

use super::mask::is_valid_phone;
use thiserror::Error;

/// Validation failure for a phone field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PhoneValidationError {
    #[error("Введите номер телефона")]
    Missing,
    #[error("Некорректный номер телефона, +7(###)###-##-##")]
    Malformed,
}

/// Whether a phone field may be left blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhoneRule {
    #[default]
    Optional,
    Required,
}

impl PhoneRule {
    /// Validate a field value; `None` and `""` both count as absent
    pub fn validate(self, value: Option<&str>) -> Result<(), PhoneValidationError> {
        match value.filter(|v| !v.is_empty()) {
            None => match self {
                PhoneRule::Optional => Ok(()),
                PhoneRule::Required => Err(PhoneValidationError::Missing),
            },
            Some(v) if is_valid_phone(v) => Ok(()),
            Some(_) => Err(PhoneValidationError::Malformed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_accepts_blank() {
        assert_eq!(PhoneRule::Optional.validate(None), Ok(()));
        assert_eq!(PhoneRule::Optional.validate(Some("")), Ok(()));
    }

    #[test]
    fn test_optional_rejects_malformed() {
        assert_eq!(
            PhoneRule::Optional.validate(Some("+7 (123")),
            Err(PhoneValidationError::Malformed)
        );
    }

    #[test]
    fn test_required_rejects_blank() {
        assert_eq!(
            PhoneRule::Required.validate(None),
            Err(PhoneValidationError::Missing)
        );
        assert_eq!(
            PhoneRule::Required.validate(Some("")),
            Err(PhoneValidationError::Missing)
        );
    }

    #[test]
    fn test_required_accepts_valid() {
        assert_eq!(
            PhoneRule::Required.validate(Some("+7 (123) 456-78-90")),
            Ok(())
        );
    }

    #[test]
    fn test_required_rejects_other_country() {
        assert_eq!(
            PhoneRule::Required.validate(Some("81234567890")),
            Err(PhoneValidationError::Malformed)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PhoneValidationError::Missing.to_string(),
            "Введите номер телефона"
        );
        assert_eq!(
            PhoneValidationError::Malformed.to_string(),
            "Некорректный номер телефона, +7(###)###-##-##"
        );
    }
}
