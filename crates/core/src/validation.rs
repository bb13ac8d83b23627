//! Form validation helpers.
//!
//! Domain-level checks for the create/edit forms. Each helper reports the
//! offending field together with a message suitable for display.

use thiserror::Error;

use crate::identifier::{LANDLINE_DIGITS, MOBILE_DIGITS, NATIONAL_ID_DIGITS, extract_digits};

/// Maximum email length.
pub const MAX_EMAIL_LENGTH: usize = 255;
/// Maximum name length.
pub const MAX_NAME_LENGTH: usize = 255;
/// Maximum job title length.
pub const MAX_TITLE_LENGTH: usize = 255;

/// A single field violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    /// Build a violation for `field`.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate that a required text field is not blank.
///
/// # Errors
/// Returns a [`ValidationError`] if the value is empty or whitespace only.
pub fn validate_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "Field is required"));
    }
    Ok(())
}

/// Validate a person's name.
///
/// # Errors
/// Returns a [`ValidationError`] if the name is empty or too long.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    validate_required("nome", name)?;

    if name.trim().chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::new(
            "nome",
            format!("Name must not exceed {MAX_NAME_LENGTH} characters"),
        ));
    }

    Ok(())
}

/// Validate email format (basic shape check).
///
/// # Errors
/// Returns a [`ValidationError`] if the email is empty, too long, or malformed.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    validate_required("email", email)?;

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::new(
            "email",
            format!("Email must not exceed {MAX_EMAIL_LENGTH} characters"),
        ));
    }

    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(ValidationError::new("email", "Invalid email format"));
    }

    Ok(())
}

/// Validate that a CPF carries exactly 11 digits.
///
/// Check digits are not verified; the backend owns that rule.
///
/// # Errors
/// Returns a [`ValidationError`] if the digit count is wrong.
pub fn validate_national_id(cpf: &str) -> Result<(), ValidationError> {
    if extract_digits(cpf).len() != NATIONAL_ID_DIGITS {
        return Err(ValidationError::new(
            "cpf",
            format!("CPF must contain {NATIONAL_ID_DIGITS} digits"),
        ));
    }
    Ok(())
}

/// Validate an optional phone number: empty is fine, otherwise 10 or 11 digits.
///
/// # Errors
/// Returns a [`ValidationError`] if a non-empty phone has the wrong digit count.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.trim().is_empty() {
        return Ok(());
    }

    let len = extract_digits(phone).len();
    if len != LANDLINE_DIGITS && len != MOBILE_DIGITS {
        return Err(ValidationError::new(
            "telefone",
            format!("Phone must contain {LANDLINE_DIGITS} or {MOBILE_DIGITS} digits"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_validation() {
        assert!(validate_name("Maria Silva").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"a".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("nodomain").is_err());
        assert_eq!(validate_email("").unwrap_err().field, "email");
    }

    #[test]
    fn test_national_id_validation() {
        assert!(validate_national_id("123.456.789-01").is_ok());
        assert!(validate_national_id("12345678").is_err());
    }

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("").is_ok());
        assert!(validate_phone("(11) 3333-4444").is_ok());
        assert!(validate_phone("(11) 99999-4444").is_ok());
        let err = validate_phone("1133334").unwrap_err();
        assert_eq!(err.field, "telefone");
    }

    #[test]
    fn error_display_includes_field() {
        let err = ValidationError::new("titulo", "Field is required");
        assert_eq!(err.to_string(), "titulo: Field is required");
    }
}
