//! Request body validation.
//!
//! Each endpoint validates its explicit schema at the boundary and reports
//! every violated field at once rather than failing on the first.

use crate::services::user::normalize_email;

use super::error::FieldError;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Validate a registration body. Empty result means the input is acceptable.
#[must_use]
pub fn validate_register(name: &str, email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push(FieldError::new("Name is required", "name"));
    }
    if normalize_email(email).is_none() {
        errors.push(FieldError::new("Please include a valid email", "email"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "Password must be at least 6 characters",
            "password",
        ));
    }
    errors
}

/// Validate a login body.
#[must_use]
pub fn validate_login(email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if normalize_email(email).is_none() {
        errors.push(FieldError::new("Please include a valid email", "email"));
    }
    if password.is_empty() {
        errors.push(FieldError::new("Password is required", "password"));
    }
    errors
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
