//! Field rules applied at the registry boundary.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{InvalidField, UserError};

pub const MIN_PASSWORD_LEN: usize = 5;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern must compile")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn validate_email(email: &str) -> Result<(), UserError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(UserError::InvalidArgument(InvalidField::Email))
    }
}

/// Length is counted in `char`s, not bytes or UTF-16 units.
pub fn validate_password(password: &str, field: InvalidField) -> Result<(), UserError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(UserError::InvalidArgument(field));
    }
    Ok(())
}

/// Blank means empty after `str::trim`, which strips Unicode whitespace.
pub fn validate_name(name: &str, field: InvalidField) -> Result<(), UserError> {
    if name.trim().is_empty() {
        return Err(UserError::InvalidArgument(field));
    }
    Ok(())
}
