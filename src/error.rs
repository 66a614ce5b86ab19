use std::fmt;
use thiserror::Error;

/// Errors raised by [`Calculator`](crate::calculator::Calculator) operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    #[error("cannot divide by zero")]
    DivisionByZero,
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// The input that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidField {
    Email,
    Password,
    Name,
    NewName,
    NewPassword,
}

impl fmt::Display for InvalidField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidField::Email => write!(f, "invalid email"),
            InvalidField::Password => write!(f, "password must be at least 5 characters"),
            InvalidField::Name => write!(f, "name must not be blank"),
            InvalidField::NewName => write!(f, "new name must not be blank"),
            InvalidField::NewPassword => write!(f, "new password must be at least 5 characters"),
        }
    }
}

/// Errors that can occur during user registry operations.
///
/// Expected failures (duplicate email, wrong password, unknown user) are not
/// errors; they come back as `false` or `None`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(InvalidField),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl UserError {
    /// The offending field, if this is a validation error.
    pub fn field(&self) -> Option<InvalidField> {
        match self {
            UserError::InvalidArgument(field) => Some(*field),
            UserError::ActorCommunicationError(_) => None,
        }
    }
}
