//! In-memory user registry keyed by email.
//!
//! Two kinds of failure come out of here. Malformed input is a hard
//! [`UserError::InvalidArgument`], returned before anything is touched.
//! Everything else (duplicate email, wrong password, unknown user) is a soft
//! `false` / `None`.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info, instrument, warn};

use crate::domain::{NewUser, User};
use crate::error::{InvalidField, UserError};
use crate::password::{PasswordScheme, PlainText};
use crate::validation::{validate_email, validate_name, validate_password};

/// Owns the email -> [`User`] mapping. At most one user per email.
///
/// Not synchronized; see [`RegistryService`](crate::service::RegistryService)
/// for shared access.
pub struct UserRegistry<S: PasswordScheme = PlainText> {
    users: HashMap<String, User>,
    scheme: S,
}

/// Point-in-time summary of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    pub total_users: usize,
}

impl fmt::Display for RegistryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User registry - total: {} registered users", self.total_users)
    }
}

impl Default for UserRegistry<PlainText> {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRegistry<PlainText> {
    pub fn new() -> Self {
        Self::with_scheme(PlainText)
    }
}

impl<S: PasswordScheme> UserRegistry<S> {
    pub fn with_scheme(scheme: S) -> Self {
        Self {
            users: HashMap::new(),
            scheme,
        }
    }

    /// Registers a new user.
    ///
    /// Returns `Ok(false)` if the email is already taken. That check runs
    /// before any validation, so a duplicate with a bad password still
    /// reports `false` rather than an error.
    ///
    /// # Errors
    /// `InvalidArgument` naming the first field that fails, checked in the
    /// order email, password, name.
    #[instrument(fields(email = %email), skip(self, email, password, name))]
    pub fn register(&mut self, email: &str, password: &str, name: &str) -> Result<bool, UserError> {
        if self.users.contains_key(email) {
            debug!("Email already registered");
            return Ok(false);
        }

        validate_email(email)
            .and_then(|_| validate_password(password, InvalidField::Password))
            .and_then(|_| validate_name(name, InvalidField::Name))
            .inspect_err(|e| warn!(error = %e, "Registration rejected"))?;

        let user = User::new(email, self.scheme.seal(password), name);
        self.users.insert(email.to_string(), user);

        info!(user_count = self.users.len(), "User registered");
        Ok(true)
    }

    /// [`register`](Self::register) taking a creation payload.
    pub fn register_user(&mut self, user: NewUser) -> Result<bool, UserError> {
        self.register(&user.email, &user.password, &user.name)
    }

    /// Returns the user if `email` is registered and `password` matches.
    #[instrument(fields(email = %email), skip(self, email, password))]
    pub fn authenticate(&self, email: &str, password: &str) -> Option<User> {
        let Some(user) = self.users.get(email) else {
            debug!("Unknown email");
            return None;
        };

        if self.scheme.verify(user.password(), password) {
            debug!("Authenticated");
            Some(user.clone())
        } else {
            debug!("Password mismatch");
            None
        }
    }

    #[instrument(skip(self))]
    pub fn delete(&mut self, email: &str) -> bool {
        let removed = self.users.remove(email).is_some();
        if removed {
            info!(user_count = self.users.len(), "User deleted");
        } else {
            debug!("Nothing to delete");
        }
        removed
    }

    #[instrument(skip(self))]
    pub fn find(&self, email: &str) -> Option<User> {
        self.users.get(email).cloned()
    }

    /// Snapshot of every user. The returned vector is detached from the
    /// registry. Order is unspecified.
    pub fn list_all(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    /// Replaces the display name of an existing user.
    ///
    /// Returns `Ok(false)` for an unknown email, checked before validation.
    #[instrument(skip(self))]
    pub fn update_name(&mut self, email: &str, new_name: &str) -> Result<bool, UserError> {
        let Some(user) = self.users.get_mut(email) else {
            debug!("User not found for update");
            return Ok(false);
        };

        validate_name(new_name, InvalidField::NewName)
            .inspect_err(|e| warn!(error = %e, "Name update rejected"))?;

        user.set_name(new_name);
        info!("Name updated");
        Ok(true)
    }

    /// Replaces the password after checking the current one.
    ///
    /// Returns `Ok(false)` when the email is unknown or `current` does not
    /// match; the two cases are indistinguishable to the caller.
    #[instrument(fields(email = %email), skip(self, email, current, new_password))]
    pub fn change_password(
        &mut self,
        email: &str,
        current: &str,
        new_password: &str,
    ) -> Result<bool, UserError> {
        let scheme = &self.scheme;
        let Some(user) = self
            .users
            .get_mut(email)
            .filter(|user| scheme.verify(user.password(), current))
        else {
            debug!("Password change refused");
            return Ok(false);
        };

        validate_password(new_password, InvalidField::NewPassword)
            .inspect_err(|e| warn!(error = %e, "Password change rejected"))?;

        user.set_password(scheme.seal(new_password));
        info!("Password changed");
        Ok(true)
    }

    pub fn count(&self) -> usize {
        self.users.len()
    }

    #[instrument(skip(self))]
    pub fn exists(&self, email: &str) -> bool {
        self.users.contains_key(email)
    }

    /// Removes every entry. Meant for resetting state between tests.
    pub fn clear(&mut self) {
        self.users.clear();
        debug!("Registry cleared");
    }

    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            total_users: self.users.len(),
        }
    }
}
