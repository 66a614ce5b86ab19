use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};

/// Represents a registered user in the system.
///
/// The email is the identity: two users are equal iff their emails are equal.
/// `created_at` is set once when the record is built and never changes.
#[derive(Debug, Clone)]
pub struct User {
    email: String,
    password: String,
    name: String,
    created_at: DateTime<Utc>,
}

/// Payload for registering a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl NewUser {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }
}

impl User {
    /// Builds a record stamped with the current time.
    ///
    /// `password` is stored as given; callers hand in the sealed form
    /// produced by their [`PasswordScheme`](crate::password::PasswordScheme).
    pub(crate) fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The stored password, in whatever form the scheme sealed it.
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub(crate) fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.email.hash(state);
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User {{ email: {:?}, name: {:?}, created_at: {} }}",
            self.email, self.name, self.created_at
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_is_by_email() {
        let a = User::new("a@b.com", "12345", "A");
        let b = User::new("a@b.com", "other", "B");
        let c = User::new("c@d.com", "12345", "A");
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<User> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display_omits_password() {
        let user = User::new("a@b.com", "hunter22", "Ana");
        let shown = user.to_string();
        assert!(shown.contains("a@b.com"));
        assert!(shown.contains("Ana"));
        assert!(!shown.contains("hunter22"));
    }

    #[test]
    fn mutation_keeps_creation_time() {
        let mut user = User::new("a@b.com", "12345", "A");
        let created = user.created_at();
        user.set_name("B");
        user.set_password("67890");
        assert_eq!(user.name(), "B");
        assert_eq!(user.password(), "67890");
        assert_eq!(user.created_at(), created);
    }
}
