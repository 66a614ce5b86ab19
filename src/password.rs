//! Password storage and verification.
//!
//! The registry never compares passwords itself; it goes through a
//! [`PasswordScheme`], so a salted-hash scheme can replace [`PlainText`]
//! without touching the registry's API.

/// Turns a password into its stored form and checks candidates against it.
pub trait PasswordScheme: Send + Sync + 'static {
    /// Produce the value kept in the [`User`](crate::domain::User) record.
    fn seal(&self, password: &str) -> String;

    /// Whether `candidate` matches the stored value.
    fn verify(&self, sealed: &str, candidate: &str) -> bool;
}

/// Stores passwords as given and compares them exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl PasswordScheme for PlainText {
    fn seal(&self, password: &str) -> String {
        password.to_string()
    }

    fn verify(&self, sealed: &str, candidate: &str) -> bool {
        sealed == candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_exact_match() {
        let scheme = PlainText;
        let sealed = scheme.seal("secret");
        assert_eq!(sealed, "secret");
        assert!(scheme.verify(&sealed, "secret"));
        assert!(!scheme.verify(&sealed, "Secret"));
        assert!(!scheme.verify(&sealed, "secret "));
        assert!(!scheme.verify(&sealed, ""));
    }
}
