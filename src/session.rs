//! The session gate.
//!
//! Decides whether the current visitor is anonymous, a patient, or staff,
//! and gates which top-level view renders. This is a mock gate: credentials
//! are hardcoded placeholders for a future real auth provider. There is no
//! hashing, no stored credentials, no rate limiting and no lockout.

use crate::error::AuthError;

/// The mutually exclusive session classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Anonymous,
    Patient,
    Staff,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Role::Anonymous => "ANONYMOUS",
            Role::Patient => "PATIENT",
            Role::Staff => "STAFF",
        }
    }
}

/// Process-wide session state: a single role value, nothing else.
///
/// No token, no expiry, no multi-session support.
pub struct Session {
    role: Role,
}

impl Session {
    /// Start an anonymous session.
    pub fn new() -> Self {
        Session {
            role: Role::Anonymous,
        }
    }

    /// Current classification.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Evaluate a credential pair and set the session role on success.
    ///
    /// The rules, checked fresh on every attempt:
    /// - "admin" / "1234" (exact match) signs in as staff;
    /// - any non-empty identifier with a secret of at least 4 characters
    ///   signs in as patient;
    /// - anything else fails and leaves the session unchanged.
    pub fn authenticate(&mut self, identifier: &str, secret: &str) -> Result<Role, AuthError> {
        let role = if identifier == "admin" && secret == "1234" {
            Role::Staff
        } else if !identifier.is_empty() && secret.chars().count() >= 4 {
            Role::Patient
        } else {
            return Err(AuthError::InvalidCredentials);
        };

        self.role = role;
        Ok(role)
    }

    /// Unconditionally reset to anonymous.
    pub fn logout(&mut self) {
        self.role = Role::Anonymous;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
