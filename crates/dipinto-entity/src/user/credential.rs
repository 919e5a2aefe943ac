//! Stored credential as returned by the user-persistence collaborator.

use super::{SubjectId, UserRole};

/// The `(subject, hash, role)` triple a lookup-by-email yields.
///
/// The auth pipeline only consumes this value; it never stores it.
#[derive(Clone, PartialEq, Eq)]
pub struct UserCredential {
    /// Identifier of the user the credential belongs to.
    pub subject_id: SubjectId,
    /// Display name carried into the session claims.
    pub username: String,
    /// Argon2 PHC-format password hash.
    pub password_hash: String,
    /// Role the user holds.
    pub role: UserRole,
}

impl std::fmt::Debug for UserCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredential")
            .field("subject_id", &self.subject_id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}
