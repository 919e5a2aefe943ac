//! Claims structure carried inside a session token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dipinto_entity::user::{SubjectId, UserRole};

/// Session token payload.
///
/// Wire shape: `{id, username, role, remember, iat, exp, iss}` with
/// epoch-second timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier.
    pub id: SubjectId,
    /// Username for convenience.
    pub username: String,
    /// User role at the time of token issuance.
    pub role: UserRole,
    /// Remember-me flag captured at login. Only affects renewal.
    #[serde(default)]
    pub remember: bool,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Issuer.
    pub iss: String,
}

impl Claims {
    /// Whether the subject is present and not the zero value.
    pub fn has_valid_subject(&self) -> bool {
        !self.id.is_zero()
    }

    /// Whether `exp` lies strictly after `iat`.
    pub fn has_valid_lifetime(&self) -> bool {
        self.exp > self.iat
    }

    /// Whether the claims have expired as of `now`.
    ///
    /// A token is still live during the second named by `exp`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp < now.timestamp()
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}
