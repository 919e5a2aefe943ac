//! Subject identifier carried in the `id` claim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the authenticated user.
///
/// The persistence layer keys users by an unsigned integer; on the wire the
/// value travels as a string. Empty and `"0"` are the zero value and never
/// identify a real user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(String);

impl SubjectId {
    /// Wraps a raw identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns `true` for the empty string and `"0"`.
    pub fn is_zero(&self) -> bool {
        self.0.is_empty() || self.0 == "0"
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for SubjectId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for SubjectId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
