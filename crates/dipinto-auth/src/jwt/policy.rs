//! Per-request session decision.
//!
//! Pure function of verified claims and the current time. It knows nothing
//! about cookies or headers; the caller performs whatever side effects a
//! [`SessionDecision::Renew`] requires.

use chrono::{DateTime, Utc};
use std::fmt;

use super::claims::Claims;

/// Outcome of evaluating signature-verified claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionDecision {
    /// Claims are live; proceed with them.
    Accept,
    /// Claims expired but the session opted into remember-me; mint a replacement.
    Renew,
    /// Terminate the request as unauthorized.
    Reject(RejectReason),
}

/// Why a signature-valid token was still rejected. Logged, never returned
/// to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// `exp` does not lie after `iat`.
    InvalidLifetime,
    /// Subject is empty or the zero value.
    InvalidSubject,
    /// Expired and not eligible for renewal.
    Expired,
}

impl RejectReason {
    /// Short machine-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidLifetime => "invalid_lifetime",
            Self::InvalidSubject => "invalid_subject",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides what to do with signature-verified claims at `now`.
///
/// Evaluation order: lifetime sanity, expiry, then subject on the live
/// branch or remember-me and subject on the expired branch. A zero
/// subject is never accepted and never renewed.
pub fn decide(claims: &Claims, now: DateTime<Utc>) -> SessionDecision {
    if !claims.has_valid_lifetime() {
        return SessionDecision::Reject(RejectReason::InvalidLifetime);
    }

    if !claims.is_expired_at(now) {
        return if claims.has_valid_subject() {
            SessionDecision::Accept
        } else {
            SessionDecision::Reject(RejectReason::InvalidSubject)
        };
    }

    if !claims.remember {
        return SessionDecision::Reject(RejectReason::Expired);
    }

    if !claims.has_valid_subject() {
        return SessionDecision::Reject(RejectReason::InvalidSubject);
    }

    SessionDecision::Renew
}
