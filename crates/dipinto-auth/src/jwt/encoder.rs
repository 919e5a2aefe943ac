//! Session token creation with configurable signing and TTL.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use dipinto_core::config::AuthConfig;
use dipinto_core::error::AppError;
use dipinto_entity::user::{SubjectId, UserRole};

use super::claims::Claims;

/// A freshly signed token together with the claims it carries.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Compact serialized token.
    pub token: String,
    /// Claims embedded in `token`.
    pub claims: Claims,
}

impl IssuedToken {
    /// Expiration of the embedded claims.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.claims.expires_at()
    }
}

/// Mints replacement tokens for the verifier's renewal branch.
pub trait TokenSigner: Send + Sync + fmt::Debug {
    /// Signs a replacement for `previous` with a fresh lifetime starting at `now`.
    ///
    /// Subject, username, role, and remember flag carry over unchanged.
    fn renew(&self, previous: &Claims, now: DateTime<Utc>) -> Result<IssuedToken, AppError>;
}

/// Creates signed HS256 session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Value written to the `iss` claim.
    issuer: String,
    /// Lifetime of issued claims.
    session_ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("issuer", &self.issuer)
            .field("session_ttl", &self.session_ttl)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let session_ttl = i64::try_from(config.session_ttl_hours)
            .ok()
            .and_then(Duration::try_hours)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "auth.session_ttl_hours out of range: {}",
                    config.session_ttl_hours
                ))
            })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.issuer.clone(),
            session_ttl,
        })
    }

    /// Issues a token for a freshly authenticated user.
    pub fn issue(
        &self,
        subject: &SubjectId,
        username: &str,
        role: UserRole,
        remember: bool,
    ) -> Result<IssuedToken, AppError> {
        self.issue_at(subject, username, role, remember, Utc::now())
    }

    /// Issues a token as of `now`.
    pub fn issue_at(
        &self,
        subject: &SubjectId,
        username: &str,
        role: UserRole,
        remember: bool,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AppError> {
        if subject.is_zero() {
            return Err(AppError::internal(
                "Refusing to issue a session token for a zero subject",
            ));
        }

        let expires_at = now
            .checked_add_signed(self.session_ttl)
            .ok_or_else(|| AppError::internal("Session expiry overflows the calendar"))?;

        let claims = Claims {
            id: subject.clone(),
            username: username.to_string(),
            role,
            remember,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            iss: self.issuer.clone(),
        };

        self.sign(claims)
    }

    fn sign(&self, claims: Claims) -> Result<IssuedToken, AppError> {
        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok(IssuedToken { token, claims })
    }
}

impl TokenSigner for JwtEncoder {
    fn renew(&self, previous: &Claims, now: DateTime<Utc>) -> Result<IssuedToken, AppError> {
        self.issue_at(
            &previous.id,
            &previous.username,
            previous.role,
            previous.remember,
            now,
        )
    }
}
