//! Login orchestration: credential lookup, password check, token issuance.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use dipinto_core::error::AppError;
use dipinto_core::result::AppResult;
use dipinto_entity::user::UserRole;

use crate::jwt::{IssuedToken, JwtEncoder};
use crate::password::CredentialVerifier;

use super::store::CredentialStore;

/// Message for every failed login, whichever check failed.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Authenticates users and issues their session tokens.
pub struct SessionManager {
    credentials: Arc<dyn CredentialStore>,
    verifier: CredentialVerifier,
    encoder: Arc<JwtEncoder>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("verifier", &self.verifier)
            .field("encoder", &self.encoder)
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        verifier: CredentialVerifier,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            credentials,
            verifier,
            encoder,
        }
    }

    /// Authenticates `email`/`password` within the `scope` role class and
    /// issues a session token.
    ///
    /// Unknown email, wrong password, and a scope mismatch all produce the
    /// same unauthorized error. Lookup and hashing faults propagate as
    /// server errors.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        scope: UserRole,
        remember: bool,
    ) -> AppResult<IssuedToken> {
        debug!(email = %email, scope = %scope, "Login attempt");

        let credential = self
            .credentials
            .find_by_email(email, scope)
            .await
            .inspect_err(|e| error!(scope = %scope, error = %e, "Credential lookup failed"))?;

        let matches = self
            .verifier
            .check(password, credential.as_ref().map(|c| c.password_hash.as_str()))
            .await?;

        let credential = match credential {
            Some(c) if matches && c.role == scope => c,
            _ => {
                warn!(scope = %scope, remember, "Login rejected");
                return Err(AppError::unauthorized(INVALID_CREDENTIALS));
            }
        };

        let issued = self.encoder.issue(
            &credential.subject_id,
            &credential.username,
            credential.role,
            remember,
        )?;

        info!(
            subject = %credential.subject_id,
            scope = %scope,
            remember,
            "Login succeeded"
        );

        Ok(issued)
    }
}
