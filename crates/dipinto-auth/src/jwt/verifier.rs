//! Token verification with conditional silent renewal.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use dipinto_core::error::AppError;

use super::INVALID_SESSION;
use super::claims::Claims;
use super::decoder::JwtDecoder;
use super::encoder::{IssuedToken, TokenSigner};
use super::policy::{SessionDecision, decide};

/// A session that passed verification.
#[derive(Debug, Clone)]
pub struct VerifiedSession {
    /// Claims downstream handlers should act on. After a renewal these are
    /// the new claims.
    pub claims: Claims,
    /// Replacement token the transport must hand back to the client.
    pub renewed: Option<IssuedToken>,
}

/// Runs the fail-closed verification state machine.
///
/// Every path except "live claims" and "successfully renewed claims" ends
/// in the same unauthorized error. Nothing is retried.
#[derive(Debug, Clone)]
pub struct SessionVerifier {
    decoder: Arc<JwtDecoder>,
    signer: Arc<dyn TokenSigner>,
}

impl SessionVerifier {
    /// Creates a verifier that renews through `signer`.
    pub fn new(decoder: Arc<JwtDecoder>, signer: Arc<dyn TokenSigner>) -> Self {
        Self { decoder, signer }
    }

    /// Verifies `token` (if any) as of `now`.
    pub fn verify(&self, token: Option<&str>, now: DateTime<Utc>) -> Result<VerifiedSession, AppError> {
        let Some(token) = token else {
            debug!("No session token presented");
            return Err(AppError::unauthorized(INVALID_SESSION));
        };

        let claims = self.decoder.decode(token)?;

        match decide(&claims, now) {
            SessionDecision::Accept => Ok(VerifiedSession {
                claims,
                renewed: None,
            }),
            SessionDecision::Renew => {
                let renewed = self.signer.renew(&claims, now).map_err(|e| {
                    warn!(subject = %claims.id, error = %e, "Session renewal failed");
                    AppError::unauthorized(INVALID_SESSION)
                })?;

                info!(subject = %claims.id, expires_at = %renewed.expires_at(), "Session renewed");

                Ok(VerifiedSession {
                    claims: renewed.claims.clone(),
                    renewed: Some(renewed),
                })
            }
            SessionDecision::Reject(reason) => {
                debug!(subject = %claims.id, reason = %reason, "Session rejected");
                Err(AppError::unauthorized(INVALID_SESSION))
            }
        }
    }
}
