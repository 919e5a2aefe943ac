//! Exact-match origin guard.

use tracing::debug;

use dipinto_core::config::ClientConfig;
use dipinto_core::error::AppError;

/// Message returned for a missing or mismatched origin.
pub const ORIGIN_NOT_ALLOWED: &str = "Request origin not allowed";

/// Rejects requests whose `Origin` differs from the configured client.
///
/// Comparison is byte-for-byte: no scheme or case normalization, no
/// wildcards, a single allowed origin. Independent of token state.
#[derive(Debug, Clone)]
pub struct OriginGuard {
    allowed: String,
}

impl OriginGuard {
    /// Creates a guard from client configuration.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            allowed: config.origin.clone(),
        }
    }

    /// Checks the declared origin of a request.
    pub fn check(&self, origin: Option<&str>) -> Result<(), AppError> {
        match origin {
            Some(origin) if !origin.is_empty() && origin == self.allowed => Ok(()),
            other => {
                debug!(origin = ?other, "Request origin rejected");
                Err(AppError::unauthorized(ORIGIN_NOT_ALLOWED))
            }
        }
    }
}
