//! Token signing configuration.

use serde::{Deserialize, Serialize};

/// Settings for signing and verifying session tokens.
///
/// The secret is loaded once at startup and handed to the encoder and
/// decoder constructors; nothing reads it from ambient state afterwards.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    pub jwt_secret: String,
    /// Value of the `iss` claim on issued tokens, required on verified ones.
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// Lifetime of the claims carried by a token, in hours.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_hours: u64,
}

impl AuthConfig {
    /// Builds a config with the given secret and default issuer/TTL.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            issuer: default_issuer(),
            session_ttl_hours: default_session_ttl(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("session_ttl_hours", &self.session_ttl_hours)
            .finish()
    }
}

fn default_issuer() -> String {
    "dipinto-api".to_string()
}

fn default_session_ttl() -> u64 {
    8
}
