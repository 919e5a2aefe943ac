//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use dipinto_auth::{
    CredentialStore, CredentialVerifier, JwtDecoder, JwtEncoder, OriginGuard, SessionManager,
    SessionVerifier,
};
use dipinto_core::config::AppConfig;
use dipinto_core::result::AppResult;

use crate::transport::SessionTransport;

/// Shared application state available to all handlers via Axum's State extractor.
///
/// The signing key lives inside the encoder and decoder, built once here
/// from configuration and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Login orchestration.
    pub session_manager: Arc<SessionManager>,
    /// Per-request token verification and renewal.
    pub session_verifier: Arc<SessionVerifier>,
    /// Exact-match origin check.
    pub origin_guard: Arc<OriginGuard>,
    /// Cookie and bearer transport.
    pub transport: Arc<SessionTransport>,
}

impl AppState {
    /// Wires the auth pipeline from configuration and a credential store.
    pub fn new(config: AppConfig, credentials: Arc<dyn CredentialStore>) -> AppResult<Self> {
        let encoder = Arc::new(JwtEncoder::new(&config.auth)?);
        let decoder = Arc::new(JwtDecoder::new(&config.auth));
        let verifier = CredentialVerifier::new()?;

        let session_manager = SessionManager::new(credentials, verifier, Arc::clone(&encoder));
        let session_verifier = SessionVerifier::new(decoder, encoder);
        let origin_guard = OriginGuard::new(&config.client);
        let transport = SessionTransport::new(&config.session)?;

        Ok(Self {
            config: Arc::new(config),
            session_manager: Arc::new(session_manager),
            session_verifier: Arc::new(session_verifier),
            origin_guard: Arc::new(origin_guard),
            transport: Arc::new(transport),
        })
    }
}
