//! Argon2id credential verification.
//!
//! Login never learns whether the email or the password was wrong. When no
//! user matches, a decoy hash is verified in place of the stored one, so
//! both failures run the same Argon2 work and collapse into one `false`.

use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use dipinto_core::error::AppError;
use dipinto_core::result::AppResult;

/// Plaintext behind the decoy hash.
pub(crate) const DECOY_PASSWORD: &str = "dipinto-decoy-credential";

/// Hashes passwords and checks login attempts against stored hashes.
///
/// Cheap to clone. The async methods move the CPU-bound Argon2 work onto
/// the blocking pool.
#[derive(Clone)]
pub struct CredentialVerifier {
    params: Params,
    decoy_hash: Arc<str>,
}

impl std::fmt::Debug for CredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialVerifier")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl CredentialVerifier {
    /// Creates a verifier with default Argon2id parameters and a fresh decoy hash.
    pub fn new() -> AppResult<Self> {
        let params = Params::default();
        let decoy_hash = hash_with(&params, DECOY_PASSWORD)?;
        Ok(Self {
            params,
            decoy_hash: decoy_hash.into(),
        })
    }

    /// Hashes `password` into a salted PHC string.
    pub fn hash(&self, password: &str) -> AppResult<String> {
        hash_with(&self.params, password)
    }

    /// Compares `password` with a PHC `hash`. A mismatch is `Ok(false)`; a
    /// hash that cannot be parsed is an internal error.
    pub fn verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        match argon2id(&self.params).verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!("Password verification failed: {e}"))),
        }
    }

    /// [`hash`](Self::hash) on the blocking pool.
    pub async fn hash_blocking(&self, password: &str) -> AppResult<String> {
        let this = self.clone();
        let password = password.to_string();
        tokio::task::spawn_blocking(move || this.hash(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
    }

    /// Checks a login attempt against the hash of the matched user, or
    /// against the decoy when `stored_hash` is `None`.
    ///
    /// `true` only when a user matched and the password is theirs.
    pub async fn check(&self, password: &str, stored_hash: Option<&str>) -> AppResult<bool> {
        let user_matched = stored_hash.is_some();
        let hash = stored_hash
            .map(str::to_string)
            .unwrap_or_else(|| self.decoy_hash.to_string());

        let this = self.clone();
        let password = password.to_string();
        let matches = tokio::task::spawn_blocking(move || this.verify(&password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))??;

        Ok(user_matched && matches)
    }
}

fn argon2id(params: &Params) -> Argon2<'static> {
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params.clone())
}

fn hash_with(params: &Params, password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    argon2id(params)
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
}
