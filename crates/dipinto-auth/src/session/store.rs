//! Credential lookup contract fulfilled by the persistence layer.

use async_trait::async_trait;

use dipinto_core::result::AppResult;
use dipinto_entity::user::{UserCredential, UserRole};

/// Finds stored credentials by email within a role class.
///
/// `Ok(None)` means no matching user. `Err` is reserved for lookup faults
/// and is never reported to the client as a credential failure.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Look up the live user with `email` holding `role`.
    async fn find_by_email(&self, email: &str, role: UserRole) -> AppResult<Option<UserCredential>>;
}
