//! In-memory credential store backed by `DashMap`.

use async_trait::async_trait;
use dashmap::DashMap;

use dipinto_core::result::AppResult;
use dipinto_entity::user::{UserCredential, UserRole};

use super::store::CredentialStore;

/// Credential store keeping users in process memory.
///
/// Used by tests and local tooling in place of the database.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    users: DashMap<(String, UserRole), UserCredential>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the credential registered under `email`.
    pub fn insert(&self, email: impl Into<String>, credential: UserCredential) {
        self.users.insert((email.into(), credential.role), credential);
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_email(&self, email: &str, role: UserRole) -> AppResult<Option<UserCredential>> {
        Ok(self
            .users
            .get(&(email.to_string(), role))
            .map(|entry| entry.value().clone()))
    }
}
