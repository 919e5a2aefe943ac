//! User repository: credential lookup over the `users` table.

use async_trait::async_trait;
use sqlx::PgPool;

use dipinto_auth::session::CredentialStore;
use dipinto_core::error::{AppError, ErrorKind};
use dipinto_core::result::AppResult;
use dipinto_entity::user::{SubjectId, UserCredential, UserRole};

/// Repository for user lookups needed by authentication.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

/// Row shape of the credential query.
#[derive(Debug, sqlx::FromRow)]
struct CredentialRow {
    id: i64,
    name: String,
    password: String,
    role: String,
}

impl TryFrom<CredentialRow> for UserCredential {
    type Error = AppError;

    fn try_from(row: CredentialRow) -> Result<Self, Self::Error> {
        let role: UserRole = row.role.parse().map_err(|_| {
            AppError::database(format!("User {} has unknown role '{}'", row.id, row.role))
        })?;

        Ok(Self {
            subject_id: SubjectId::from(row.id),
            username: row.name,
            password_hash: row.password,
            role,
        })
    }
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for UserRepository {
    async fn find_by_email(&self, email: &str, role: UserRole) -> AppResult<Option<UserCredential>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT u.id, u.name, u.password, u.role FROM users u \
             WHERE u.deleted_at IS NULL AND u.email = $1 AND u.role = $2",
        )
        .bind(email)
        .bind(role.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by email", e))?;

        row.map(UserCredential::try_from).transpose()
    }
}
