//! Role guard: authorizes a verified session against a required role.

use dipinto_core::error::AppError;
use dipinto_entity::user::UserRole;

use crate::jwt::{Claims, INVALID_SESSION};

/// Message returned when an authenticated caller lacks the role. Safe to
/// reveal since the caller already holds a valid session.
pub const ADMIN_REQUIRED: &str = "Admin access required";

/// Requires the verified claims to carry a specific role.
///
/// Must be composed after session verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGuard {
    required: UserRole,
}

impl RoleGuard {
    /// Guard for admin-only routes.
    pub fn admin() -> Self {
        Self {
            required: UserRole::Admin,
        }
    }

    /// Checks the claims attached to the request.
    ///
    /// Returns `Unauthorized` when no claims are attached and `Forbidden`
    /// when the role does not match.
    pub fn check(&self, claims: Option<&Claims>) -> Result<(), AppError> {
        let claims = claims.ok_or_else(|| AppError::unauthorized(INVALID_SESSION))?;

        if claims.role != self.required {
            return Err(AppError::forbidden(ADMIN_REQUIRED));
        }
        Ok(())
    }
}
