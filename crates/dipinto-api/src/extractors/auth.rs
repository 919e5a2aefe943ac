//! `AuthUser` extractor: the verified claims attached by the session middleware.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use dipinto_auth::Claims;
use dipinto_auth::jwt::INVALID_SESSION;
use dipinto_core::error::AppError;

use crate::error::ApiError;

/// Verified session claims available in handlers.
///
/// Inserted into request extensions by
/// [`require_session`](crate::middleware::session::require_session); after a
/// silent renewal these are the renewed claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Returns the inner claims.
    pub fn claims(&self) -> &Claims {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = Claims;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized(INVALID_SESSION).into())
    }
}
