//! Role guard middleware.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use dipinto_auth::RoleGuard;

use crate::error::ApiError;
use crate::extractors::AuthUser;

/// Admits only admin sessions. Must be layered inside
/// [`require_session`](super::session::require_session).
pub async fn require_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    let claims = request.extensions().get::<AuthUser>().map(AuthUser::claims);
    RoleGuard::admin().check(claims)?;

    Ok(next.run(request).await)
}
