//! Current-session handlers.

use axum::Json;

use crate::dto::response::{ApiResponse, SessionResponse};
use crate::extractors::AuthUser;

/// GET /api/v1/session
pub async fn current(auth: AuthUser) -> Json<ApiResponse<SessionResponse>> {
    Json(ApiResponse::ok(to_response(&auth)))
}

/// GET /api/v1/admin/session
pub async fn admin_current(auth: AuthUser) -> Json<ApiResponse<SessionResponse>> {
    Json(ApiResponse::ok(to_response(&auth)))
}

fn to_response(auth: &AuthUser) -> SessionResponse {
    SessionResponse {
        id: auth.id.clone(),
        username: auth.username.clone(),
        role: auth.role,
        remember: auth.remember,
        expires_at: auth.expires_at(),
    }
}
