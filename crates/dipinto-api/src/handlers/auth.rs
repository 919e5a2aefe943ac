//! Auth handlers: customer login, admin login, logout.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use validator::Validate;

use dipinto_core::error::AppError;
use dipinto_entity::user::UserRole;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse};
use crate::error::ApiResult;
use crate::state::AppState;

type LoginReply = (CookieJar, Json<ApiResponse<LoginResponse>>);

/// POST /api/v1/customers/login
pub async fn login_customer(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<LoginReply> {
    login(&state, body, UserRole::Customer).await
}

/// POST /api/v1/users/login
pub async fn login_admin(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<LoginReply> {
    login(&state, body, UserRole::Admin).await
}

/// POST /api/v1/users/logout
///
/// No session is required. The server keeps no session record, so logout
/// only tells the client to drop its cookie.
pub async fn logout(State(state): State<AppState>) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    let jar = CookieJar::new().add(state.transport.removal_cookie());
    (
        jar,
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out".to_string(),
        })),
    )
}

async fn login(
    state: &AppState,
    body: Result<Json<LoginRequest>, JsonRejection>,
    scope: UserRole,
) -> ApiResult<LoginReply> {
    let Json(req) =
        body.map_err(|e| AppError::validation(format!("Invalid login request: {}", e.body_text())))?;
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid login request: {e}")))?;

    let issued = state
        .session_manager
        .login(&req.email, &req.password, scope, req.remember)
        .await?;

    let cookie = state.transport.session_cookie(&issued.token, Utc::now())?;

    Ok((
        CookieJar::new().add(cookie),
        Json(ApiResponse::ok(LoginResponse {
            username: issued.claims.username.clone(),
            role: issued.claims.role,
            expires_at: issued.expires_at(),
            token: issued.token,
        })),
    ))
}
