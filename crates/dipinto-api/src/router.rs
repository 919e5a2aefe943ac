//! Route definitions and guard composition.

use axum::Router;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};

use crate::handlers;
use crate::middleware::{logging, origin, rbac, session};
use crate::state::AppState;

/// Builds the API router.
///
/// The origin guard wraps every `/api/v1` route except `/health`. The
/// session verifier wraps `/session` and `/admin/*`, and the admin guard
/// runs inside it on `/admin/*`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(session_routes(&state))
        .route_layer(from_fn_with_state(state.clone(), origin::require_origin))
        .merge(health_routes());

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(from_fn(logging::request_logging))
        .with_state(state)
}

/// Login and logout: origin-guarded, no session required.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/customers/login", post(handlers::auth::login_customer))
        .route("/users/login", post(handlers::auth::login_admin))
        .route("/users/logout", post(handlers::auth::logout))
}

/// Routes requiring a verified session.
fn session_routes(state: &AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/admin/session", get(handlers::session::admin_current))
        .route_layer(from_fn(rbac::require_admin));

    Router::new()
        .route("/session", get(handlers::session::current))
        .merge(admin)
        .route_layer(from_fn_with_state(state.clone(), session::require_session))
}

/// Liveness, unguarded.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
