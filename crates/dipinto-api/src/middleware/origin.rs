//! Origin guard middleware.

use axum::extract::{Request, State};
use axum::http::header::ORIGIN;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Rejects requests whose `Origin` header is not exactly the configured client origin.
pub async fn require_origin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let origin = request.headers().get(ORIGIN).and_then(|v| v.to_str().ok());

    if let Err(e) = state.origin_guard.check(origin) {
        debug!(origin = ?origin, path = %request.uri().path(), "Origin rejected");
        return Err(e.into());
    }

    Ok(next.run(request).await)
}
