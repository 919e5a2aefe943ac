//! Session verification middleware.

use axum::extract::{Request, State};
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;

use dipinto_core::error::AppError;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;
use crate::transport::{RENEWED_TOKEN_HEADER, TokenSource};

/// Verifies the presented token and attaches its claims as [`AuthUser`].
///
/// When the verifier renews an expired remember-me token, the replacement
/// cookie is appended to the handler's response. A client that sent a
/// bearer token also gets the replacement in [`RENEWED_TOKEN_HEADER`].
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let now = Utc::now();
    let presented = state.transport.extract_token(&jar, request.headers());
    let session = state
        .session_verifier
        .verify(presented.as_ref().map(|t| t.value.as_str()), now)?;

    let renewed_cookie = session
        .renewed
        .as_ref()
        .map(|renewed| state.transport.session_cookie(&renewed.token, now))
        .transpose()?;

    let renewed_header = match (&session.renewed, presented.as_ref().map(|t| t.source)) {
        (Some(renewed), Some(TokenSource::Bearer)) => Some(
            HeaderValue::from_str(&renewed.token)
                .map_err(|e| AppError::internal(format!("Renewed token is not a header value: {e}")))?,
        ),
        _ => None,
    };

    request.extensions_mut().insert(AuthUser(session.claims));
    let mut response = next.run(request).await;

    if let Some(value) = renewed_header {
        response
            .headers_mut()
            .insert(HeaderName::from_static(RENEWED_TOKEN_HEADER), value);
    }

    Ok(match renewed_cookie {
        Some(cookie) => (CookieJar::new().add(cookie), response).into_response(),
        None => response,
    })
}
