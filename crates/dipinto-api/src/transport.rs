//! Session transport: the http-only cookie and the bearer header.

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{DateTime, Duration, Utc};
use time::OffsetDateTime;

use dipinto_core::config::SessionConfig;
use dipinto_core::error::AppError;

/// Response header carrying a renewed token to clients that sent it as a bearer.
pub const RENEWED_TOKEN_HEADER: &str = "x-renewed-token";

/// Where the client presented its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// The session cookie.
    Cookie,
    /// An `Authorization: Bearer` header.
    Bearer,
}

/// A token as presented by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedToken {
    pub value: String,
    pub source: TokenSource,
}

/// Writes and reads the session token on the client side.
///
/// The cookie horizon (`session.cookie_ttl_hours`) is independent of the
/// claims' own expiry, so a cookie may still be present after the token it
/// carries has expired.
#[derive(Debug, Clone)]
pub struct SessionTransport {
    cookie_name: String,
    ttl: Duration,
    secure: bool,
}

impl SessionTransport {
    /// Creates a transport from session configuration.
    ///
    /// Fails when the cookie horizon does not fit a signed duration.
    pub fn new(config: &SessionConfig) -> Result<Self, AppError> {
        let ttl = i64::try_from(config.cookie_ttl_hours)
            .ok()
            .and_then(Duration::try_hours)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "session.cookie_ttl_hours out of range: {}",
                    config.cookie_ttl_hours
                ))
            })?;

        Ok(Self {
            cookie_name: config.cookie_name.clone(),
            ttl,
            secure: config.secure_cookies,
        })
    }

    /// Cookie carrying `token`, expiring one cookie horizon after `now`.
    pub fn session_cookie(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Cookie<'static>, AppError> {
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::internal("Cookie expiry overflows the calendar"))?
            .timestamp();
        let expires = OffsetDateTime::from_unix_timestamp(expires_at)
            .map_err(|e| AppError::internal(format!("Invalid cookie expiry: {e}")))?;

        let mut cookie = self.base_cookie(token.to_string());
        cookie.set_expires(expires);
        Ok(cookie)
    }

    /// Cookie that overwrites the session with an empty, already-expired value.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = self.base_cookie(String::new());
        cookie.set_max_age(time::Duration::ZERO);
        cookie.set_expires(OffsetDateTime::UNIX_EPOCH);
        cookie
    }

    /// Token presented by the client: a non-empty session cookie first,
    /// then an `Authorization: Bearer` header.
    pub fn extract_token(&self, jar: &CookieJar, headers: &HeaderMap) -> Option<PresentedToken> {
        if let Some(cookie) = jar.get(&self.cookie_name) {
            if !cookie.value().is_empty() {
                return Some(PresentedToken {
                    value: cookie.value().to_string(),
                    source: TokenSource::Cookie,
                });
            }
        }

        headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| PresentedToken {
                value: t.to_string(),
                source: TokenSource::Bearer,
            })
    }

    fn base_cookie(&self, value: String) -> Cookie<'static> {
        let mut cookie = Cookie::new(self.cookie_name.clone(), value);
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookie.set_secure(self.secure);
        cookie.set_same_site(SameSite::Lax);
        cookie
    }
}
