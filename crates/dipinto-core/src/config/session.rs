//! Session cookie configuration.

use serde::{Deserialize, Serialize};

/// Settings for the http-only cookie that carries the session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Client-side cookie lifetime in hours.
    ///
    /// Independent of `auth.session_ttl_hours`: the cookie may outlive the
    /// claims it carries.
    #[serde(default = "default_cookie_ttl")]
    pub cookie_ttl_hours: u64,
    /// Whether the cookie carries the `Secure` attribute.
    #[serde(default = "default_secure")]
    pub secure_cookies: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            cookie_ttl_hours: default_cookie_ttl(),
            secure_cookies: default_secure(),
        }
    }
}

fn default_cookie_name() -> String {
    "dipinto-token".to_string()
}

fn default_cookie_ttl() -> u64 {
    24
}

fn default_secure() -> bool {
    true
}
