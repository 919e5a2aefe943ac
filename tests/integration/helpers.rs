//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tower::ServiceExt;

use dipinto_api::AppState;
use dipinto_api::transport::RENEWED_TOKEN_HEADER;
use dipinto_auth::{Claims, CredentialVerifier, JwtDecoder, JwtEncoder, MemoryCredentialStore};
use dipinto_core::config::{
    AppConfig, AuthConfig, ClientConfig, DatabaseConfig, LoggingConfig, ServerConfig,
    SessionConfig,
};
use dipinto_entity::user::{SubjectId, UserCredential, UserRole};

/// Origin the test app accepts.
pub const ORIGIN: &str = "https://shop.dipinto.mx";
/// Signing secret of the test app.
pub const SECRET: &str = "integration-test-secret";
/// Name of the session cookie.
pub const COOKIE: &str = "dipinto-token";

/// How a request presents its session token.
#[derive(Debug, Clone, Copy)]
pub enum Auth<'a> {
    /// No token.
    None,
    /// Session cookie.
    Cookie(&'a str),
    /// `Authorization: Bearer` header.
    Bearer(&'a str),
}

/// Configuration used by every test app.
pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig {
            url: "postgres://unused/dipinto".to_string(),
            max_connections: 1,
            min_connections: 0,
            connect_timeout_seconds: 1,
            idle_timeout_seconds: 1,
        },
        auth: AuthConfig::with_secret(SECRET),
        session: SessionConfig::default(),
        client: ClientConfig {
            origin: ORIGIN.to_string(),
        },
        logging: LoggingConfig::default(),
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state behind the router
    pub state: AppState,
    /// In-memory user store
    pub store: Arc<MemoryCredentialStore>,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let store = Arc::new(MemoryCredentialStore::new());
        let state = AppState::new(test_config(), store.clone()).expect("Failed to build state");
        let router = dipinto_api::build_app(state.clone()).expect("Failed to build app");

        Self {
            router,
            state,
            store,
        }
    }

    /// Register a user with a hashed password.
    pub async fn create_user(&self, id: u64, email: &str, password: &str, role: UserRole) {
        let hash = CredentialVerifier::new()
            .expect("Failed to build verifier")
            .hash_blocking(password)
            .await
            .expect("Failed to hash password");

        self.store.insert(
            email,
            UserCredential {
                subject_id: SubjectId::from(id),
                username: email.split('@').next().unwrap_or(email).to_string(),
                password_hash: hash,
                role,
            },
        );
    }

    /// Sign a token the way the app would have at `issued_at`.
    pub fn token_issued_at(
        &self,
        id: u64,
        role: UserRole,
        remember: bool,
        issued_at: DateTime<Utc>,
    ) -> String {
        JwtEncoder::new(&test_config().auth)
            .expect("Failed to build encoder")
            .issue_at(&SubjectId::from(id), "tester", role, remember, issued_at)
            .expect("Failed to issue token")
            .token
    }

    /// Decode a token with the app's key.
    pub fn decode(&self, token: &str) -> Claims {
        JwtDecoder::new(&test_config().auth)
            .decode(token)
            .expect("Token should decode")
    }

    /// Log in through the HTTP surface.
    pub async fn login(&self, path: &str, email: &str, password: &str, remember: bool) -> TestResponse {
        let body = serde_json::json!({
            "email": email,
            "password": password,
            "remember": remember,
        });
        self.request("POST", path, Some(body), Auth::None, Some(ORIGIN))
            .await
    }

    /// GET `path` from the allowed origin.
    pub async fn get(&self, path: &str, auth: Auth<'_>) -> TestResponse {
        self.request("GET", path, None, auth, Some(ORIGIN)).await
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        auth: Auth<'_>,
        origin: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(origin) = origin {
            req = req.header(header::ORIGIN, origin);
        }

        match auth {
            Auth::None => {}
            Auth::Cookie(token) => req = req.header(header::COOKIE, format!("{COOKIE}={token}")),
            Auth::Bearer(token) => {
                req = req.header(header::AUTHORIZATION, format!("Bearer {token}"))
            }
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let set_cookies = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(String::from)
            .collect();
        let renewed_token = response
            .headers()
            .get(RENEWED_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookies,
            renewed_token,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Raw `Set-Cookie` header values
    pub set_cookies: Vec<String>,
    /// Renewed token handed to bearer clients, if any
    pub renewed_token: Option<String>,
}

impl TestResponse {
    /// The `Set-Cookie` header for the session cookie, if any.
    pub fn session_set_cookie(&self) -> Option<&str> {
        self.set_cookies
            .iter()
            .map(String::as_str)
            .find(|c| c.starts_with(&format!("{COOKIE}=")))
    }

    /// Value assigned to the session cookie, if any.
    pub fn session_cookie_value(&self) -> Option<String> {
        self.session_set_cookie().map(|c| {
            c[COOKIE.len() + 1..]
                .split(';')
                .next()
                .unwrap_or_default()
                .to_string()
        })
    }

    /// `error` code of an error body.
    pub fn error_code(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }
}
