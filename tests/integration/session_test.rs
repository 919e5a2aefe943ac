//! Integration tests for session verification, renewal, and guards.

mod helpers;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header};
use serde_json::json;

use dipinto_auth::Claims;
use dipinto_entity::user::{SubjectId, UserRole};
use helpers::{Auth, SECRET, TestApp};

#[tokio::test]
async fn test_live_cookie_session_exposes_claims() {
    let app = TestApp::new();
    let token = app.token_issued_at(42, UserRole::Customer, false, Utc::now());

    let response = app.get("/api/v1/session", Auth::Cookie(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], json!("42"));
    assert_eq!(response.body["data"]["role"], json!("customer"));
    assert_eq!(response.body["data"]["remember"], json!(false));
    assert!(response.session_set_cookie().is_none());
}

#[tokio::test]
async fn test_bearer_header_is_accepted() {
    let app = TestApp::new();
    let token = app.token_issued_at(42, UserRole::Customer, false, Utc::now());

    let response = app.get("/api/v1/session", Auth::Bearer(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = TestApp::new();
    let response = app.get("/api/v1/session", Auth::None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), Some("UNAUTHORIZED"));
}

#[tokio::test]
async fn test_expired_session_without_remember_is_rejected() {
    let app = TestApp::new();
    let token = app.token_issued_at(42, UserRole::Customer, false, Utc::now() - Duration::hours(9));

    let response = app.get("/api/v1/session", Auth::Cookie(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.session_set_cookie().is_none());
}

#[tokio::test]
async fn test_expired_remember_session_is_renewed_from_now() {
    let app = TestApp::new();
    let login_time = Utc::now() - Duration::hours(9);
    let token = app.token_issued_at(42, UserRole::Customer, true, login_time);

    let before = Utc::now();
    let response = app.get("/api/v1/session", Auth::Cookie(&token)).await;
    let after = Utc::now();

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let renewed = response.session_cookie_value().expect("renewed cookie");
    assert_ne!(renewed, token);

    let claims = app.decode(&renewed);
    assert_eq!(claims.id.as_str(), "42");
    assert_eq!(claims.role, UserRole::Customer);
    assert!(claims.remember);
    assert!(claims.iat >= before.timestamp() && claims.iat <= after.timestamp());
    assert_eq!(claims.exp, claims.iat + 8 * 3600);
    assert_ne!(claims.exp, (login_time + Duration::hours(16)).timestamp());

    assert_eq!(response.body["data"]["expires_at"], json!(claims.expires_at()));

    let follow_up = app.get("/api/v1/session", Auth::Cookie(&renewed)).await;
    assert_eq!(follow_up.status, StatusCode::OK);
    assert!(follow_up.session_set_cookie().is_none());
}

#[tokio::test]
async fn test_cookie_renewal_does_not_echo_token_in_header() {
    let app = TestApp::new();
    let token = app.token_issued_at(42, UserRole::Customer, true, Utc::now() - Duration::hours(9));

    let response = app.get("/api/v1/session", Auth::Cookie(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.session_cookie_value().is_some());
    assert!(response.renewed_token.is_none());
}

#[tokio::test]
async fn test_bearer_renewal_returns_token_in_header() {
    let app = TestApp::new();
    let token = app.token_issued_at(42, UserRole::Customer, true, Utc::now() - Duration::hours(9));

    let response = app.get("/api/v1/session", Auth::Bearer(&token)).await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let renewed = response.renewed_token.clone().expect("renewed token header");
    assert_ne!(renewed, token);

    let claims = app.decode(&renewed);
    assert_eq!(claims.id.as_str(), "42");
    assert!(claims.remember);
    assert!(claims.exp > Utc::now().timestamp());

    let follow_up = app.get("/api/v1/session", Auth::Bearer(&renewed)).await;
    assert_eq!(follow_up.status, StatusCode::OK);
    assert!(follow_up.renewed_token.is_none());
}

#[tokio::test]
async fn test_foreign_key_is_rejected() {
    let app = TestApp::new();
    let claims = claims_for(SubjectId::from(42u64), UserRole::Admin);
    let forged = sign(&claims, "some-other-secret");

    let response = app.get("/api/v1/session", Auth::Cookie(&forged)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_zero_subject_is_rejected() {
    let app = TestApp::new();

    for id in ["0", ""] {
        let token = sign(&claims_for(SubjectId::new(id), UserRole::Admin), SECRET);
        let response = app.get("/api/v1/session", Auth::Cookie(&token)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "subject {id:?}");
    }
}

#[tokio::test]
async fn test_customer_forbidden_on_admin_route() {
    let app = TestApp::new();
    let token = app.token_issued_at(42, UserRole::Customer, false, Utc::now());

    let response = app.get("/api/v1/admin/session", Auth::Cookie(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], json!("Admin access required"));
}

#[tokio::test]
async fn test_admin_passes_admin_route() {
    let app = TestApp::new();
    let token = app.token_issued_at(1, UserRole::Admin, false, Utc::now());

    let response = app.get("/api/v1/admin/session", Auth::Cookie(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["role"], json!("admin"));
}

#[tokio::test]
async fn test_admin_route_without_session_is_unauthorized() {
    let app = TestApp::new();
    let response = app.get("/api/v1/admin/session", Auth::None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_origin_guard_runs_before_session() {
    let app = TestApp::new();
    let token = app.token_issued_at(1, UserRole::Admin, false, Utc::now());

    for origin in [
        None,
        Some("https://evil.example"),
        Some("https://shop.dipinto.mx/"),
        Some("HTTPS://SHOP.DIPINTO.MX"),
    ] {
        let response = app
            .request("GET", "/api/v1/session", None, Auth::Cookie(&token), origin)
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "origin {origin:?}");
    }
}

#[tokio::test]
async fn test_health_is_unguarded() {
    let app = TestApp::new();
    let response = app
        .request("GET", "/api/v1/health", None, Auth::None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], json!("ok"));
}

fn claims_for(id: SubjectId, role: UserRole) -> Claims {
    let now = Utc::now();
    Claims {
        id,
        username: "mallory".to_string(),
        role,
        remember: true,
        iat: now.timestamp(),
        exp: (now + Duration::hours(8)).timestamp(),
        iss: "dipinto-api".to_string(),
    }
}

fn sign(claims: &Claims, secret: &str) -> String {
    jsonwebtoken::encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign claims")
}
