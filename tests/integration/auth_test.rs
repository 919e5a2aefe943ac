//! Integration tests for login and logout.

mod helpers;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;

use dipinto_entity::user::UserRole;
use helpers::{Auth, ORIGIN, TestApp};

#[tokio::test]
async fn test_customer_login_sets_session_cookie() {
    let app = TestApp::new();
    app.create_user(11, "ana@dipinto.mx", "password123", UserRole::Customer)
        .await;

    let response = app
        .login("/api/v1/customers/login", "ana@dipinto.mx", "password123", false)
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["success"], json!(true));
    assert_eq!(response.body["data"]["username"], json!("ana"));
    assert_eq!(response.body["data"]["role"], json!("customer"));

    let set_cookie = response.session_set_cookie().expect("session cookie");
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("Secure"));
    assert!(set_cookie.contains("Expires="));

    let token = response.session_cookie_value().unwrap();
    assert_eq!(response.body["data"]["token"], json!(token));

    let claims = app.decode(&token);
    assert_eq!(claims.id.as_str(), "11");
    assert_eq!(claims.role, UserRole::Customer);
    assert!(!claims.remember);
    assert_eq!(claims.exp - claims.iat, 8 * 3600);
}

#[tokio::test]
async fn test_admin_login_is_scoped_to_admins() {
    let app = TestApp::new();
    app.create_user(1, "root@dipinto.mx", "admin-pass", UserRole::Admin)
        .await;
    app.create_user(2, "ana@dipinto.mx", "password123", UserRole::Customer)
        .await;

    let admin = app
        .login("/api/v1/users/login", "root@dipinto.mx", "admin-pass", true)
        .await;
    assert_eq!(admin.status, StatusCode::OK);
    assert_eq!(admin.body["data"]["role"], json!("admin"));

    let customer = app
        .login("/api/v1/users/login", "ana@dipinto.mx", "password123", false)
        .await;
    assert_eq!(customer.status, StatusCode::UNAUTHORIZED);

    let admin_as_customer = app
        .login("/api/v1/customers/login", "root@dipinto.mx", "admin-pass", false)
        .await;
    assert_eq!(admin_as_customer.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    app.create_user(11, "ana@dipinto.mx", "password123", UserRole::Customer)
        .await;

    let wrong_password = app
        .login("/api/v1/customers/login", "ana@dipinto.mx", "nope", false)
        .await;
    let unknown_email = app
        .login("/api/v1/customers/login", "ghost@dipinto.mx", "password123", false)
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert!(wrong_password.session_set_cookie().is_none());
}

#[tokio::test]
async fn test_malformed_login_body_is_bad_request() {
    let app = TestApp::new();

    let bad_email = app
        .request(
            "POST",
            "/api/v1/customers/login",
            Some(json!({ "email": "not-an-email", "password": "x" })),
            Auth::None,
            Some(ORIGIN),
        )
        .await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_email.error_code(), Some("VALIDATION_ERROR"));

    let missing_password = app
        .request(
            "POST",
            "/api/v1/customers/login",
            Some(json!({ "email": "ana@dipinto.mx" })),
            Auth::None,
            Some(ORIGIN),
        )
        .await;
    assert_eq!(missing_password.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_requires_allowed_origin() {
    let app = TestApp::new();
    app.create_user(11, "ana@dipinto.mx", "password123", UserRole::Customer)
        .await;
    let body = json!({ "email": "ana@dipinto.mx", "password": "password123" });

    let foreign = app
        .request(
            "POST",
            "/api/v1/customers/login",
            Some(body.clone()),
            Auth::None,
            Some("https://evil.example"),
        )
        .await;
    assert_eq!(foreign.status, StatusCode::UNAUTHORIZED);

    let missing = app
        .request("POST", "/api/v1/customers/login", Some(body), Auth::None, None)
        .await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie_without_a_session() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/v1/users/logout", None, Auth::None, Some(ORIGIN))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let set_cookie = response.session_set_cookie().expect("removal cookie");
    assert_eq!(response.session_cookie_value().as_deref(), Some(""));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_logged_out_cookie_no_longer_authenticates() {
    let app = TestApp::new();
    let token = app.token_issued_at(11, UserRole::Customer, true, Utc::now() - Duration::hours(1));

    let before = app.get("/api/v1/session", Auth::Cookie(&token)).await;
    assert_eq!(before.status, StatusCode::OK);

    let logout = app
        .request("POST", "/api/v1/users/logout", None, Auth::Cookie(&token), Some(ORIGIN))
        .await;
    let cleared = logout.session_cookie_value().unwrap();

    let after = app.get("/api/v1/session", Auth::Cookie(&cleared)).await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}
