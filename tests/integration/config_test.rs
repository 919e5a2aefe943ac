//! Integration tests for loading the committed configuration files.

use dipinto_core::config::{AppConfig, resolve_environment};
use dipinto_core::error::ErrorKind;

fn secret_from_env() -> bool {
    std::env::var("DIPINTO__AUTH__JWT_SECRET").is_ok()
}

#[test]
fn test_default_environment_refuses_to_start_without_secret() {
    if secret_from_env() {
        return;
    }

    let err = AppConfig::load(resolve_environment(None)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Configuration);
    assert!(err.message.contains("jwt_secret"), "{}", err.message);
}

#[test]
fn test_development_overlay_carries_no_secret() {
    if secret_from_env() {
        return;
    }

    let err = AppConfig::load("development").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Configuration);
}
