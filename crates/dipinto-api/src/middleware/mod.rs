//! Axum middleware stack.

pub mod cors;
pub mod logging;
pub mod origin;
pub mod rbac;
pub mod session;
