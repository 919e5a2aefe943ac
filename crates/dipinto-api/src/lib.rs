//! # dipinto-api
//!
//! Axum HTTP layer for the Dipinto session pipeline: cookie and bearer
//! session transport, origin/session/admin middleware, login and session
//! handlers, and the mapping of [`AppError`](dipinto_core::AppError) onto
//! HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod transport;

pub use app::{build_app, run_server};
pub use router::build_router;
pub use state::AppState;
