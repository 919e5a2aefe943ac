//! CORS layer configuration.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;

use dipinto_core::config::{ClientConfig, CorsConfig};
use dipinto_core::error::AppError;

use crate::transport::RENEWED_TOKEN_HEADER;

/// Builds a CORS layer admitting only the configured client origin, with credentials.
pub fn build_cors_layer(cors: &CorsConfig, client: &ClientConfig) -> Result<CorsLayer, AppError> {
    let origin: HeaderValue = client
        .origin
        .parse()
        .map_err(|_| AppError::configuration(format!("Invalid client origin '{}'", client.origin)))?;

    let methods = cors
        .allowed_methods
        .iter()
        .map(|m| {
            m.parse::<Method>()
                .map_err(|_| AppError::configuration(format!("Invalid CORS method '{m}'")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(methods)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .expose_headers([HeaderName::from_static(RENEWED_TOKEN_HEADER)])
        .allow_credentials(true)
        .max_age(Duration::from_secs(cors.max_age_seconds)))
}
