//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dipinto_entity::user::{SubjectId, UserRole};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Display name of the authenticated user.
    pub username: String,
    /// Role the session was issued for.
    pub role: UserRole,
    /// Expiry of the issued claims.
    pub expires_at: DateTime<Utc>,
    /// The session token, for clients using the bearer header.
    pub token: String,
}

/// Claims of the current session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Subject identifier.
    pub id: SubjectId,
    /// Username.
    pub username: String,
    /// Role.
    pub role: UserRole,
    /// Remember-me flag.
    pub remember: bool,
    /// Claims expiry.
    pub expires_at: DateTime<Utc>,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
