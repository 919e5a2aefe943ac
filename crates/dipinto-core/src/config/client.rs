//! Allowed client configuration.

use serde::{Deserialize, Serialize};

/// The browser client permitted to call the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Exact `Origin` header value accepted by the origin guard and CORS.
    pub origin: String,
}
