//! Data transfer objects for web requests and responses.
//!
//! Search results are returned as [`SailingRecord`](crate::format::SailingRecord)s
//! directly.

use serde::{Deserialize, Serialize};

/// Query string of `GET /search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Origin port code
    pub origin: String,

    /// Destination port code
    pub destination: String,

    /// Criteria name; defaults to `cheapest-direct`
    pub criteria: Option<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
