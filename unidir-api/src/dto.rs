//! DTOs for API requests and responses.

use serde::{Deserialize, Serialize};

/// Success envelope wrapping every data-bearing response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Always `"success"`.
    pub status: &'static str,
    /// The payload: university records or country names.
    pub data: T,
    /// True when the payload came from a fresh cache entry.
    pub from_cache: bool,
    /// Correlates the response to this inbound call.
    pub request_id: String,
}

impl<T> ApiResponse<T> {
    /// Wraps a lookup payload in the success envelope.
    pub fn success(data: T, from_cache: bool, request_id: String) -> Self {
        Self {
            status: "success",
            data,
            from_cache,
            request_id,
        }
    }
}

/// Response for the health check.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `"success"`.
    pub status: &'static str,
    /// Human-readable liveness message.
    pub message: &'static str,
    /// RFC 3339 timestamp of the check.
    pub timestamp: String,
    /// Correlates the response to this inbound call.
    pub request_id: String,
}

/// Query parameters of `GET /api/universities`.
#[derive(Debug, Deserialize)]
pub struct UniversitiesQuery {
    /// Country to search; required, validated downstream.
    pub country: Option<String>,
    /// Optional name substring filter.
    pub name: Option<String>,
}
