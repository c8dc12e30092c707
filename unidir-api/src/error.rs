//! API error handling.
//!
//! The single place where `DirectoryError` becomes a transport response:
//! 4xx render with envelope status `"fail"`, 5xx with `"error"`, and every
//! body carries the request id of the call that produced it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use unidir_core::error::DirectoryError;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    request_id: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            request_id: None,
        }
    }

    /// Bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Attaches the id of the request that produced this error.
    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = Some(request_id.to_string());
        self
    }
}

/// Error response body.
#[derive(Serialize)]
struct ErrorResponse {
    /// `"fail"` for 4xx, `"error"` for 5xx.
    status: &'static str,
    message: String,
    #[serde(rename = "requestId", skip_serializing_if = "Option::is_none")]
    request_id: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_word = if self.status.is_client_error() {
            "fail"
        } else {
            "error"
        };

        let body = ErrorResponse {
            status: status_word,
            message: self.message,
            request_id: self.request_id,
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        let status = StatusCode::from_u16(err.status_code())
            .unwrap_or(StatusCode::BAD_GATEWAY);

        if status.is_server_error() {
            tracing::warn!(error = %err, "lookup failed");
        }

        ApiError::new(status, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = tokio_test::block_on(axum::body::to_bytes(
            response.into_body(),
            usize::MAX,
        ))
        .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_client_errors_render_as_fail() {
        let (status, body) = rendered(
            ApiError::bad_request("Country parameter is required").with_request_id("abc"),
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "fail");
        assert_eq!(body["requestId"], "abc");
    }

    #[test]
    fn test_server_errors_render_as_error() {
        let (status, body) = rendered(ApiError::internal("boom"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "error");
    }

    #[test]
    fn test_upstream_status_passes_through() {
        let err = DirectoryError::UpstreamHttp {
            status: 503,
            message: "Service Unavailable".into(),
        };
        let (status, body) = rendered(ApiError::from(err));
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "error");
    }

    #[test]
    fn test_timeout_and_unreachable_map_to_504() {
        let (status, _) = rendered(ApiError::from(DirectoryError::Timeout { seconds: 5 }));
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);

        let (status, _) =
            rendered(ApiError::from(DirectoryError::UpstreamUnreachable("refused".into())));
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_invalid_argument_maps_to_400_fail() {
        let (status, body) =
            rendered(ApiError::from(DirectoryError::InvalidArgument("country".into())));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "fail");
    }
}
