//! Error types for unidir.
//!
//! A single `thiserror` hierarchy shared by the lookup layer and the HTTP
//! boundary. The variants map one-to-one onto the transport status codes the
//! API renders, so nothing downstream needs to re-classify failures.

use thiserror::Error;

/// Result type alias using `DirectoryError`.
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Main error type for all directory lookup operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    // ═══════════════════════════════════════════════════════════════════════════
    // CLIENT INPUT ERRORS
    // ═══════════════════════════════════════════════════════════════════════════
    /// Client input violates the syntactic contract (missing, empty, or
    /// over-long parameter).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // UPSTREAM ERRORS
    // ═══════════════════════════════════════════════════════════════════════════
    /// The upstream service responded, but with a non-2xx status or a body
    /// that is not a JSON array.
    #[error("External API error ({status}): {message}")]
    UpstreamHttp {
        /// HTTP status to surface to the caller (502 for malformed bodies).
        status: u16,
        /// Human-readable description of the upstream failure.
        message: String,
    },

    /// The request was sent but no response arrived (connection refused,
    /// DNS failure, dropped connection).
    #[error("No response received from external API: {0}")]
    UpstreamUnreachable(String),

    /// The upstream request exceeded the configured timeout.
    #[error("External API timed out after {seconds}s")]
    Timeout {
        /// The timeout that fired, in seconds.
        seconds: u64,
    },

    /// The outgoing request could not be constructed. Not expected in
    /// normal operation, but must be representable.
    #[error("Failed to set up upstream request: {0}")]
    RequestSetup(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // INTERNAL ERRORS
    // ═══════════════════════════════════════════════════════════════════════════
    /// Internal invariant violation (should never happen).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DirectoryError {
    /// Returns true if a retry could plausibly succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DirectoryError::Timeout { .. }
                | DirectoryError::UpstreamUnreachable(_)
                | DirectoryError::UpstreamHttp { .. }
        )
    }

    /// Returns true if the fault lies with the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, DirectoryError::InvalidArgument(_))
    }

    /// HTTP status code this error surfaces as.
    pub fn status_code(&self) -> u16 {
        match self {
            DirectoryError::InvalidArgument(_) => 400,
            DirectoryError::UpstreamHttp { status, .. } => *status,
            DirectoryError::UpstreamUnreachable(_) | DirectoryError::Timeout { .. } => 504,
            DirectoryError::RequestSetup(_) | DirectoryError::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DirectoryError::UpstreamHttp {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("Service Unavailable"));
    }

    #[test]
    fn test_error_classification() {
        assert!(DirectoryError::Timeout { seconds: 5 }.is_recoverable());
        assert!(DirectoryError::UpstreamUnreachable("refused".into()).is_recoverable());
        assert!(!DirectoryError::InvalidArgument("country".into()).is_recoverable());

        assert!(DirectoryError::InvalidArgument("country".into()).is_client_error());
        assert!(!DirectoryError::Timeout { seconds: 5 }.is_client_error());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(DirectoryError::InvalidArgument("x".into()).status_code(), 400);
        assert_eq!(
            DirectoryError::UpstreamHttp { status: 429, message: String::new() }.status_code(),
            429
        );
        assert_eq!(DirectoryError::Timeout { seconds: 5 }.status_code(), 504);
        assert_eq!(DirectoryError::UpstreamUnreachable("x".into()).status_code(), 504);
        assert_eq!(DirectoryError::RequestSetup("x".into()).status_code(), 500);
        assert_eq!(DirectoryError::Internal("x".into()).status_code(), 500);
    }
}
