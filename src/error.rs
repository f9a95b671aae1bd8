//! Unified error types for the passthrough service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Downstream call error.
    #[error("downstream error: {0}")]
    Downstream(#[from] DownstreamError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the outbound call to service-b.
#[derive(Error, Debug)]
pub enum DownstreamError {
    /// The request could not be sent or the response could not be read.
    #[error("request to service-b failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// service-b answered with a non-success status.
    #[error("service-b returned status {status}")]
    BadStatus {
        /// The downstream status code.
        status: reqwest::StatusCode,
    },
}

/// Convenience result alias.
pub type Result<T, E = ServiceError> = std::result::Result<T, E>;

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        // Every downstream fault surfaces as one generic gateway error; the
        // downstream body is never relayed on failure.
        let (status, message) = match &self {
            ServiceError::Downstream(_) => {
                (StatusCode::BAD_GATEWAY, "downstream call failed")
            }
            ServiceError::Config(_) | ServiceError::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
        };

        let body = Json(serde_json::json!({ "error": message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn downstream_errors_map_to_bad_gateway() {
        let err = ServiceError::Downstream(DownstreamError::BadStatus {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn io_errors_map_to_internal_server_error() {
        let err = ServiceError::Io(std::io::Error::other("boom"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn bad_status_display_includes_code() {
        let err = DownstreamError::BadStatus {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        };
        assert!(err.to_string().contains("503"));
    }
}
