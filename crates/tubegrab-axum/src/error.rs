//! Axum-specific error types and mappings.
//!
//! Maps [`JobError`] and request-body rejections to HTTP status codes and
//! a JSON body carrying the raw error message.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tubegrab_core::{FetchEngineError, JobError};

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The fetch engine did not finish in time.
    #[error("Gateway timeout: {0}")]
    GatewayTimeout(String),

    /// The fetch engine executable is missing.
    #[error("Engine not installed: {0}")]
    EngineNotInstalled(String),

    /// The engine reported success but left no file at the resolved path.
    #[error("Artifact not found: {0}")]
    ArtifactNotFound(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::EngineNotInstalled(_) | Self::ArtifactNotFound(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable error type discriminant for client-side handling.
    pub const fn error_type(&self) -> Option<&'static str> {
        match self {
            Self::GatewayTimeout(_) => Some("FETCH_TIMEOUT"),
            Self::EngineNotInstalled(_) => Some("ENGINE_NOT_INSTALLED"),
            Self::ArtifactNotFound(_) => Some("ARTIFACT_NOT_FOUND"),
            Self::NotFound(_) | Self::BadRequest(_) | Self::Internal(_) => None,
        }
    }

    /// The raw message, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(msg)
            | Self::BadRequest(msg)
            | Self::GatewayTimeout(msg)
            | Self::EngineNotInstalled(msg)
            | Self::ArtifactNotFound(msg)
            | Self::Internal(msg) => msg,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none", rename = "type")]
    error_type: Option<&'static str>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.message(),
            status: status.as_u16(),
            error_type: self.error_type(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<JobError> for HttpError {
    fn from(err: JobError) -> Self {
        let message = err.to_string();
        match err {
            JobError::Validation(_) => Self::BadRequest(message),
            JobError::FetchTimeout { .. } => Self::GatewayTimeout(message),
            JobError::FetchEngine(FetchEngineError::NotInstalled(_)) => {
                Self::EngineNotInstalled(message)
            }
            JobError::ArtifactNotFound { .. } => Self::ArtifactNotFound(message),
            JobError::FetchEngine(_) | JobError::Workspace(_) => Self::Internal(message),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
