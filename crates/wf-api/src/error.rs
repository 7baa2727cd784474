//! API error handling
//!
//! Every failure leaves as `{"errorIdentifier": ..., "message": ...}`. Server
//! errors are logged in full and answered with a generic message.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use wf_core::{ErrorKind, WfError};

/// API error types
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Internal(WfError),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        ApiError::Unauthorized(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_identifier(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "invalid_request",
            ApiError::Unauthorized(_) => "unauthorized",
            ApiError::NotFound(_) => "not_found",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl From<WfError> for ApiError {
    fn from(err: WfError) -> Self {
        match err.kind() {
            ErrorKind::Validation => ApiError::BadRequest(err.root().to_string()),
            ErrorKind::Unauthorized => ApiError::Unauthorized(err.root().to_string()),
            ErrorKind::NotFound => ApiError::NotFound(err.root().to_string()),
            ErrorKind::Storage | ErrorKind::Internal | ErrorKind::Config => ApiError::Internal(err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    #[serde(rename = "errorIdentifier")]
    error_identifier: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_identifier = self.error_identifier();

        let message = match self {
            ApiError::BadRequest(msg) | ApiError::Unauthorized(msg) | ApiError::NotFound(msg) => {
                tracing::debug!(status = status.as_u16(), %msg, "Request rejected");
                msg
            }
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Request failed");
                "internal server error".to_string()
            }
        };

        (
            status,
            Json(ErrorBody {
                error_identifier,
                message,
            }),
        )
            .into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
