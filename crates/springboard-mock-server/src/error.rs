//! Error types for the Springboard mock server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use springboard_ledger::{OperationError, ValidationFailure};

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(ValidationFailure),

    #[error("Invalid request")]
    InvalidRequest,

    /// Reported with an empty body.
    #[error("Not found")]
    NotFound,

    #[error("Forbidden")]
    Forbidden,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Wire body of a structured validation error.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorBody {
    /// Always `"ValidationError"`.
    pub error: &'static str,
    pub message: String,
    pub params: Vec<String>,
}

impl From<ValidationFailure> for ValidationErrorBody {
    fn from(failure: ValidationFailure) -> Self {
        Self {
            error: "ValidationError",
            message: failure.message,
            params: failure.params,
        }
    }
}

impl From<OperationError> for AppError {
    fn from(err: OperationError) -> Self {
        match err {
            OperationError::InvalidRequest => AppError::InvalidRequest,
            OperationError::Validation(failure) => AppError::Validation(failure),
            OperationError::NotFound => AppError::NotFound,
            OperationError::Ledger(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(failure) => {
                tracing::info!(kind = %failure.kind, message = %failure.message, "Validation failed");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorBody::from(failure)),
                )
                    .into_response()
            }
            AppError::InvalidRequest => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid Request" })),
            )
                .into_response(),
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden").into_response(),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
