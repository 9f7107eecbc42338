use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain::services::{LifecycleError, TaxonomyError};
use domain::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Confirmation required: {0}")]
    ConfirmationRequired(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::ConfirmationRequired(msg) => {
                (StatusCode::CONFLICT, "confirmation_required", msg.clone())
            }
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg.clone()),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".into(),
                )
            }
        };

        let body = ErrorBody {
            error: error_code.into(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<LifecycleError> for ApiError {
    fn from(err: LifecycleError) -> Self {
        match err {
            LifecycleError::Validation(msg) => ApiError::Validation(msg),
            LifecycleError::NotFound(id) => ApiError::NotFound(format!("Job not found: {}", id)),
            LifecycleError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<TaxonomyError> for ApiError {
    fn from(err: TaxonomyError) -> Self {
        match err {
            TaxonomyError::InUse { label, count } => ApiError::Conflict(format!(
                "Industry \"{}\" is still used by {} job(s)",
                label, count
            )),
            TaxonomyError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}
