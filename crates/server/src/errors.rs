use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

use crate::views::{ErrorBody, ErrorsBody};

/// Message list returned for any rejected association write.
pub const VALIDATION_ERRORS: &str = "validation errors";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn restaurant_not_found() -> Self { Self::NotFound("Restaurant not found".into()) }

    pub fn validation_errors() -> Self { Self::Validation(vec![VALIDATION_ERRORS.into()]) }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        if e.is_validation() {
            warn!(error = %e, "request rejected");
            return ApiError::validation_errors();
        }
        match e {
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(error) => (StatusCode::NOT_FOUND, Json(ErrorBody { error })).into_response(),
            ApiError::Validation(errors) => (StatusCode::BAD_REQUEST, Json(ErrorsBody { errors })).into_response(),
            ApiError::Internal(error) => {
                error!(%error, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { error })).into_response()
            }
        }
    }
}
