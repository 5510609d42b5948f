use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lorebook::{DomainError, PipelineError};
use serde_json::json;
use tracing::error;

/// The server's error type, converted into HTTP responses.
///
/// `DomainError` carries the client-facing taxonomy (400 / 404 / 500);
/// pipeline failures surface as 500s with their message, and anything
/// unclassified is logged and reported generically.
pub enum AppError {
    Domain(DomainError),
    Pipeline(PipelineError),
    Internal(anyhow::Error),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::Domain(err)
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        AppError::Pipeline(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::Domain(err) => {
                let status = match &err {
                    DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                    DomainError::NotFound(_) => StatusCode::NOT_FOUND,
                    DomainError::Database(_) => {
                        error!("Database error: {err}");
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, err.to_string())
            }
            AppError::Pipeline(err) => {
                error!("Ingestion pipeline failed: {err:?}");
                // Validation runs before the pipeline, but a store lookup
                // inside it can still classify as not-found.
                let status = match &err {
                    PipelineError::Store(DomainError::NotFound(_)) => StatusCode::NOT_FOUND,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, err.to_string())
            }
            AppError::Internal(err) => {
                error!("Internal server error: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
