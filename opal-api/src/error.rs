use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use opal_engine::OptimizeError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Validation(String),
    Unprocessable(String),
    Internal(String),
    Anyhow(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}

/// Map a repository failure to a response. Repo errors are infrastructure
/// faults, never user input problems.
pub fn repo_error(err: Box<dyn std::error::Error + Send + Sync>) -> AppError {
    AppError::Internal(err.to_string())
}

/// Map an engine failure to a response. Only inference faults are hidden
/// behind a generic 500; the rest carry their reason to the caller.
pub fn engine_error(err: OptimizeError) -> AppError {
    match err {
        OptimizeError::InvalidRecord => AppError::Validation(err.to_string()),
        OptimizeError::MissingCost => AppError::Unprocessable(err.to_string()),
        OptimizeError::Inference(_) => AppError::Internal(err.to_string()),
    }
}
