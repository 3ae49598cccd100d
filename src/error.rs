use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// The generic not-found error every missing-record path reports.
    pub fn record_not_found() -> Self {
        Self::NotFound("Record not found".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Database(ref err) => {
                tracing::error!("SQLite database error: {}", err);

                // Keep driver internals out of the response body
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            ApiError::Validation(ref message) => {
                tracing::debug!("Request validation error: {}", message);
                (StatusCode::BAD_REQUEST, message.clone())
            }
            ApiError::NotFound(ref message) => {
                tracing::debug!("Resource not found: {}", message);
                (StatusCode::NOT_FOUND, message.clone())
            }
            ApiError::Internal(ref err) => {
                tracing::error!("Internal server error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

// SQLite error mapping
impl From<rusqlite::Error> for ApiError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::QueryReturnedNoRows => ApiError::record_not_found(),
            other => ApiError::Database(other.to_string()),
        }
    }
}

// Result type alias for convenience
pub type ApiResult<T> = Result<T, ApiError>;
