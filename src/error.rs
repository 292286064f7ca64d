use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

use crate::auth::AuthError;

/// Body of every error response: `{"error": {"type": .., "message": ..}}`
#[derive(Serialize)]
pub struct ErrorBody<'a> {
    pub error: ErrorDetail<'a>,
}

#[derive(Serialize)]
pub struct ErrorDetail<'a> {
    #[serde(rename = "type")]
    pub error_type: &'a str,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl AppError {
    /// Value of the `type` field in the JSON body
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NotFound",
            AppError::Validation(_) => "ValidationError",
            AppError::Unauthorized(_) => "Unauthorized",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: ErrorDetail {
                error_type: self.error_type(),
                message: self.to_string(),
            },
        })
    }
}

/// Missing credentials are unauthenticated (401), a bad header shape is a
/// client error (400)
impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NoAuthHeader => AppError::Unauthorized(err.to_string()),
            AuthError::MalformedHeader => AppError::Validation(err.to_string()),
        }
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
