use actix_web::{HttpRequest, HttpResponse};

use crate::error::{AppError, AppResult};

pub mod health;
pub mod key;

/// Fallback for unmatched paths, so clients always get the JSON error body
pub async fn not_found(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::NotFound(format!("{} {}", req.method(), req.path())))
}
