use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::auth::{ApiKeyAuth, API_KEY_SCHEME};
use crate::error::AppResult;

#[derive(Serialize)]
pub struct KeyResponse {
    status: &'static str,
    scheme: &'static str,
    key_hint: String,
}

/// GET /api/key - Report the (redacted) key the request authenticated with
pub async fn current_key(auth: ApiKeyAuth) -> AppResult<HttpResponse> {
    let key_hint = auth.hint();
    log::info!("Request authenticated with key {}", key_hint);

    Ok(HttpResponse::Ok().json(KeyResponse {
        status: "authenticated",
        scheme: API_KEY_SCHEME,
        key_hint,
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/key").route("", web::get().to(current_key)));
}
