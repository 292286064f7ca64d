use actix_web::{web, HttpResponse};
use serde::Serialize;

#[derive(Serialize)]
pub struct LivenessResponse {
    status: &'static str,
}

/// Liveness check - is the process running?
/// Returns 200 if the server is alive.
pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok().json(LivenessResponse { status: "ok" })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(liveness));
}
