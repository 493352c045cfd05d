// src/shared/health_router.rs

use actix_web::{get, HttpResponse};

use super::shared_structs::MessageResponse;

/// Liveness check.
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("ok"))
}
