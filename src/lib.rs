// src/lib.rs

use actix_web::{error::InternalError, web, HttpResponse};

pub mod auth;       // Token validation and admin authorization
pub mod categories; // Category entity and storage
pub mod products;   // Product resource
pub mod shared;     // Envelope, errors, configuration

use products::product_service::ProductService;
use shared::service_error::INVALID_DATA;
use shared::shared_structs::MessageResponse;

/// State shared by every route.
pub struct AppState {
    pub product_service: ProductService,
    pub jwt_secret: String, // HS256 secret used to validate bearer tokens
}

fn invalid_data<E>(err: E, source: &str) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    tracing::debug!(error = %err, source, "rejected request");
    InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(MessageResponse::new(INVALID_DATA)),
    )
    .into()
}

/// Registers every route. Body, query string and path parsing failures
/// answer 400 with the message envelope instead of actix's plain-text default.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| invalid_data(err, "body")))
        .app_data(web::QueryConfig::default().error_handler(|err, _req| invalid_data(err, "query")))
        .app_data(web::PathConfig::default().error_handler(|err, _req| invalid_data(err, "path")))
        .service(shared::health_router::health);

    products::product_router::configure(cfg);
}
