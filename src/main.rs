// src/main.rs

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use cafe_backoffice::categories::category_repository::PgCategoryRepository;
use cafe_backoffice::products::product_repository::PgProductRepository;
use cafe_backoffice::products::product_service::ProductService;
use cafe_backoffice::shared::config::AppConfig;
use cafe_backoffice::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("invalid configuration: {}", e))
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.level))
        .init();

    let db_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "failed to connect to PostgreSQL");
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e)
        })?;

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "database migrations failed");
            std::io::Error::new(std::io::ErrorKind::Other, e)
        })?;

    let product_service = ProductService::new(
        Arc::new(PgProductRepository::new(db_pool.clone())),
        Arc::new(PgCategoryRepository::new(db_pool)),
    );

    // web::Data is cloned into every worker
    let app_state = web::Data::new(AppState {
        product_service,
        jwt_secret: config.auth.jwt_secret.clone(),
    });

    let (host, port) = config.bind_address();
    tracing::info!(%host, port, "starting cafe back-office API");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(cafe_backoffice::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
