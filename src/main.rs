use actix_cors::Cors;
use actix_web::{App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod fetch;
mod model;
mod rules;
mod service;

use app::AppState;
use model::Config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    let state = AppState::new(&config);
    let analysis_service = state.analysis_service;
    let health = state.health;

    tracing::info!("Starting Trust Lens server on {}", bind_addr);

    HttpServer::new(move || {
        // The API is consumed from browser frontends on other origins
        App::new()
            .wrap(Cors::permissive())
            .app_data(analysis_service.clone())
            .app_data(health.clone())
            .configure(api::analyze::configure)
            .configure(api::health::configure)
            .configure(api::openapi::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
