mod config;
mod datasources;
mod error;
mod knowledge;
mod logic;
mod models;
mod routes;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use config::Config;
use datasources::SoilClassifier;
use logic::RecommendationEngine;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// Application state shared across all handlers. Everything inside is
/// immutable after startup, so cloning per request is cheap and lock-free.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub classifier: Arc<SoilClassifier>,
    pub engine: Arc<RecommendationEngine>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let state = AppState {
        classifier: Arc::new(SoilClassifier::new(&config)),
        engine: Arc::new(RecommendationEngine::new()),
        config: Arc::new(config.clone()),
    };

    let app = Router::new()
        .nest("/api/soil", routes::soil::router())
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(RequestBodyLimitLayer::new(config.max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Backend running on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
