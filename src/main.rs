use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use scout_backend::config::Config;
use scout_backend::routes;
use scout_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("scout_backend=debug,tower_http=debug")
        .init();

    let config = Config::from_env()?;
    if config.google_api_key.is_none() {
        warn!("GOOGLE_API_KEY is not set; /ask will report the missing key until it is configured");
    }
    info!("Using model {}", config.gemini_model);

    let app_state = AppState::new(config.clone());

    // Build application
    let app = Router::new()
        .merge(routes::create_routes(app_state.clone()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
