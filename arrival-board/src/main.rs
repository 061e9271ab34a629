use arrival_board::config::AppConfig;
use arrival_board::seoul::FetchError;
use arrival_board::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return;
        }
    };

    // A missing key still serves the page, with a warning in place of results
    let feed = match config.feed() {
        Ok(feed) => {
            tracing::info!(source = feed.describe(), "arrival feed ready");
            Some(feed)
        }
        Err(FetchError::NotConfigured(message)) => {
            tracing::warn!("{message}; arrivals are disabled");
            None
        }
        Err(e) => {
            tracing::error!(kind = e.kind(), "failed to create arrival feed: {e}");
            return;
        }
    };

    let state = AppState::new(feed, config.dashboard.clone());
    let app = create_router(state, &config.static_dir);

    let addr = config.bind;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, "failed to bind: {e}");
            return;
        }
    };

    tracing::info!("Subway arrival board listening on http://{addr}");
    tracing::info!("  GET  /                - Dashboard");
    tracing::info!("  GET  /api/arrivals    - Arrivals as JSON (?station=...)");
    tracing::info!("  GET  /health          - Health check");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {e}");
    }
}
