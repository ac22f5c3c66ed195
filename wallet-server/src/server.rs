//! # Server Setup
//!
//! Serves the built wallet page (`trunk build` output) from a directory. Unknown paths
//! fall back to `index.html` so the page loads from any URL.

use axum::Router;
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;

/// Configure the global tracing subscriber for `level` (trace/debug/info/warn/error).
pub fn init_tracing(level: &str) {
    let filter = match level {
        "trace" | "debug" | "info" | "warn" | "error" => tracing_subscriber::EnvFilter::new(level),
        _ => tracing_subscriber::EnvFilter::new("info"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// Router serving `dist_dir`.
pub fn create_router(dist_dir: &Path) -> Router {
    let index = ServeFile::new(dist_dir.join("index.html"));
    let static_files = ServeDir::new(dist_dir)
        .append_index_html_on_directories(true)
        .fallback(index);

    Router::new()
        .fallback_service(static_files)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let app = create_router(&config.dist_dir);
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    info!("Wallet connection server running at http://{}", config.bind_address);
    info!("Serving from {}", config.dist_dir.display());

    axum::serve(listener, app).await?;
    Ok(())
}
