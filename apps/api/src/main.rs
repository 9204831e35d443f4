mod catalogue;
mod config;
mod errors;
mod models;
mod render;
mod routes;
mod scoring;
mod session;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalogue::ProjectCatalogue;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (malformed values abort startup)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    // Load the project catalogue (file override or the embedded default)
    let catalogue = match &config.catalogue_path {
        Some(path) => ProjectCatalogue::from_path(path)
            .with_context(|| format!("failed to load project catalogue from {}", path.display()))?,
        None => ProjectCatalogue::embedded().context("embedded project catalogue is invalid")?,
    };
    info!(
        "Project catalogue v{} loaded ({} projects)",
        catalogue.version,
        catalogue.len()
    );
    info!("Scoring config: {:?}", config.scoring);

    // Build app state
    let state = AppState::new(config.clone(), catalogue);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict allowed origins once the form frontend has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
