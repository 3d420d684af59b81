// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::time::Duration;
use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::application::dashboard_service::DashboardService;
use crate::application::dataset_source::DatasetSource;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_dataset_source::HttpDatasetSource;
use crate::infrastructure::locale::{Locales, load_locales_config};
use crate::infrastructure::view_channel::ChannelRenderSink;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    current_view, get_catalog, health_check, select_slice, set_language, toggle_playback,
    toggle_stations,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let dashboard_config = load_dashboard_config()?;
    let locales = Arc::new(Locales::new(
        load_locales_config()?,
        &dashboard_config.locale.fallback,
    )?);

    // Fetch the dataset once (infrastructure layer). Initialization fails
    // outright rather than rendering with partial data.
    let source = HttpDatasetSource::new(dashboard_config.dataset.url.clone());
    let dataset = Arc::new(source.fetch().await.context("initialization failed")?);

    // Spawn the dashboard actor (application layer)
    let (sink, view_rx) = ChannelRenderSink::channel();
    let dashboard = DashboardService::spawn(
        dataset,
        locales.clone(),
        dashboard_config.viewport.to_viewport(),
        Duration::from_millis(dashboard_config.playback.tick_ms),
        Arc::new(sink),
    );

    // Create application state
    let state = Arc::new(AppState {
        dashboard,
        view: view_rx,
        locales,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/view", get(current_view))
        .route("/slices/:key", post(select_slice))
        .route("/playback/toggle", post(toggle_playback))
        .route("/stations/toggle", post(toggle_stations))
        .route("/language/:code", post(set_language))
        .route("/catalog/:code", get(get_catalog))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = "0.0.0.0:8080".parse()?;
    println!("Starting solar-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
