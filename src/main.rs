// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::application::chart_session::ChartSession;
use crate::infrastructure::config::load_chart_config;
use crate::infrastructure::polarity_api::PolarityApi;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{chart_page, chart_svg, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_chart_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(PolarityApi::new(config.api.base_url.clone()));

    // Create the chart session (application layer)
    let chart_session = ChartSession::new(
        repository,
        config.geometry(),
        config.default_selector()?,
    );

    // Create application state
    let state = Arc::new(AppState { chart_session });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/", get(chart_page))
        .route("/chart.svg", get(chart_svg))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.bind_addr.parse()?;
    println!("Starting sentiment-chart service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
