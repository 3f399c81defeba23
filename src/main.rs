// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_surface::DashboardSurface;
use crate::application::kpi_service::KpiSummaryService;
use crate::infrastructure::config::{load_dashboard_config, load_widgets_config};
use crate::infrastructure::kpi_client::HttpKpiClient;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let dashboard_config = load_dashboard_config()?;
    let widgets_config = load_widgets_config()?;
    let grid = dashboard_config.grid_spec()?;

    // Create KPI client (infrastructure layer)
    let kpi_client = Arc::new(HttpKpiClient::new(
        dashboard_config.kpi.base_url.clone(),
        Duration::from_secs(dashboard_config.kpi.timeout_secs),
    )?);

    // Create services (application layer)
    let kpi_service = KpiSummaryService::new(kpi_client);
    let surface = DashboardSurface::new(
        grid,
        widgets_config.into_widgets(),
        dashboard_config.theme.default,
    );
    tracing::info!(
        widgets = surface.store().len(),
        cell_size = grid.cell_size(),
        kpi_base_url = %dashboard_config.kpi.base_url,
        "Dashboard surface ready"
    );

    // Create application state
    let state = Arc::new(AppState {
        surface: Mutex::new(surface),
        kpi_service,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = dashboard_config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address: {}", dashboard_config.server.bind))?;
    tracing::info!("Starting grid-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
