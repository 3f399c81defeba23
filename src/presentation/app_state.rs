// Application state for HTTP handlers
use crate::application::dashboard_surface::DashboardSurface;
use crate::application::kpi_service::KpiSummaryService;
use tokio::sync::Mutex;

/// The surface has a single writer: whichever handler holds the lock
pub struct AppState {
    pub surface: Mutex<DashboardSurface>,
    pub kpi_service: KpiSummaryService,
}
