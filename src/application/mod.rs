// Application layer - Use cases over the domain models
pub mod dashboard_surface;
pub mod kpi_service;
pub mod kpi_source;
pub mod widget_store;
