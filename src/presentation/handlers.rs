// HTTP request handlers
use crate::application::dashboard_surface::{DashboardSurface, NewWidget};
use crate::domain::gesture::PressTarget;
use crate::domain::grid::{GridPosition, GridSize, PixelPoint};
use crate::domain::theme::ThemeKey;
use crate::domain::widget::{WidgetId, WidgetKind};
use crate::infrastructure::chunked_json::stream_from_receiver;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::infrastructure::view_mapper::{dashboard_to_view, kpi_state_to_view};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct PointerDownRequest {
    pub widget_id: WidgetId,
    pub target: PressTarget,
    pub x: f64,
    pub y: f64,
}

#[derive(Deserialize)]
pub struct PointerMoveRequest {
    pub x: f64,
    pub y: f64,
}

#[derive(Deserialize, Default)]
pub struct AddWidgetRequest {
    pub kind: Option<WidgetKind>,
    pub title: Option<String>,
    pub position: Option<GridPosition>,
    pub size: Option<GridSize>,
}

#[derive(Deserialize)]
pub struct ThemeRequest {
    pub theme: String,
}

async fn render(surface: &DashboardSurface, headers: &HeaderMap) -> Response {
    let view = dashboard_to_view(surface.snapshot());
    match json_response(&view, accepts_brotli(headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current layout with derived pixel rectangles
pub async fn get_dashboard(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let surface = state.surface.lock().await;
    render(&surface, &headers).await
}

pub async fn pointer_down(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<PointerDownRequest>,
) -> Response {
    let mut surface = state.surface.lock().await;
    surface.pointer_down(
        &request.widget_id,
        request.target,
        PixelPoint::new(request.x, request.y),
    );
    render(&surface, &headers).await
}

pub async fn pointer_move(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<PointerMoveRequest>,
) -> Response {
    let mut surface = state.surface.lock().await;
    surface.pointer_move(PixelPoint::new(request.x, request.y));
    render(&surface, &headers).await
}

pub async fn pointer_up(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let mut surface = state.surface.lock().await;
    surface.pointer_up();
    render(&surface, &headers).await
}

pub async fn add_widget(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    request: Option<Json<AddWidgetRequest>>,
) -> Response {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let mut surface = state.surface.lock().await;
    surface.add_widget(NewWidget {
        kind: request.kind,
        title: request.title,
        position: request.position,
        size: request.size,
    });
    render(&surface, &headers).await
}

/// Unknown ids are a silent no-op
pub async fn delete_widget(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let mut surface = state.surface.lock().await;
    surface.delete_widget(&WidgetId::new(id));
    render(&surface, &headers).await
}

pub async fn duplicate_widget(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let mut surface = state.surface.lock().await;
    surface.duplicate_widget(&WidgetId::new(id));
    render(&surface, &headers).await
}

pub async fn set_theme(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<ThemeRequest>,
) -> Response {
    let theme = match request.theme.parse::<ThemeKey>() {
        Ok(theme) => theme,
        Err(message) => return (StatusCode::BAD_REQUEST, message).into_response(),
    };

    let mut surface = state.surface.lock().await;
    surface.set_theme(theme);
    render(&surface, &headers).await
}

pub async fn toggle_grid(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let mut surface = state.surface.lock().await;
    surface.toggle_grid();
    render(&surface, &headers).await
}

/// Stream the KPI summary states (loading, then error or success)
pub async fn stream_kpi_summary(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let rx = state.kpi_service.stream_summary().await;
    stream_from_receiver(rx, kpi_state_to_view, accepts_brotli(&headers))
}
