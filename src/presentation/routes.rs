// Router construction
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    add_widget, delete_widget, duplicate_widget, get_dashboard, health_check, pointer_down,
    pointer_move, pointer_up, set_theme, stream_kpi_summary, toggle_grid,
};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/pointer/down", post(pointer_down))
        .route("/dashboard/pointer/move", post(pointer_move))
        .route("/dashboard/pointer/up", post(pointer_up))
        .route("/dashboard/widgets", post(add_widget))
        .route("/dashboard/widgets/:id", delete(delete_widget))
        .route("/dashboard/widgets/:id/duplicate", post(duplicate_widget))
        .route("/dashboard/theme", put(set_theme))
        .route("/dashboard/grid/toggle", post(toggle_grid))
        .route("/kpis/summary", get(stream_kpi_summary))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_surface::DashboardSurface;
    use crate::application::kpi_service::KpiSummaryService;
    use crate::application::kpi_source::{KpiFetchError, KpiSource};
    use crate::domain::grid::{GridPosition, GridSize, GridSpec};
    use crate::domain::kpi::KpiSummary;
    use crate::domain::theme::ThemeKey;
    use crate::domain::widget::{Widget, WidgetId, WidgetKind};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use tokio::sync::Mutex;
    use tower::ServiceExt;

    struct UnreachableSource;

    #[async_trait]
    impl KpiSource for UnreachableSource {
        async fn fetch_summary(&self) -> Result<KpiSummary, KpiFetchError> {
            Err(KpiFetchError::Request("connection refused".to_string()))
        }
    }

    fn make_app() -> Router {
        let surface = DashboardSurface::new(
            GridSpec::default(),
            vec![Widget::new(
                WidgetId::new("2"),
                "📈 Vendas por Período".to_string(),
                WidgetKind::Line,
                GridPosition::new(10, 3),
                GridSize::new(12, 10),
            )],
            ThemeKey::Dark,
        );
        build_router(Arc::new(AppState {
            surface: Mutex::new(surface),
            kpi_service: KpiSummaryService::new(Arc::new(UnreachableSource)),
        }))
    }

    fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 1_000_000)
            .await
            .unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = make_app();
        let response = app.oneshot(empty_request(Method::GET, "/healthz")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_dashboard_lists_widgets() {
        let app = make_app();
        let (status, json) = send(&app, empty_request(Method::GET, "/dashboard")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["theme"]["key"], "dark");
        assert_eq!(json["widgets"][0]["id"], "2");
        assert_eq!(json["widgets"][0]["rect"]["left"], 400);
        assert_eq!(json["widgets"][0]["content"]["type"], "chart");
    }

    #[tokio::test]
    async fn test_drag_gesture_over_http() {
        let app = make_app();

        let (_, json) = send(
            &app,
            json_request(
                Method::POST,
                "/dashboard/pointer/down",
                serde_json::json!({"widget_id": "2", "target": "body", "x": 500.0, "y": 300.0}),
            ),
        )
        .await;
        assert_eq!(json["widgets"][0]["phase"], "dragging");

        let (_, json) = send(
            &app,
            json_request(
                Method::POST,
                "/dashboard/pointer/move",
                serde_json::json!({"x": 585.0, "y": 258.0}),
            ),
        )
        .await;
        assert_eq!(json["widgets"][0]["position"]["x"], 10);
        assert_eq!(json["widgets"][0]["preview"]["left"], 480);

        let (_, json) = send(&app, empty_request(Method::POST, "/dashboard/pointer/up")).await;
        assert_eq!(json["widgets"][0]["position"]["x"], 12);
        assert_eq!(json["widgets"][0]["position"]["y"], 2);
        assert!(json["widgets"][0].get("preview").is_none());
    }

    #[tokio::test]
    async fn test_widget_actions() {
        let app = make_app();

        let (_, json) = send(&app, empty_request(Method::POST, "/dashboard/widgets/2/duplicate")).await;
        assert_eq!(json["widgets"].as_array().unwrap().len(), 2);
        assert_eq!(json["widgets"][1]["title"], "📈 Vendas por Período (Cópia)");
        assert_eq!(json["widgets"][1]["position"]["x"], 11);

        let (_, json) = send(
            &app,
            json_request(Method::POST, "/dashboard/widgets", serde_json::json!({"kind": "pie"})),
        )
        .await;
        assert_eq!(json["widgets"].as_array().unwrap().len(), 3);
        assert_eq!(json["widgets"][2]["kind"], "pie");

        let (_, json) = send(&app, empty_request(Method::POST, "/dashboard/widgets")).await;
        assert_eq!(json["widgets"].as_array().unwrap().len(), 4);

        let (status, json) = send(&app, empty_request(Method::DELETE, "/dashboard/widgets/2")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["widgets"].as_array().unwrap().len(), 3);

        // deleting again is a silent no-op
        let (status, json) = send(&app, empty_request(Method::DELETE, "/dashboard/widgets/2")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["widgets"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_theme_switch_and_validation() {
        let app = make_app();

        let (status, json) = send(
            &app,
            json_request(Method::PUT, "/dashboard/theme", serde_json::json!({"theme": "highContrast"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["theme"]["tokens"]["name"], "Alto Contraste");

        let (status, _) = send(
            &app,
            json_request(Method::PUT, "/dashboard/theme", serde_json::json!({"theme": "sepia"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_grid_toggle_exposes_overlay() {
        let app = make_app();
        let (_, json) = send(&app, empty_request(Method::POST, "/dashboard/grid/toggle")).await;
        assert_eq!(json["grid"]["show_overlay"], true);
        assert_eq!(json["grid"]["overlay"]["cell_size"], 40);
    }

    #[tokio::test]
    async fn test_kpi_stream_reports_error() {
        let app = make_app();
        let response = app
            .oneshot(empty_request(Method::GET, "/kpis/summary"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 100_000)
            .await
            .unwrap();
        let lines: Vec<serde_json::Value> = String::from_utf8_lossy(&body)
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["state"], "loading");
        assert_eq!(lines[1]["state"], "error");
        assert_eq!(
            lines[1]["message"],
            "Erro: Falha ao conectar à API: connection refused"
        );
    }
}
