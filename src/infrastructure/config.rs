use crate::domain::grid::{GridPosition, GridSize, GridSpec};
use crate::domain::theme::ThemeKey;
use crate::domain::widget::{Widget, WidgetId, WidgetKind};
use anyhow::Context;
use serde::Deserialize;

/// The only environment variable the service reads
pub const API_URL_ENV: &str = "DASHBOARD_API_URL";

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub kpi: KpiSettings,
    pub grid: GridSettings,
    pub theme: ThemeSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct KpiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GridSettings {
    pub cell_size: i32,
    pub min_size: GridSize,
    pub max_size: GridSize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeSettings {
    pub default: ThemeKey,
}

impl DashboardConfig {
    pub fn grid_spec(&self) -> anyhow::Result<GridSpec> {
        GridSpec::new(self.grid.cell_size, self.grid.min_size, self.grid.max_size).with_context(
            || {
                format!(
                    "invalid grid settings: cell_size={} min={:?} max={:?}",
                    self.grid.cell_size, self.grid.min_size, self.grid.max_size
                )
            },
        )
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct WidgetsConfig {
    #[serde(default = "default_seed")]
    pub widgets: Vec<SeedWidget>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedWidget {
    pub id: String,
    pub title: String,
    pub kind: WidgetKind,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl SeedWidget {
    fn new(id: &str, title: &str, kind: WidgetKind, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            kind,
            x,
            y,
            width,
            height,
        }
    }

    pub fn into_widget(self) -> Widget {
        Widget::new(
            WidgetId::new(self.id),
            self.title,
            self.kind,
            GridPosition::new(self.x, self.y),
            GridSize::new(self.width, self.height),
        )
    }
}

impl WidgetsConfig {
    pub fn into_widgets(self) -> Vec<Widget> {
        self.widgets.into_iter().map(SeedWidget::into_widget).collect()
    }
}

fn default_seed() -> Vec<SeedWidget> {
    vec![
        SeedWidget::new("1", "💰 Faturamento Mensal", WidgetKind::Kpi, 1, 3, 8, 6),
        SeedWidget::new("2", "📈 Vendas por Período", WidgetKind::Line, 10, 3, 12, 10),
        SeedWidget::new("3", "📊 Pedidos por Mês", WidgetKind::Bar, 1, 10, 10, 8),
        SeedWidget::new("4", "🥧 Produtos Populares", WidgetKind::Pie, 23, 3, 8, 10),
        SeedWidget::new("5", "📋 Relatório Detalhado", WidgetKind::Table, 12, 14, 12, 10),
    ]
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    build_dashboard_config(
        config::File::with_name("config/dashboard").required(false),
        std::env::var(API_URL_ENV).ok(),
    )
}

pub fn load_widgets_config() -> anyhow::Result<WidgetsConfig> {
    build_widgets_config(config::File::with_name("config/widgets").required(false))
}

fn build_dashboard_config<S>(source: S, api_url: Option<String>) -> anyhow::Result<DashboardConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("kpi.base_url", "http://localhost:8000")?
        .set_default("kpi.timeout_secs", 10_i64)?
        .set_default("grid.cell_size", 40_i64)?
        .set_default("grid.min_size.width", 8_i64)?
        .set_default("grid.min_size.height", 6_i64)?
        .set_default("grid.max_size.width", 20_i64)?
        .set_default("grid.max_size.height", 15_i64)?
        .set_default("theme.default", "dark")?
        .add_source(source)
        .set_override_option("kpi.base_url", api_url)?
        .build()?;

    let dashboard: DashboardConfig = settings
        .try_deserialize()
        .context("Failed to parse dashboard configuration")?;
    dashboard.grid_spec()?;
    Ok(dashboard)
}

fn build_widgets_config<S>(source: S) -> anyhow::Result<WidgetsConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder().add_source(source).build()?;

    settings
        .try_deserialize()
        .context("Failed to parse widgets configuration")
}
