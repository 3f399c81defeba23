// JSON wire types consumed by the browser renderer
use crate::domain::dataset::Dataset;
use crate::domain::grid::{GridPosition, GridSize, PixelRect};
use crate::domain::kpi::{KpiTile, SummaryCard};
use crate::domain::theme::Theme;
use crate::domain::widget::{WidgetId, WidgetKind};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub theme: ThemeView,
    pub grid: GridView,
    pub widgets: Vec<WidgetView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThemeView {
    pub key: &'static str,
    pub available: Vec<&'static str>,
    pub tokens: &'static Theme,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridView {
    pub cell_size: i32,
    pub show_overlay: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<OverlayInfo>,
}

/// Debug panel shown while the grid overlay is on
#[derive(Debug, Clone, Serialize)]
pub struct OverlayInfo {
    pub cell_size: i32,
    pub widget_count: usize,
    pub min_size: GridSize,
    pub max_size: GridSize,
}

#[derive(Debug, Clone, Serialize)]
pub struct WidgetView {
    pub id: WidgetId,
    pub title: String,
    pub kind: WidgetKind,
    pub position: GridPosition,
    pub size: GridSize,
    /// Where the card is drawn (follows the drag preview)
    pub rect: PixelRect,
    /// Outline of the pending drop target during a drag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<PixelRect>,
    pub phase: &'static str,
    pub content: WidgetContent,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetContent {
    Kpi { tile: &'static KpiTile },
    Chart { dataset: Dataset },
    Compact { heading: &'static str, subtitle: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum KpiStateView {
    Loading { message: &'static str },
    Error { message: String },
    Success { period: String, cards: Vec<SummaryCard> },
}
