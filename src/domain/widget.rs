// Widget domain model
use super::grid::{GridPosition, GridSize};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Kpi,
    Line,
    Bar,
    Pie,
    Table,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 5] = [
        WidgetKind::Kpi,
        WidgetKind::Line,
        WidgetKind::Bar,
        WidgetKind::Pie,
        WidgetKind::Table,
    ];

    /// Whether a small footprint replaces the chart with a compact summary
    pub fn compacts_when_small(self) -> bool {
        matches!(self, WidgetKind::Table | WidgetKind::Line | WidgetKind::Bar)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub id: WidgetId,
    pub title: String,
    pub kind: WidgetKind,
    pub position: GridPosition,
    pub size: GridSize,
}

impl Widget {
    pub fn new(
        id: WidgetId,
        title: String,
        kind: WidgetKind,
        position: GridPosition,
        size: GridSize,
    ) -> Self {
        Self {
            id,
            title,
            kind,
            position,
            size,
        }
    }

    pub fn is_compact(&self) -> bool {
        self.kind.compacts_when_small() && (self.size.width < 10 || self.size.height < 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(kind: WidgetKind, width: i32, height: i32) -> Widget {
        Widget::new(
            WidgetId::new("1"),
            "Test".to_string(),
            kind,
            GridPosition::new(0, 0),
            GridSize::new(width, height),
        )
    }

    #[test]
    fn test_compact_rendering_threshold() {
        assert!(widget(WidgetKind::Line, 9, 10).is_compact());
        assert!(widget(WidgetKind::Table, 12, 7).is_compact());
        assert!(!widget(WidgetKind::Bar, 10, 8).is_compact());
        assert!(!widget(WidgetKind::Pie, 8, 6).is_compact());
        assert!(!widget(WidgetKind::Kpi, 8, 6).is_compact());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&WidgetKind::Table).unwrap();
        assert_eq!(json, "\"table\"");
        let kind: WidgetKind = serde_json::from_str("\"kpi\"").unwrap();
        assert_eq!(kind, WidgetKind::Kpi);
    }
}
