// Mapper to convert surface snapshots and KPI states to wire views
use crate::application::dashboard_surface::{GesturePhase, SurfaceSnapshot, WidgetSnapshot};
use crate::application::kpi_service::KpiState;
use crate::domain::dataset::Dataset;
use crate::domain::grid::GridSpec;
use crate::domain::kpi::KpiTile;
use crate::domain::theme::ThemeKey;
use crate::domain::widget::WidgetKind;
use crate::infrastructure::view::{
    DashboardView, GridView, KpiStateView, OverlayInfo, ThemeView, WidgetContent, WidgetView,
};

pub fn dashboard_to_view(snapshot: SurfaceSnapshot) -> DashboardView {
    let grid = snapshot.grid;
    let overlay = snapshot.show_grid.then(|| OverlayInfo {
        cell_size: grid.cell_size(),
        widget_count: snapshot.widgets.len(),
        min_size: grid.min_size(),
        max_size: grid.max_size(),
    });

    let widgets = snapshot
        .widgets
        .into_iter()
        .map(|w| widget_to_view(&grid, w))
        .collect();

    DashboardView {
        theme: ThemeView {
            key: snapshot.theme.as_str(),
            available: ThemeKey::ALL.iter().map(|k| k.as_str()).collect(),
            tokens: snapshot.theme.tokens(),
        },
        grid: GridView {
            cell_size: grid.cell_size(),
            show_overlay: snapshot.show_grid,
            overlay,
        },
        widgets,
    }
}

fn widget_to_view(grid: &GridSpec, snapshot: WidgetSnapshot) -> WidgetView {
    let display = snapshot.display_position();
    let widget = snapshot.widget;

    let content = if widget.is_compact() {
        WidgetContent::Compact {
            heading: "📊 Resumo",
            subtitle: if widget.kind == WidgetKind::Table {
                "Dados Compactos"
            } else {
                "Mini Gráfico"
            },
        }
    } else {
        match Dataset::for_kind(widget.kind) {
            Some(dataset) => WidgetContent::Chart { dataset },
            None => WidgetContent::Kpi {
                tile: KpiTile::for_widget(&widget.id),
            },
        }
    };

    WidgetView {
        rect: grid.to_rect(display, widget.size),
        preview: snapshot.preview.map(|p| grid.to_rect(p, widget.size)),
        phase: match snapshot.phase {
            GesturePhase::Idle => "idle",
            GesturePhase::Dragging => "dragging",
            GesturePhase::Resizing => "resizing",
        },
        id: widget.id,
        title: widget.title,
        kind: widget.kind,
        position: widget.position,
        size: widget.size,
        content,
    }
}

pub fn kpi_state_to_view(state: KpiState) -> KpiStateView {
    match state {
        KpiState::Loading => KpiStateView::Loading {
            message: "Carregando KPIs...",
        },
        KpiState::Failed(message) => KpiStateView::Error {
            message: format!("Erro: {}", message),
        },
        KpiState::Ready(summary) => KpiStateView::Success {
            cards: summary.cards(),
            period: summary.period,
        },
    }
}
