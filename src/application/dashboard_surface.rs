// Dashboard surface - composes the widget store with per-widget gesture controllers
use crate::application::widget_store::WidgetStore;
use crate::domain::gesture::{GestureController, GestureEffect, PressTarget};
use crate::domain::grid::{GridPosition, GridSize, GridSpec, PixelPoint};
use crate::domain::theme::ThemeKey;
use crate::domain::widget::{Widget, WidgetId, WidgetKind};
use std::collections::HashMap;

const NEW_WIDGET_ICONS: [&str; 8] = ["🚀", "⭐", "🌟", "💫", "🛸", "🌌", "✨", "🔮"];

/// Optional fields of an "add widget" action; gaps are filled from the widget count
#[derive(Debug, Clone, Default)]
pub struct NewWidget {
    pub kind: Option<WidgetKind>,
    pub title: Option<String>,
    pub position: Option<GridPosition>,
    pub size: Option<GridSize>,
}

/// Gesture phase of a widget as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Dragging,
    Resizing,
}

/// Render-ready state of one widget
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetSnapshot {
    pub widget: Widget,
    pub preview: Option<GridPosition>,
    pub phase: GesturePhase,
}

impl WidgetSnapshot {
    /// Where the card is drawn: the preview while dragging, the committed position otherwise
    pub fn display_position(&self) -> GridPosition {
        self.preview.unwrap_or(self.widget.position)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSnapshot {
    pub grid: GridSpec,
    pub theme: ThemeKey,
    pub show_grid: bool,
    pub widgets: Vec<WidgetSnapshot>,
}

pub struct DashboardSurface {
    grid: GridSpec,
    store: WidgetStore,
    gestures: HashMap<WidgetId, GestureController>,
    theme: ThemeKey,
    show_grid: bool,
}

impl DashboardSurface {
    pub fn new(grid: GridSpec, seed: Vec<Widget>, theme: ThemeKey) -> Self {
        Self {
            grid,
            store: WidgetStore::new(grid, seed),
            gestures: HashMap::new(),
            theme,
            show_grid: false,
        }
    }

    pub fn store(&self) -> &WidgetStore {
        &self.store
    }

    pub fn set_theme(&mut self, theme: ThemeKey) {
        tracing::info!(theme = theme.as_str(), "Switched theme");
        self.theme = theme;
    }

    pub fn toggle_grid(&mut self) -> bool {
        self.show_grid = !self.show_grid;
        self.show_grid
    }

    /// Start a drag or resize on one widget. Returns `false` when the press is ignored
    /// (unknown widget, action button, or a gesture already in progress).
    pub fn pointer_down(&mut self, id: &WidgetId, target: PressTarget, pointer: PixelPoint) -> bool {
        let Some(widget) = self.store.get(id) else {
            tracing::debug!(id = %id, "Ignoring press on unknown widget");
            return false;
        };
        let (position, size) = (widget.position, widget.size);

        let controller = self.gestures.entry(id.clone()).or_default();
        let started = controller.press(target, pointer, position, size);
        if started {
            tracing::debug!(id = %id, target = ?target, x = pointer.x, y = pointer.y, "Gesture started");
        } else if controller.is_idle() {
            self.gestures.remove(id);
        }
        started
    }

    /// Feed a pointer move to every active gesture
    pub fn pointer_move(&mut self, pointer: PixelPoint) {
        let grid = self.grid;
        let mut resizes = Vec::new();

        for (id, controller) in self.gestures.iter_mut() {
            match controller.pointer_move(&grid, pointer) {
                GestureEffect::Resize(size) => resizes.push((id.clone(), size)),
                GestureEffect::Preview(position) => {
                    tracing::trace!(id = %id, x = position.x, y = position.y, "Drag preview");
                }
                GestureEffect::Commit(_) | GestureEffect::None => {}
            }
        }

        for (id, size) in resizes {
            self.store.resize(&id, size);
        }
    }

    /// End every active gesture; drags commit their last preview
    pub fn pointer_up(&mut self) {
        for (id, mut controller) in self.gestures.drain() {
            if let GestureEffect::Commit(position) = controller.release() {
                self.store.move_to(&id, position);
            }
        }
    }

    pub fn add_widget(&mut self, request: NewWidget) -> WidgetId {
        let count = self.store.len();
        let kind = request
            .kind
            .unwrap_or(WidgetKind::ALL[count % WidgetKind::ALL.len()]);
        let title = request.title.unwrap_or_else(|| {
            format!(
                "{} Novo Widget",
                NEW_WIDGET_ICONS[count % NEW_WIDGET_ICONS.len()]
            )
        });
        let position = request.position.unwrap_or_else(|| {
            GridPosition::new(1 + (count % 5) as i32 * 2, 3 + (count / 5) as i32 * 2)
        });
        let size = request.size.unwrap_or(self.grid.min_size());

        self.store.create(kind, position, size, title)
    }

    pub fn delete_widget(&mut self, id: &WidgetId) -> bool {
        self.gestures.remove(id);
        self.store.delete(id).is_some()
    }

    pub fn duplicate_widget(&mut self, id: &WidgetId) -> Option<WidgetId> {
        self.store.duplicate(id)
    }

    pub fn snapshot(&self) -> SurfaceSnapshot {
        let widgets = self
            .store
            .widgets()
            .iter()
            .map(|widget| {
                let controller = self.gestures.get(&widget.id);
                let phase = match controller {
                    Some(GestureController::Dragging(_)) => GesturePhase::Dragging,
                    Some(GestureController::Resizing(_)) => GesturePhase::Resizing,
                    Some(GestureController::Idle) | None => GesturePhase::Idle,
                };
                WidgetSnapshot {
                    widget: widget.clone(),
                    preview: controller.and_then(|c| c.drag_preview()),
                    phase,
                }
            })
            .collect();

        SurfaceSnapshot {
            grid: self.grid,
            theme: self.theme,
            show_grid: self.show_grid,
            widgets,
        }
    }
}
