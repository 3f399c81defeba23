// Gesture domain model - drag and resize state machines driven by pointer events
use super::grid::{GridPosition, GridSize, GridSpec, PixelPoint};
use serde::Deserialize;

/// Region of a widget card that received a pointer press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressTarget {
    /// Card body, anywhere outside the declared sub-regions
    Body,
    /// Action buttons (duplicate, delete, settings)
    Action,
    /// Bottom-right resize affordance
    ResizeHandle,
}

/// In-progress move gesture
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pointer_origin: PixelPoint,
    origin_position: GridPosition,
    preview: Option<GridPosition>,
}

impl DragSession {
    pub fn begin(pointer_origin: PixelPoint, origin_position: GridPosition) -> Self {
        Self {
            pointer_origin,
            origin_position,
            preview: None,
        }
    }

    /// Recompute the preview from the total pointer delta since the press
    pub fn update(&mut self, grid: &GridSpec, pointer: PixelPoint) -> GridPosition {
        let delta = pointer.delta_from(self.pointer_origin);
        let candidate = self
            .origin_position
            .offset(grid.to_grid_units(delta.x), grid.to_grid_units(delta.y));
        self.preview = Some(candidate);
        candidate
    }

    pub fn preview(&self) -> Option<GridPosition> {
        self.preview
    }

    /// Final preview to commit, `None` when the pointer never moved
    pub fn release(self) -> Option<GridPosition> {
        self.preview
    }
}

/// In-progress resize gesture; each update is committed immediately
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    pointer_origin: PixelPoint,
    origin_size: GridSize,
}

impl ResizeSession {
    pub fn begin(pointer_origin: PixelPoint, origin_size: GridSize) -> Self {
        Self {
            pointer_origin,
            origin_size,
        }
    }

    pub fn update(&self, grid: &GridSpec, pointer: PixelPoint) -> GridSize {
        let delta = pointer.delta_from(self.pointer_origin);
        grid.clamp_size(GridSize::new(
            self.origin_size
                .width
                .saturating_add(grid.to_grid_units(delta.x)),
            self.origin_size
                .height
                .saturating_add(grid.to_grid_units(delta.y)),
        ))
    }
}

/// What the surface must do to the widget collection after a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEffect {
    None,
    /// Drag preview moved; nothing committed yet
    Preview(GridPosition),
    /// Resize update, committed right away
    Resize(GridSize),
    /// Drag released with a preview
    Commit(GridPosition),
}

/// Per-widget gesture ownership: a widget is never dragged and resized at once
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureController {
    #[default]
    Idle,
    Dragging(DragSession),
    Resizing(ResizeSession),
}

impl GestureController {
    /// Returns `true` when the press started a gesture. A press while a gesture
    /// is active, or on an action button, is ignored.
    pub fn press(
        &mut self,
        target: PressTarget,
        pointer: PixelPoint,
        position: GridPosition,
        size: GridSize,
    ) -> bool {
        if !self.is_idle() {
            return false;
        }

        match target {
            PressTarget::Body => {
                *self = GestureController::Dragging(DragSession::begin(pointer, position));
                true
            }
            PressTarget::ResizeHandle => {
                *self = GestureController::Resizing(ResizeSession::begin(pointer, size));
                true
            }
            PressTarget::Action => false,
        }
    }

    pub fn pointer_move(&mut self, grid: &GridSpec, pointer: PixelPoint) -> GestureEffect {
        match self {
            GestureController::Idle => GestureEffect::None,
            GestureController::Dragging(session) => {
                GestureEffect::Preview(session.update(grid, pointer))
            }
            GestureController::Resizing(session) => {
                GestureEffect::Resize(session.update(grid, pointer))
            }
        }
    }

    pub fn release(&mut self) -> GestureEffect {
        match std::mem::take(self) {
            GestureController::Dragging(session) => match session.release() {
                Some(position) => GestureEffect::Commit(position),
                None => GestureEffect::None,
            },
            GestureController::Resizing(_) | GestureController::Idle => GestureEffect::None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, GestureController::Idle)
    }

    pub fn drag_preview(&self) -> Option<GridPosition> {
        match self {
            GestureController::Dragging(session) => session.preview(),
            _ => None,
        }
    }
}
