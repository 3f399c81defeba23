// Widget collection store - the only mutation path for widget records
use crate::domain::grid::{GridPosition, GridSize, GridSpec};
use crate::domain::widget::{Widget, WidgetId, WidgetKind};

const COPY_SUFFIX: &str = " (Cópia)";

/// Fresh widget ids: `<unix-millis>-<sequence>`, unique even within one millisecond
#[derive(Debug, Default)]
pub struct IdGenerator {
    sequence: u64,
}

impl IdGenerator {
    pub fn next(&mut self) -> WidgetId {
        self.sequence += 1;
        WidgetId::new(format!(
            "{}-{}",
            chrono::Utc::now().timestamp_millis(),
            self.sequence
        ))
    }
}

/// Ordered collection of widgets with unique ids
#[derive(Debug)]
pub struct WidgetStore {
    grid: GridSpec,
    widgets: Vec<Widget>,
    ids: IdGenerator,
}

impl WidgetStore {
    /// Seeds are taken as-is except that duplicate ids are dropped and bounds are enforced
    pub fn new(grid: GridSpec, seed: Vec<Widget>) -> Self {
        let mut store = Self {
            grid,
            widgets: Vec::with_capacity(seed.len()),
            ids: IdGenerator::default(),
        };

        for mut widget in seed {
            if store.contains(&widget.id) {
                tracing::warn!(id = %widget.id, "Dropping seed widget with duplicate id");
                continue;
            }
            widget.position = widget.position.clamped();
            widget.size = grid.clamp_size(widget.size);
            store.widgets.push(widget);
        }

        store
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn get(&self, id: &WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| &w.id == id)
    }

    pub fn contains(&self, id: &WidgetId) -> bool {
        self.get(id).is_some()
    }

    fn get_mut(&mut self, id: &WidgetId) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|w| &w.id == id)
    }

    fn fresh_id(&mut self) -> WidgetId {
        loop {
            let id = self.ids.next();
            if !self.contains(&id) {
                return id;
            }
        }
    }

    /// Negative coordinates are clamped to zero; unknown ids are ignored
    pub fn move_to(&mut self, id: &WidgetId, position: GridPosition) {
        match self.get_mut(id) {
            Some(widget) => {
                widget.position = position.clamped();
                tracing::debug!(id = %id, x = widget.position.x, y = widget.position.y, "Moved widget");
            }
            None => tracing::debug!(id = %id, "Ignoring move for unknown widget"),
        }
    }

    /// Size is re-clamped to the grid bounds; unknown ids are ignored
    pub fn resize(&mut self, id: &WidgetId, size: GridSize) {
        let size = self.grid.clamp_size(size);
        match self.get_mut(id) {
            Some(widget) => {
                widget.size = size;
                tracing::debug!(id = %id, width = size.width, height = size.height, "Resized widget");
            }
            None => tracing::debug!(id = %id, "Ignoring resize for unknown widget"),
        }
    }

    /// Returns the removed widget, `None` when the id was already absent
    pub fn delete(&mut self, id: &WidgetId) -> Option<Widget> {
        let index = self.widgets.iter().position(|w| &w.id == id)?;
        let removed = self.widgets.remove(index);
        tracing::info!(id = %id, "Deleted widget");
        Some(removed)
    }

    /// Appends a copy offset by one cell on each axis; returns the new id
    pub fn duplicate(&mut self, id: &WidgetId) -> Option<WidgetId> {
        let source = self.get(id)?.clone();
        let new_id = self.fresh_id();
        let copy = Widget::new(
            new_id.clone(),
            format!("{}{}", source.title, COPY_SUFFIX),
            source.kind,
            source.position.offset(1, 1),
            source.size,
        );
        tracing::info!(source = %id, id = %new_id, "Duplicated widget");
        self.widgets.push(copy);
        Some(new_id)
    }

    pub fn create(
        &mut self,
        kind: WidgetKind,
        position: GridPosition,
        size: GridSize,
        title: String,
    ) -> WidgetId {
        let id = self.fresh_id();
        let widget = Widget::new(
            id.clone(),
            title,
            kind,
            position.clamped(),
            self.grid.clamp_size(size),
        );
        tracing::info!(id = %id, kind = ?kind, "Created widget");
        self.widgets.push(widget);
        id
    }
}
