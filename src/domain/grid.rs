// Grid coordinate domain model
use serde::{Deserialize, Serialize};

/// One axis coordinate or dimension expressed in grid cells
pub type GridUnit = i32;

pub const DEFAULT_CELL_SIZE: i32 = 40;
pub const DEFAULT_MIN_SIZE: GridSize = GridSize { width: 8, height: 6 };
pub const DEFAULT_MAX_SIZE: GridSize = GridSize { width: 20, height: 15 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: GridUnit,
    pub y: GridUnit,
}

impl GridPosition {
    pub fn new(x: GridUnit, y: GridUnit) -> Self {
        Self { x, y }
    }

    /// Clamp both axes to the non-negative quadrant (the surface has no upper bound)
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.max(0),
            y: self.y.max(0),
        }
    }

    pub fn offset(self, dx: GridUnit, dy: GridUnit) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy)).clamped()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: GridUnit,
    pub height: GridUnit,
}

impl GridSize {
    pub fn new(width: GridUnit, height: GridUnit) -> Self {
        Self { width, height }
    }
}

/// Raw pointer coordinates in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn delta_from(self, origin: PixelPoint) -> PixelPoint {
        PixelPoint::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Pixel rectangle derived from a grid placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PixelRect {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

/// Grid geometry: cell size plus the inclusive widget size bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    cell_size: i32,
    min_size: GridSize,
    max_size: GridSize,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl GridSpec {
    /// Returns `None` for a non-positive cell size or inverted bounds
    pub fn new(cell_size: i32, min_size: GridSize, max_size: GridSize) -> Option<Self> {
        let valid = cell_size > 0
            && min_size.width <= max_size.width
            && min_size.height <= max_size.height;
        valid.then_some(Self {
            cell_size,
            min_size,
            max_size,
        })
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn min_size(&self) -> GridSize {
        self.min_size
    }

    pub fn max_size(&self) -> GridSize {
        self.max_size
    }

    pub fn to_pixels(&self, units: GridUnit) -> i64 {
        i64::from(units) * i64::from(self.cell_size)
    }

    /// Halves round toward positive infinity, matching the browser's `Math.round`.
    /// Infinite deltas saturate; NaN maps to zero.
    pub fn to_grid_units(&self, pixels: f64) -> GridUnit {
        if pixels.is_nan() {
            return 0;
        }
        let units = (pixels / f64::from(self.cell_size) + 0.5).floor();
        units.clamp(f64::from(GridUnit::MIN), f64::from(GridUnit::MAX)) as GridUnit
    }

    pub fn clamp_size(&self, size: GridSize) -> GridSize {
        GridSize {
            width: size.width.clamp(self.min_size.width, self.max_size.width),
            height: size.height.clamp(self.min_size.height, self.max_size.height),
        }
    }

    pub fn to_rect(&self, position: GridPosition, size: GridSize) -> PixelRect {
        PixelRect {
            left: self.to_pixels(position.x),
            top: self.to_pixels(position.y),
            width: self.to_pixels(size.width),
            height: self.to_pixels(size.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_round_trip_is_exact() {
        let grid = GridSpec::default();
        for units in 0..=2_000 {
            assert_eq!(grid.to_grid_units(grid.to_pixels(units) as f64), units);
        }

        let coarse = GridSpec::new(7, DEFAULT_MIN_SIZE, DEFAULT_MAX_SIZE).unwrap();
        for units in [0, 1, 13, 999, 100_000] {
            assert_eq!(coarse.to_grid_units(coarse.to_pixels(units) as f64), units);
        }
    }

    #[test]
    fn test_to_grid_units_rounds_half_up() {
        let grid = GridSpec::default();
        assert_eq!(grid.to_grid_units(85.0), 2);
        assert_eq!(grid.to_grid_units(-42.0), -1);
        assert_eq!(grid.to_grid_units(20.0), 1);
        assert_eq!(grid.to_grid_units(-20.0), 0);
        assert_eq!(grid.to_grid_units(19.9), 0);
        assert_eq!(grid.to_grid_units(f64::NAN), 0);
    }

    #[test]
    fn test_to_grid_units_saturates_on_overflowing_delta() {
        let grid = GridSpec::default();
        let far = PixelPoint::new(1.7e308, -1.7e308);
        let delta = far.delta_from(PixelPoint::new(-1.7e308, 1.7e308));
        assert_eq!(grid.to_grid_units(delta.x), GridUnit::MAX);
        assert_eq!(grid.to_grid_units(delta.y), GridUnit::MIN);
        assert_eq!(grid.to_grid_units(1e300), GridUnit::MAX);
    }

    #[test]
    fn test_clamp_size_is_inclusive() {
        let grid = GridSpec::default();
        assert_eq!(grid.clamp_size(GridSize::new(8, 6)), GridSize::new(8, 6));
        assert_eq!(grid.clamp_size(GridSize::new(20, 15)), GridSize::new(20, 15));
        assert_eq!(grid.clamp_size(GridSize::new(-3, 100)), GridSize::new(8, 15));
    }

    #[test]
    fn test_invalid_grid_bounds_rejected() {
        assert!(GridSpec::new(0, DEFAULT_MIN_SIZE, DEFAULT_MAX_SIZE).is_none());
        assert!(GridSpec::new(40, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE).is_none());
    }

    #[test]
    fn test_position_offset_never_negative() {
        assert_eq!(GridPosition::new(0, 2).offset(-5, 1), GridPosition::new(0, 3));
    }

    proptest! {
        #[test]
        fn grid_units_round_trip_through_pixels(
            units in 0..=GridUnit::MAX,
            cell in 1i32..=1_000,
        ) {
            let grid = GridSpec::new(cell, DEFAULT_MIN_SIZE, DEFAULT_MAX_SIZE).unwrap();
            prop_assert_eq!(grid.to_grid_units(grid.to_pixels(units) as f64), units);
        }
    }
}
