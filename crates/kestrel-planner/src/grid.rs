//! Discretization of a continuous 2D workspace into a search grid.

#![warn(missing_docs)]

use crate::error::PlannerError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in continuous workspace coordinates (meters).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WorldPoint {
    /// The x-coordinate in meters.
    pub x: f64,
    /// The y-coordinate in meters.
    pub y: f64,
}

impl WorldPoint {
    /// Creates a new `WorldPoint`.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point, in meters.
    #[must_use]
    pub fn distance_to(&self, other: &WorldPoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl core::fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// A discrete cell address (column, row) in the search grid.
///
/// Cells are search bookkeeping only: converting a cell back to world
/// coordinates yields the cell's *center*, not the point it was derived
/// from, so the conversion is quantization-lossy by design.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// The column index.
    pub col: i32,
    /// The row index.
    pub row: i32,
}

impl GridCell {
    /// Creates a new `GridCell`.
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// A search grid at a fixed resolution covering a rectangular workspace.
///
/// Grid dimensions are `ceil(width / resolution)` by
/// `ceil(height / resolution)` so the last partial row and column are still
/// addressable and the full workspace is covered.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    resolution: f64,
    cols: i32,
    rows: i32,
}

impl Grid {
    /// Creates a grid covering a `width` x `height` workspace.
    ///
    /// # Arguments
    /// * `width` - Workspace width in meters.
    /// * `height` - Workspace height in meters.
    /// * `resolution` - Cell edge length in meters.
    ///
    /// # Returns
    /// * `Result<Self, PlannerError>` - The grid, or an error if any parameter
    ///   is not positive and finite.
    pub fn new(width: f64, height: f64, resolution: f64) -> Result<Self, PlannerError> {
        if !(resolution > 0.0) || !resolution.is_finite() {
            return Err(PlannerError::InvalidResolution(
                "must be positive and finite",
            ));
        }
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(PlannerError::InvalidDimensions(
                "must be positive and finite",
            ));
        }

        Ok(Grid {
            resolution,
            cols: (width / resolution).ceil() as i32,
            rows: (height / resolution).ceil() as i32,
        })
    }

    /// Cell edge length in meters.
    #[must_use]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Converts world coordinates to the cell containing them.
    ///
    /// Used for indexing only; positions handed back to callers always come
    /// from [`Grid::grid_to_world`].
    #[must_use]
    pub fn world_to_grid(&self, p: WorldPoint) -> GridCell {
        GridCell::new(
            (p.x / self.resolution).floor() as i32,
            (p.y / self.resolution).floor() as i32,
        )
    }

    /// Converts a cell to the world coordinates of its center.
    #[must_use]
    pub fn grid_to_world(&self, cell: GridCell) -> WorldPoint {
        WorldPoint::new(
            (cell.col as f64 + 0.5) * self.resolution,
            (cell.row as f64 + 0.5) * self.resolution,
        )
    }

    /// Returns whether a cell lies inside the grid bounds.
    #[must_use]
    pub fn contains(&self, cell: GridCell) -> bool {
        cell.col >= 0 && cell.col < self.cols && cell.row >= 0 && cell.row < self.rows
    }
}
