//! Continuous waypoint paths and reconstruction from discrete search output.

#![warn(missing_docs)]

use std::collections::HashMap;

use crate::grid::{Grid, GridCell, WorldPoint};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered, non-empty sequence of waypoints in workspace coordinates.
///
/// Immutable once constructed; the total Euclidean length is computed at
/// construction time.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<WorldPoint>,
    length: f64,
}

impl Path {
    /// Builds a path from a waypoint sequence.
    ///
    /// # Arguments
    /// * `points` - Waypoints in travel order. Must be non-empty; an empty
    ///   sequence is a caller bug and panics in debug builds.
    #[must_use]
    pub fn new(points: Vec<WorldPoint>) -> Self {
        debug_assert!(!points.is_empty(), "a path must have at least one waypoint");
        let length = points
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum();
        Path { points, length }
    }

    /// The waypoints in travel order.
    #[must_use]
    pub fn points(&self) -> &[WorldPoint] {
        &self.points
    }

    /// Sum of Euclidean distances between consecutive waypoints, in meters.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }
}

impl core::fmt::Display for Path {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Path ({} waypoints, {:.2} m)",
            self.points.len(),
            self.length
        )
    }
}

/// Rebuilds the continuous waypoint sequence from the search's predecessor
/// map.
///
/// The discrete chain is recovered by walking predecessors from `goal_cell`
/// back to the start cell (the one cell without a predecessor) and reversing.
/// The continuous path then substitutes the caller's exact `start` and `goal`
/// for the snapped start and goal cells, keeping only the cell centers of the
/// interior chain. This removes the quantization error that snapping to cell
/// centers would otherwise introduce at both endpoints.
pub(crate) fn reconstruct(
    grid: &Grid,
    predecessors: &HashMap<GridCell, GridCell>,
    goal_cell: GridCell,
    start: WorldPoint,
    goal: WorldPoint,
) -> Vec<WorldPoint> {
    let mut chain = vec![goal_cell];
    let mut current = goal_cell;
    while let Some(&prev) = predecessors.get(&current) {
        chain.push(prev);
        current = prev;
    }
    chain.reverse();

    let mut points = Vec::with_capacity(chain.len() + 1);
    points.push(start);
    if chain.len() > 2 {
        for &cell in &chain[1..chain.len() - 1] {
            points.push(grid.grid_to_world(cell));
        }
    }
    points.push(goal);
    points
}
