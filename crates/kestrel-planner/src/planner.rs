//! The planning entry point: endpoint validation, search, reconstruction,
//! smoothing, and structured outcomes.

#![warn(missing_docs)]

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::PlannerError;
use crate::grid::{Grid, WorldPoint};
use crate::path::{self, Path};
use crate::search::{self, SearchOutcome};
use crate::smooth;
use crate::workspace::Workspace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunable parameters for [`AStarPlanner`].
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(default)
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Search grid cell edge length in meters.
    pub grid_resolution: f64,
    /// Upper bound on cell expansions per planning call. Bounds time and
    /// memory on unreachable goals and pathological maps.
    pub max_iterations: usize,
    /// Heuristic multiplier. 1.0 keeps the heuristic admissible and the grid
    /// path optimal; values above 1.0 trade path optimality for speed.
    pub heuristic_weight: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            grid_resolution: 0.5,
            max_iterations: 100_000,
            heuristic_weight: 1.0,
        }
    }
}

/// Why a planning call produced no path.
///
/// None of these are process errors; they are expected outcomes reported as
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoPathReason {
    /// The start point failed the workspace validity check. No search was
    /// attempted.
    InvalidStart,
    /// The goal point failed the workspace validity check. No search was
    /// attempted.
    InvalidGoal,
    /// The frontier emptied before reaching the goal; the goal region is
    /// disconnected from the start.
    Exhausted {
        /// Cell expansions performed before the frontier emptied.
        expansions: usize,
    },
    /// The expansion cap was hit. The caller may retry with a larger cap or
    /// a coarser resolution.
    IterationCapReached {
        /// Cell expansions performed, equal to the configured cap.
        expansions: usize,
    },
}

impl core::fmt::Display for NoPathReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NoPathReason::InvalidStart => write!(f, "start position is invalid"),
            NoPathReason::InvalidGoal => write!(f, "goal position is invalid"),
            NoPathReason::Exhausted { expansions } => {
                write!(f, "search exhausted after {} expansions", expansions)
            }
            NoPathReason::IterationCapReached { expansions } => {
                write!(f, "iteration cap reached after {} expansions", expansions)
            }
        }
    }
}

/// Result of a successful planning call.
///
/// Diagnostics live here rather than on the planner so concurrent calls on
/// one planner never share mutable state.
#[derive(Debug, Clone)]
pub struct PlanReport {
    /// The smoothed path from the exact start to the exact goal.
    pub path: Path,
    /// Cell expansions performed by the search.
    pub expansions: usize,
    /// Wall-clock duration of the whole call.
    pub elapsed: Duration,
}

/// Outcome of one planning call.
#[derive(Debug, Clone)]
pub enum PlanOutcome {
    /// A collision-free path was found.
    Found(PlanReport),
    /// No path; the reason distinguishes invalid endpoints, exhaustion and
    /// the iteration cap.
    NoPath(NoPathReason),
}

impl PlanOutcome {
    /// The path, if one was found.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            PlanOutcome::Found(report) => Some(&report.path),
            PlanOutcome::NoPath(_) => None,
        }
    }

    /// Returns whether a path was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, PlanOutcome::Found(_))
    }
}

/// Weighted A* grid planner over a [`Workspace`].
///
/// The planner itself holds only immutable configuration; all per-call state
/// (frontier, score maps, closed set) is allocated fresh inside
/// [`AStarPlanner::plan`], so a single planner may serve concurrent calls.
/// Each call is fully synchronous and blocking.
#[derive(Debug)]
pub struct AStarPlanner<W> {
    workspace: W,
    grid: Grid,
    config: PlannerConfig,
}

impl<W: Workspace> AStarPlanner<W> {
    /// Creates a planner over a workspace.
    ///
    /// # Arguments
    /// * `workspace` - The collision model to plan against. A borrow works
    ///   too, since `&W` implements [`Workspace`].
    /// * `config` - Grid resolution, iteration cap and heuristic weight; all
    ///   validated here.
    ///
    /// # Returns
    /// * `Result<Self, PlannerError>` - The planner, or an error if the
    ///   configuration or workspace extents are invalid.
    pub fn new(workspace: W, config: PlannerConfig) -> Result<Self, PlannerError> {
        if config.max_iterations == 0 {
            return Err(PlannerError::InvalidIterationCap("must be positive"));
        }
        if !(config.heuristic_weight > 0.0) || !config.heuristic_weight.is_finite() {
            return Err(PlannerError::InvalidHeuristicWeight(
                "must be positive and finite",
            ));
        }
        let grid = Grid::new(
            workspace.width(),
            workspace.height(),
            config.grid_resolution,
        )?;
        debug!(
            cols = grid.cols(),
            rows = grid.rows(),
            resolution = grid.resolution(),
            "planner grid sized"
        );
        Ok(AStarPlanner {
            workspace,
            grid,
            config,
        })
    }

    /// The search grid derived from the workspace extents.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The configuration the planner was built with.
    #[must_use]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans a collision-free path from `start` to `goal`.
    ///
    /// Both endpoints are validated against the workspace before any search
    /// work; the search then runs over cell centers, the discrete chain is
    /// reconstructed with the exact endpoints substituted, and the result is
    /// shortened by line-of-sight shortcutting.
    pub fn plan(&self, start: WorldPoint, goal: WorldPoint) -> PlanOutcome {
        let started = Instant::now();

        if !self.workspace.is_valid(start.x, start.y) {
            warn!(%start, "start position is invalid");
            return PlanOutcome::NoPath(NoPathReason::InvalidStart);
        }
        if !self.workspace.is_valid(goal.x, goal.y) {
            warn!(%goal, "goal position is invalid");
            return PlanOutcome::NoPath(NoPathReason::InvalidGoal);
        }

        let start_cell = self.grid.world_to_grid(start);
        let goal_cell = self.grid.world_to_grid(goal);

        match search::search(
            &self.workspace,
            &self.grid,
            start_cell,
            goal_cell,
            self.config.heuristic_weight,
            self.config.max_iterations,
        ) {
            SearchOutcome::Found {
                predecessors,
                expansions,
            } => {
                let raw = path::reconstruct(&self.grid, &predecessors, goal_cell, start, goal);
                let smoothed = smooth::shortcut(&self.workspace, &raw);
                let path = Path::new(smoothed);
                let elapsed = started.elapsed();
                info!(
                    length_m = path.length(),
                    waypoints = path.points().len(),
                    expansions,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "path found"
                );
                PlanOutcome::Found(PlanReport {
                    path,
                    expansions,
                    elapsed,
                })
            }
            SearchOutcome::Exhausted { expansions } => {
                info!(expansions, "no path: search exhausted");
                PlanOutcome::NoPath(NoPathReason::Exhausted { expansions })
            }
            SearchOutcome::CapReached { expansions } => {
                info!(expansions, "no path: iteration cap reached");
                PlanOutcome::NoPath(NoPathReason::IterationCapReached { expansions })
            }
        }
    }
}
