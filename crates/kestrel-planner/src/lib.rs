#![warn(missing_docs)]
#![doc = "Grid-based motion planning for continuous 2D workspaces."]
#![doc = ""]
#![doc = "The pipeline: discretize the workspace into a search grid, run a"]
#![doc = "weighted A* search with deterministic tie-breaking, reconstruct a"]
#![doc = "continuous waypoint path with the caller's exact endpoints, and"]
#![doc = "shorten it with visibility-based shortcutting. The collision model"]
#![doc = "is consumed through the [`Workspace`] trait and never implemented"]
#![doc = "here."]

pub mod error;
pub mod grid;
pub mod path;
pub mod planner;
pub mod workspace;

mod search;
mod smooth;

pub use error::PlannerError;
pub use grid::{Grid, GridCell, WorldPoint};
pub use path::Path;
pub use planner::{AStarPlanner, NoPathReason, PlanOutcome, PlanReport, PlannerConfig};
pub use workspace::Workspace;
