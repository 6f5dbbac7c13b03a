#![warn(missing_docs)]
#![doc = "2D workspace model for the kestrel planner."]
#![doc = ""]
#![doc = "This crate owns everything the planner treats as external: obstacle"]
#![doc = "shapes with point-containment tests, safety-margin inflation, and"]
#![doc = "the TOML map documents produced by the obstacle-authoring tool. It"]
#![doc = "implements the planner's [`kestrel_planner::Workspace`] trait for"]
#![doc = "[`Map2D`]."]

pub mod error;
pub mod map;
pub mod obstacle;

pub use error::MapError;
pub use map::{Map2D, MapDocument};
pub use obstacle::Obstacle;
