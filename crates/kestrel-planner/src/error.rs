//! This module defines the error types used by the `kestrel-planner` crate.

#![warn(missing_docs)]

/// Error type for planner construction.
///
/// These errors cover invalid configuration only. A failed planning query is
/// not an error; it is reported through
/// [`NoPathReason`](crate::planner::NoPathReason).
#[derive(Debug, PartialEq)]
pub enum PlannerError {
    /// Error for an invalid grid resolution.
    /// This variant is returned when the configured resolution is not positive and finite.
    InvalidResolution(&'static str),
    /// Error for invalid workspace dimensions.
    /// This variant is returned when the workspace width or height is not positive and finite.
    InvalidDimensions(&'static str),
    /// Error for an invalid iteration cap.
    /// This variant is returned when the configured expansion limit is zero.
    InvalidIterationCap(&'static str),
    /// Error for an invalid heuristic weight.
    /// This variant is returned when the configured weight is not positive and finite.
    InvalidHeuristicWeight(&'static str),
}

impl core::fmt::Display for PlannerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlannerError::InvalidResolution(msg) => write!(f, "Invalid grid resolution: {}", msg),
            PlannerError::InvalidDimensions(msg) => {
                write!(f, "Invalid workspace dimensions: {}", msg)
            }
            PlannerError::InvalidIterationCap(msg) => write!(f, "Invalid iteration cap: {}", msg),
            PlannerError::InvalidHeuristicWeight(msg) => {
                write!(f, "Invalid heuristic weight: {}", msg)
            }
        }
    }
}

impl core::error::Error for PlannerError {}
