//! This module defines the error types used by the `kestrel-map` crate.

#![warn(missing_docs)]

/// Error type for map construction and loading.
#[derive(Debug)]
pub enum MapError {
    /// Error reading a map file from disk.
    Io(std::io::Error),
    /// Error parsing a map document.
    Parse(toml::de::Error),
    /// Error for invalid map dimensions.
    /// This variant is returned when map width or height is not positive and finite.
    InvalidDimensions(&'static str),
    /// Error for an invalid safety margin.
    /// This variant is returned when the margin is negative or not finite.
    InvalidMargin(&'static str),
    /// Error for a malformed obstacle.
    /// This variant is returned when an obstacle has non-positive extents,
    /// a non-positive radius, or too few polygon vertices.
    InvalidObstacle(&'static str),
}

impl core::fmt::Display for MapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MapError::Io(err) => write!(f, "Failed to read map file: {}", err),
            MapError::Parse(err) => write!(f, "Failed to parse map document: {}", err),
            MapError::InvalidDimensions(msg) => write!(f, "Invalid map dimensions: {}", msg),
            MapError::InvalidMargin(msg) => write!(f, "Invalid safety margin: {}", msg),
            MapError::InvalidObstacle(msg) => write!(f, "Invalid obstacle: {}", msg),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::Io(err) => Some(err),
            MapError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MapError {
    fn from(err: std::io::Error) -> Self {
        MapError::Io(err)
    }
}

impl From<toml::de::Error> for MapError {
    fn from(err: toml::de::Error) -> Self {
        MapError::Parse(err)
    }
}
