//! The runtime workspace model and TOML map documents.

#![warn(missing_docs)]

use std::path::Path as FsPath;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use kestrel_planner::{WorldPoint, Workspace};

use crate::error::MapError;
use crate::obstacle::Obstacle;

/// Serialized form of a map file.
///
/// Matches the documents the obstacle-authoring tool produces: map extents,
/// a safety margin, suggested start/goal points and an obstacle list, all
/// under a top-level `map` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDocument {
    /// Map width in meters.
    pub width: f64,
    /// Map height in meters.
    pub height: f64,
    /// Safety margin in meters; obstacles are inflated by this amount for
    /// validity queries.
    #[serde(default)]
    pub safety_margin: f64,
    /// Suggested start point as `[x, y]`.
    pub start: [f64; 2],
    /// Suggested goal point as `[x, y]`.
    pub goal: [f64; 2],
    /// The obstacles in the map.
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
}

#[derive(Debug, Serialize, Deserialize)]
struct MapFile {
    map: MapDocument,
}

impl MapDocument {
    /// Parses and validates a map document from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, MapError> {
        let file: MapFile = toml::from_str(text)?;
        file.map.validate()?;
        Ok(file.map)
    }

    /// Reads, parses and validates a map file.
    pub fn load<P: AsRef<FsPath>>(path: P) -> Result<Self, MapError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let doc = Self::from_toml_str(&text)?;
        info!(
            path = %path.as_ref().display(),
            width = doc.width,
            height = doc.height,
            obstacles = doc.obstacles.len(),
            "map loaded"
        );
        Ok(doc)
    }

    /// The suggested start as a [`WorldPoint`].
    #[must_use]
    pub fn start_point(&self) -> WorldPoint {
        WorldPoint::new(self.start[0], self.start[1])
    }

    /// The suggested goal as a [`WorldPoint`].
    #[must_use]
    pub fn goal_point(&self) -> WorldPoint {
        WorldPoint::new(self.goal[0], self.goal[1])
    }

    fn validate(&self) -> Result<(), MapError> {
        if !(self.width > 0.0 && self.height > 0.0)
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(MapError::InvalidDimensions("must be positive and finite"));
        }
        if self.safety_margin < 0.0 || !self.safety_margin.is_finite() {
            return Err(MapError::InvalidMargin("must be non-negative and finite"));
        }
        for obstacle in &self.obstacles {
            obstacle.validate()?;
        }
        Ok(())
    }
}

/// A 2D workspace with static obstacles.
///
/// Point validity is a pure function of the point: a point is valid when it
/// lies inside the map bounds shrunk by the safety margin at the outer
/// border, and outside every obstacle inflated by that margin. The map holds
/// no interior mutability, so it can be shared freely with in-flight
/// planning calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Map2D {
    width: f64,
    height: f64,
    safety_margin: f64,
    obstacles: Vec<Obstacle>,
}

impl Map2D {
    /// Creates an empty map.
    ///
    /// # Arguments
    /// * `width` - Map width in meters.
    /// * `height` - Map height in meters.
    /// * `safety_margin` - Obstacle inflation in meters, non-negative.
    pub fn new(width: f64, height: f64, safety_margin: f64) -> Result<Self, MapError> {
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(MapError::InvalidDimensions("must be positive and finite"));
        }
        if safety_margin < 0.0 || !safety_margin.is_finite() {
            return Err(MapError::InvalidMargin("must be non-negative and finite"));
        }
        Ok(Map2D {
            width,
            height,
            safety_margin,
            obstacles: Vec::new(),
        })
    }

    /// Builds a map from a validated document.
    pub fn from_document(doc: &MapDocument) -> Result<Self, MapError> {
        let mut map = Map2D::new(doc.width, doc.height, doc.safety_margin)?;
        for obstacle in &doc.obstacles {
            map.add_obstacle(obstacle.clone())?;
        }
        Ok(map)
    }

    /// Adds an obstacle after validating its shape parameters.
    pub fn add_obstacle(&mut self, obstacle: Obstacle) -> Result<(), MapError> {
        obstacle.validate()?;
        debug!(?obstacle, "obstacle added");
        self.obstacles.push(obstacle);
        Ok(())
    }

    /// Map width in meters.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Map height in meters.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Obstacle inflation in meters.
    #[must_use]
    pub fn safety_margin(&self) -> f64 {
        self.safety_margin
    }

    /// The obstacles in the map.
    #[must_use]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Returns whether the point is inside the map bounds, at least the
    /// safety margin away from the outer border, and clear of every inflated
    /// obstacle.
    #[must_use]
    pub fn is_valid(&self, x: f64, y: f64) -> bool {
        let m = self.safety_margin;
        if x < m || x > self.width - m || y < m || y > self.height - m {
            return false;
        }
        !self
            .obstacles
            .iter()
            .any(|obstacle| obstacle.contains(x, y, self.safety_margin))
    }
}

impl Workspace for Map2D {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn is_valid(&self, x: f64, y: f64) -> bool {
        Map2D::is_valid(self, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO_MAP: &str = r#"
        [map]
        width = 100.0
        height = 100.0
        safety_margin = 1.0
        start = [10.0, 10.0]
        goal = [90.0, 90.0]

        [[map.obstacles]]
        type = "circle"
        x = 30.0
        y = 30.0
        radius = 8.0

        [[map.obstacles]]
        type = "rectangle"
        x = 60.0
        y = 50.0
        width = 15.0
        height = 30.0
        angle = 0.0

        [[map.obstacles]]
        type = "polygon"
        vertices = [[70.0, 70.0], [80.0, 70.0], [75.0, 80.0]]
    "#;

    #[test]
    fn test_document_parsing() {
        let doc = MapDocument::from_toml_str(DEMO_MAP).unwrap();
        assert_eq!(doc.width, 100.0);
        assert_eq!(doc.height, 100.0);
        assert_eq!(doc.safety_margin, 1.0);
        assert_eq!(doc.obstacles.len(), 3);
        assert_eq!(doc.start_point(), WorldPoint::new(10.0, 10.0));
        assert_eq!(doc.goal_point(), WorldPoint::new(90.0, 90.0));
    }

    #[test]
    fn test_document_validation() {
        let bad_dims = r#"
            [map]
            width = 0.0
            height = 100.0
            start = [1.0, 1.0]
            goal = [2.0, 2.0]
        "#;
        assert!(matches!(
            MapDocument::from_toml_str(bad_dims),
            Err(MapError::InvalidDimensions(_))
        ));

        let bad_margin = r#"
            [map]
            width = 100.0
            height = 100.0
            safety_margin = -1.0
            start = [1.0, 1.0]
            goal = [2.0, 2.0]
        "#;
        assert!(matches!(
            MapDocument::from_toml_str(bad_margin),
            Err(MapError::InvalidMargin(_))
        ));

        let bad_obstacle = r#"
            [map]
            width = 100.0
            height = 100.0
            start = [1.0, 1.0]
            goal = [2.0, 2.0]

            [[map.obstacles]]
            type = "circle"
            x = 5.0
            y = 5.0
            radius = -2.0
        "#;
        assert!(matches!(
            MapDocument::from_toml_str(bad_obstacle),
            Err(MapError::InvalidObstacle(_))
        ));

        assert!(matches!(
            MapDocument::from_toml_str("not a map"),
            Err(MapError::Parse(_))
        ));
    }

    #[test]
    fn test_document_round_trip() {
        let doc = MapDocument::from_toml_str(DEMO_MAP).unwrap();
        let text = toml::to_string(&MapFile { map: doc.clone() }).unwrap();
        let reparsed = MapDocument::from_toml_str(&text).unwrap();
        assert_eq!(doc, reparsed);
    }

    #[test]
    fn test_is_valid_bounds_and_obstacles() {
        let doc = MapDocument::from_toml_str(DEMO_MAP).unwrap();
        let map = Map2D::from_document(&doc).unwrap();

        assert!(map.is_valid(10.0, 10.0));
        assert!(!map.is_valid(-0.1, 50.0));
        assert!(!map.is_valid(50.0, 100.1));
        // Inside the circle, and inside its inflation ring.
        assert!(!map.is_valid(30.0, 30.0));
        assert!(!map.is_valid(38.5, 30.0));
        assert!(map.is_valid(39.5, 30.0));
        // Inside the rectangle.
        assert!(!map.is_valid(60.0, 50.0));
        // Inside the polygon.
        assert!(!map.is_valid(75.0, 72.0));
    }

    #[test]
    fn test_border_margin_shrinks_bounds() {
        let doc = MapDocument::from_toml_str(DEMO_MAP).unwrap();
        let map = Map2D::from_document(&doc).unwrap();

        // safety_margin = 1.0: points closer than the margin to the outer
        // border are invalid even with no obstacle nearby.
        assert!(!map.is_valid(0.5, 50.0));
        assert!(!map.is_valid(99.5, 50.0));
        assert!(!map.is_valid(50.0, 0.5));
        assert!(!map.is_valid(50.0, 99.5));
        // Exactly on the shrunk border and just inside it are fine.
        assert!(map.is_valid(1.0, 50.0));
        assert!(map.is_valid(98.9, 50.0));
    }

    #[test]
    fn test_empty_map_is_all_valid() {
        let map = Map2D::new(10.0, 10.0, 0.0).unwrap();
        assert!(map.is_valid(0.0, 0.0));
        assert!(map.is_valid(10.0, 10.0));
        assert!(map.is_valid(5.0, 5.0));
        assert!(!map.is_valid(10.1, 5.0));
    }

    #[test]
    fn test_invalid_construction() {
        assert!(matches!(
            Map2D::new(0.0, 10.0, 0.0),
            Err(MapError::InvalidDimensions(_))
        ));
        assert!(matches!(
            Map2D::new(10.0, 10.0, -0.5),
            Err(MapError::InvalidMargin(_))
        ));
        let mut map = Map2D::new(10.0, 10.0, 0.0).unwrap();
        assert!(matches!(
            map.add_obstacle(Obstacle::Circle {
                x: 5.0,
                y: 5.0,
                radius: 0.0
            }),
            Err(MapError::InvalidObstacle(_))
        ));
        assert!(map.obstacles().is_empty());
    }
}
