//! Static obstacle shapes and point-containment tests.

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};

use crate::error::MapError;

/// A static obstacle in the workspace.
///
/// The serialized form matches the map documents the authoring tool emits:
/// each obstacle is tagged with a `type` field of `rectangle`, `circle` or
/// `polygon`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Obstacle {
    /// An axis-aligned or rotated rectangle, described by its center.
    Rectangle {
        /// Center x coordinate in meters.
        x: f64,
        /// Center y coordinate in meters.
        y: f64,
        /// Full width in meters.
        width: f64,
        /// Full height in meters.
        height: f64,
        /// Rotation about the center in radians, counter-clockwise.
        #[serde(default)]
        angle: f64,
    },
    /// A circle described by its center and radius.
    Circle {
        /// Center x coordinate in meters.
        x: f64,
        /// Center y coordinate in meters.
        y: f64,
        /// Radius in meters.
        radius: f64,
    },
    /// A simple polygon described by its vertices in order.
    Polygon {
        /// Vertex coordinates as `[x, y]` pairs, in meters.
        vertices: Vec<[f64; 2]>,
    },
}

impl Obstacle {
    /// Returns whether the point lies inside the shape inflated by `margin`.
    ///
    /// The margin grows rectangles and circles uniformly; for polygons a
    /// point within `margin` of the boundary also counts as contained.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64, margin: f64) -> bool {
        match self {
            Obstacle::Rectangle {
                x: cx,
                y: cy,
                width,
                height,
                angle,
            } => {
                // Rotate the query point into the rectangle's local frame.
                let dx = x - cx;
                let dy = y - cy;
                let (sin, cos) = (-angle).sin_cos();
                let local_x = dx * cos - dy * sin;
                let local_y = dx * sin + dy * cos;
                local_x.abs() <= width / 2.0 + margin && local_y.abs() <= height / 2.0 + margin
            }
            Obstacle::Circle { x: cx, y: cy, radius } => {
                let dx = x - cx;
                let dy = y - cy;
                dx * dx + dy * dy <= (radius + margin) * (radius + margin)
            }
            Obstacle::Polygon { vertices } => {
                point_in_polygon(vertices, x, y)
                    || (margin > 0.0 && distance_to_boundary(vertices, x, y) <= margin)
            }
        }
    }

    /// Checks the shape parameters.
    ///
    /// # Returns
    /// * `Result<(), MapError>` - `Ok` for a well-formed shape, or
    ///   `MapError::InvalidObstacle` otherwise.
    pub fn validate(&self) -> Result<(), MapError> {
        match self {
            Obstacle::Rectangle {
                width,
                height,
                angle,
                ..
            } => {
                if !(*width > 0.0 && *height > 0.0) {
                    return Err(MapError::InvalidObstacle(
                        "rectangle extents must be positive",
                    ));
                }
                if !angle.is_finite() {
                    return Err(MapError::InvalidObstacle("rectangle angle must be finite"));
                }
                Ok(())
            }
            Obstacle::Circle { radius, .. } => {
                if !(*radius > 0.0) {
                    return Err(MapError::InvalidObstacle("circle radius must be positive"));
                }
                Ok(())
            }
            Obstacle::Polygon { vertices } => {
                if vertices.len() < 3 {
                    return Err(MapError::InvalidObstacle(
                        "polygon needs at least 3 vertices",
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Even-odd ray crossing test.
fn point_in_polygon(vertices: &[[f64; 2]], x: f64, y: f64) -> bool {
    let mut inside = false;
    let n = vertices.len();
    let mut j = n - 1;
    for i in 0..n {
        let [xi, yi] = vertices[i];
        let [xj, yj] = vertices[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Minimum distance from the point to any polygon edge.
fn distance_to_boundary(vertices: &[[f64; 2]], x: f64, y: f64) -> f64 {
    let n = vertices.len();
    let mut min = f64::INFINITY;
    for i in 0..n {
        let [ax, ay] = vertices[i];
        let [bx, by] = vertices[(i + 1) % n];
        min = min.min(point_segment_distance(x, y, ax, ay, bx, by));
    }
    min
}

fn point_segment_distance(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let (dx, dy) = (bx - ax, by - ay);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > 0.0 {
        (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (cx, cy) = (ax + t * dx, ay + t * dy);
    let (ex, ey) = (px - cx, py - cy);
    (ex * ex + ey * ey).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_rectangle_containment() {
        let rect = Obstacle::Rectangle {
            x: 5.0,
            y: 5.0,
            width: 4.0,
            height: 2.0,
            angle: 0.0,
        };
        assert!(rect.contains(5.0, 5.0, 0.0));
        assert!(rect.contains(6.9, 5.9, 0.0));
        assert!(!rect.contains(7.1, 5.0, 0.0));
        assert!(!rect.contains(5.0, 6.1, 0.0));
        // Margin inflates the half-extents.
        assert!(rect.contains(7.4, 5.0, 0.5));
        assert!(!rect.contains(7.6, 5.0, 0.5));
    }

    #[test]
    fn test_rotated_rectangle_containment() {
        // A 4x2 rectangle rotated 45 degrees about (0, 0).
        let rect = Obstacle::Rectangle {
            x: 0.0,
            y: 0.0,
            width: 4.0,
            height: 2.0,
            angle: FRAC_PI_4,
        };
        // The long axis now points along the (1, 1) diagonal.
        let on_diagonal = 1.9 / 2.0_f64.sqrt();
        assert!(rect.contains(on_diagonal, on_diagonal, 0.0));
        // A point at the same distance along the x-axis falls outside the
        // rotated short extent.
        assert!(!rect.contains(1.9, 0.0, 0.0));
        assert!(rect.contains(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_circle_containment() {
        let circle = Obstacle::Circle {
            x: 3.0,
            y: 4.0,
            radius: 1.0,
        };
        assert!(circle.contains(3.0, 4.0, 0.0));
        assert!(circle.contains(3.9, 4.0, 0.0));
        assert!(!circle.contains(4.1, 4.0, 0.0));
        assert!(circle.contains(4.4, 4.0, 0.5));
        assert!(!circle.contains(4.6, 4.0, 0.5));
    }

    #[test]
    fn test_polygon_containment() {
        let triangle = Obstacle::Polygon {
            vertices: vec![[0.0, 0.0], [4.0, 0.0], [2.0, 4.0]],
        };
        assert!(triangle.contains(2.0, 1.0, 0.0));
        assert!(!triangle.contains(0.0, 3.0, 0.0));
        assert!(!triangle.contains(5.0, 1.0, 0.0));
        // Within margin of an edge but outside the polygon.
        assert!(triangle.contains(2.0, -0.3, 0.5));
        assert!(!triangle.contains(2.0, -0.7, 0.5));
    }

    #[test]
    fn test_validate() {
        assert!(
            Obstacle::Circle {
                x: 0.0,
                y: 0.0,
                radius: 1.0
            }
            .validate()
            .is_ok()
        );
        assert!(matches!(
            Obstacle::Circle {
                x: 0.0,
                y: 0.0,
                radius: 0.0
            }
            .validate(),
            Err(MapError::InvalidObstacle(_))
        ));
        assert!(matches!(
            Obstacle::Rectangle {
                x: 0.0,
                y: 0.0,
                width: -1.0,
                height: 2.0,
                angle: 0.0
            }
            .validate(),
            Err(MapError::InvalidObstacle(_))
        ));
        assert!(matches!(
            Obstacle::Polygon {
                vertices: vec![[0.0, 0.0], [1.0, 1.0]]
            }
            .validate(),
            Err(MapError::InvalidObstacle(_))
        ));
    }

    #[test]
    fn test_obstacle_tagging() {
        let toml_str = r#"
            type = "circle"
            x = 30.0
            y = 30.0
            radius = 8.0
        "#;
        let obstacle: Obstacle = toml::from_str(toml_str).unwrap();
        assert_eq!(
            obstacle,
            Obstacle::Circle {
                x: 30.0,
                y: 30.0,
                radius: 8.0
            }
        );

        // Rectangles default to zero rotation when the angle is omitted.
        let toml_str = r#"
            type = "rectangle"
            x = 60.0
            y = 50.0
            width = 15.0
            height = 30.0
        "#;
        let obstacle: Obstacle = toml::from_str(toml_str).unwrap();
        assert!(matches!(obstacle, Obstacle::Rectangle { angle, .. } if angle == 0.0));
    }
}
