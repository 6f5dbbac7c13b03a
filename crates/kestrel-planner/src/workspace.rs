//! The query interface the planner requires from a collision model.

#![warn(missing_docs)]

/// Read-only view of a 2D workspace with static obstacles.
///
/// The planner never inspects obstacle shapes; it only asks whether single
/// points are free. Obstacle geometry, safety margins and inflation are
/// entirely the implementor's concern. `is_valid` must be a pure function of
/// the point: the workspace must not change while a planning call is in
/// flight.
pub trait Workspace {
    /// Workspace width in meters.
    fn width(&self) -> f64;

    /// Workspace height in meters.
    fn height(&self) -> f64;

    /// Returns whether the point is inside the workspace and collision-free.
    fn is_valid(&self, x: f64, y: f64) -> bool;
}

impl<W: Workspace + ?Sized> Workspace for &W {
    fn width(&self) -> f64 {
        (**self).width()
    }

    fn height(&self) -> f64 {
        (**self).height()
    }

    fn is_valid(&self, x: f64, y: f64) -> bool {
        (**self).is_valid(x, y)
    }
}
