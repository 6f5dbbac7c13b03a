//! Line-of-sight shortcutting of reconstructed paths.

use crate::grid::WorldPoint;
use crate::workspace::Workspace;

/// Spacing, in meters, between collision samples along a candidate shortcut
/// segment. Callers needing a tighter tolerance than one check per 0.2 m
/// must plan at a finer sampling step; this is a sampled approximation, not
/// a continuous collision proof.
pub(crate) const SAMPLE_STEP: f64 = 0.2;

/// Greedy farthest-visible-point reduction.
///
/// From each kept waypoint, candidate targets are scanned from the farthest
/// remaining waypoint back toward the cursor; the first candidate whose
/// connecting segment samples entirely valid is kept and becomes the new
/// cursor. Endpoints are always preserved and the output never has more
/// waypoints than the input.
pub(crate) fn shortcut<W: Workspace>(workspace: &W, points: &[WorldPoint]) -> Vec<WorldPoint> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut smoothed = vec![points[0]];
    let mut cursor = 0;

    while cursor < points.len() - 1 {
        let mut next = cursor + 1;
        for candidate in (cursor + 1..points.len()).rev() {
            if segment_is_valid(workspace, points[cursor], points[candidate]) {
                next = candidate;
                break;
            }
        }
        cursor = next;
        smoothed.push(points[cursor]);
    }

    smoothed
}

/// Samples the straight segment between `a` and `b` at
/// `max(5, floor(distance / SAMPLE_STEP))` evenly spaced parameters in
/// [0, 1] inclusive and tests every sample against the workspace.
fn segment_is_valid<W: Workspace>(workspace: &W, a: WorldPoint, b: WorldPoint) -> bool {
    let samples = (a.distance_to(&b) / SAMPLE_STEP).floor().max(5.0) as usize;
    for i in 0..=samples {
        let t = i as f64 / samples as f64;
        let x = a.x + (b.x - a.x) * t;
        let y = a.y + (b.y - a.y) * t;
        if !workspace.is_valid(x, y) {
            return false;
        }
    }
    true
}
