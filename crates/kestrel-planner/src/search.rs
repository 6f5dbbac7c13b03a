/*

Weighted A* over the discretized grid.

    f(n) = g(n) + w * h(n)

Where:
    g(n) = cost of the best known chain from the start cell to n
    h(n) = Euclidean index distance to the goal cell, scaled by resolution
    w    = heuristic weight; w = 1 keeps h admissible (shortest grid path
           guaranteed), w > 1 trades optimality for speed

The frontier is ordered by (f, insertion sequence). The sequence number is a
monotonically increasing counter assigned at push time so entries with equal
f are totally ordered and the pop order never depends on incidental heap
layout. Stale frontier entries are allowed to coexist; the closed-set check
at pop time makes them harmless.

*/

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::grid::{Grid, GridCell};
use crate::workspace::Workspace;

/// How a search run ended.
#[derive(Debug)]
pub(crate) enum SearchOutcome {
    /// The goal cell was popped; `predecessors` encodes the discrete chain.
    Found {
        predecessors: HashMap<GridCell, GridCell>,
        expansions: usize,
    },
    /// The frontier emptied before reaching the goal.
    Exhausted { expansions: usize },
    /// The expansion count hit the configured cap.
    CapReached { expansions: usize },
}

#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    f: f64,
    seq: u64,
    cell: GridCell,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

// The priority queue depends on `Ord`. Comparisons are flipped so the
// max-heap becomes a min-heap on (f, seq). `f` is finite for any validated
// configuration, so the partial comparison cannot fail in practice.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .partial_cmp(&self.f)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn index_distance(a: GridCell, b: GridCell) -> f64 {
    let dc = (b.col - a.col) as f64;
    let dr = (b.row - a.row) as f64;
    (dc * dc + dr * dr).sqrt()
}

// The 8 Moore-neighborhood offsets, zero offset excluded.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Runs a weighted A* search from `start` to `goal` over `grid`.
///
/// All search state is local to this call; nothing is shared across
/// invocations. Both endpoints are assumed to have been validated against the
/// workspace already.
pub(crate) fn search<W: Workspace>(
    workspace: &W,
    grid: &Grid,
    start: GridCell,
    goal: GridCell,
    heuristic_weight: f64,
    max_iterations: usize,
) -> SearchOutcome {
    let resolution = grid.resolution();

    let mut frontier = BinaryHeap::new();
    let mut g_score: HashMap<GridCell, f64> = HashMap::new();
    let mut predecessors: HashMap<GridCell, GridCell> = HashMap::new();
    let mut closed: HashSet<GridCell> = HashSet::new();
    let mut seq: u64 = 0;
    let mut expansions: usize = 0;

    g_score.insert(start, 0.0);
    frontier.push(FrontierEntry {
        f: heuristic_weight * index_distance(start, goal) * resolution,
        seq,
        cell: start,
    });
    seq += 1;

    while let Some(entry) = frontier.pop() {
        let current = entry.cell;
        if current == goal {
            return SearchOutcome::Found {
                predecessors,
                expansions,
            };
        }
        if closed.contains(&current) {
            // Stale entry superseded by an earlier relaxation.
            continue;
        }
        if expansions >= max_iterations {
            return SearchOutcome::CapReached { expansions };
        }
        closed.insert(current);
        expansions += 1;

        // The start cell is seeded above and every other cell is assigned g
        // when it is relaxed, so a missing entry here is an internal defect.
        let current_g = g_score[&current];

        for (dc, dr) in NEIGHBOR_OFFSETS {
            let neighbor = GridCell::new(current.col + dc, current.row + dr);
            if !grid.contains(neighbor) || closed.contains(&neighbor) {
                continue;
            }
            let center = grid.grid_to_world(neighbor);
            if !workspace.is_valid(center.x, center.y) {
                continue;
            }

            let tentative_g = current_g + index_distance(current, neighbor) * resolution;
            if tentative_g < *g_score.get(&neighbor).unwrap_or(&f64::INFINITY) {
                predecessors.insert(neighbor, current);
                g_score.insert(neighbor, tentative_g);
                let h = index_distance(neighbor, goal) * resolution;
                frontier.push(FrontierEntry {
                    f: tentative_g + heuristic_weight * h,
                    seq,
                    cell: neighbor,
                });
                seq += 1;
            }
        }
    }

    SearchOutcome::Exhausted { expansions }
}
