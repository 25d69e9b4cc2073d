//! Fog-of-war visibility computation.
//!
//! This module computes the set of cells an observer can perceive as a bounded-radius
//! reachability flood through open walls. Visibility is graph-distance-limited, not geometric:
//! a cell behind a wall stays hidden even when it lies within straight-line radius.

use std::collections::{BTreeSet, VecDeque};

use crate::grid::{Direction, Grid, Position};

/// Computes the set of cells visible from an observer position.
///
/// This function floods outward from `observer` with a breadth-first search that only crosses
/// missing walls, tracking the integer traversal distance of every visited cell. A cell joins the
/// visibility set as soon as it is dequeued, and expansion from a cell stops once its distance
/// equals `radius`, so a radius of zero reveals exactly the observer's own cell. Each cell is
/// enqueued at most once.
///
/// The set is a full per-call derivation: callers recompute it whenever the observer moves or the
/// radius changes, and nothing is persisted between calls. An observer position outside the grid
/// yields an empty set. When fog is disabled entirely the engine is bypassed by the session layer
/// and the whole grid counts as visible.
pub fn compute_visible(grid: &Grid, observer: Position, radius: usize) -> BTreeSet<Position> {
    let mut visible = BTreeSet::new();
    let Some(observer_slot) = grid.offset(observer) else {
        return visible;
    };

    let mut seen = vec![false; grid.cell_count()];
    let mut queue = VecDeque::new();

    if let Some(flag) = seen.get_mut(observer_slot) {
        *flag = true;
    }
    queue.push_back((observer, 0_usize));

    while let Some((current, distance)) = queue.pop_front() {
        let _ = visible.insert(current);

        if distance >= radius {
            continue;
        }

        for direction in Direction::ALL {
            if grid.has_wall(current, direction) {
                continue;
            }
            let Some(next) = grid.neighbor(current, direction) else {
                continue;
            };
            let Some(slot) = grid.offset(next) else {
                continue;
            };
            if seen.get(slot).copied().unwrap_or(true) {
                continue;
            }

            if let Some(flag) = seen.get_mut(slot) {
                *flag = true;
            }
            queue.push_back((next, distance + 1));
        }
    }

    visible
}
