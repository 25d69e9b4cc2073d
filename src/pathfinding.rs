//! Shortest-path search and solution reveal sequencing.
//!
//! This module contains the breadth-first shortest-path search over the wall-respecting adjacency
//! graph of a grid, together with the step sequence used to reveal a solution one cell at a time
//! without the core ever performing timing itself.

use std::collections::VecDeque;

use crate::grid::{Direction, Grid, Position};

/// Ordered sequence of positions from a start cell to an end cell.
///
/// Consecutive positions are adjacent grid cells with no wall between them. The length counts
/// positions inclusive of both endpoints, so a path from a cell to itself has length one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Path {
    /// Positions of the path in traversal order.
    positions: Vec<Position>,
}

impl Path {
    /// Wraps an already-validated position sequence.
    pub(crate) const fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    /// Returns the number of positions, counting both endpoints.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Reports whether the path holds no positions at all.
    ///
    /// A path produced by the search is never empty; this accessor exists for completeness of the
    /// container-like interface.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the first position of the path.
    pub fn first(&self) -> Option<Position> {
        self.positions.first().copied()
    }

    /// Returns the last position of the path.
    pub fn last(&self) -> Option<Position> {
        self.positions.last().copied()
    }

    /// Returns the position at the given step index.
    pub fn get(&self, index: usize) -> Option<Position> {
        self.positions.get(index).copied()
    }

    /// Returns the positions of the path in traversal order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }
}

/// Finds the shortest path between two positions of a grid.
///
/// This function performs a breadth-first search from `from` over the wall-respecting adjacency
/// graph, recording a predecessor for each newly discovered cell and stopping early once `to` is
/// dequeued. The path is reconstructed by walking predecessors back from `to` and reversing. Each
/// cell is enqueued at most once, so the search takes time and space linear in the cell count.
///
/// Returns `None` when either endpoint lies outside the grid or when `to` is unreachable from
/// `from`. Unreachability cannot occur between in-bounds cells of a freshly generated perfect
/// maze, but it is reported as a normal no-result outcome rather than a fault. Equal endpoints
/// yield a valid single-element path.
pub fn find_path(grid: &Grid, from: Position, to: Position) -> Option<Path> {
    let from_slot = grid.offset(from)?;
    let to_slot = grid.offset(to)?;

    let mut seen = vec![false; grid.cell_count()];
    let mut predecessor: Vec<Option<Position>> = vec![None; grid.cell_count()];
    let mut queue = VecDeque::new();

    if let Some(flag) = seen.get_mut(from_slot) {
        *flag = true;
    }
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            break;
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
            if let Some(entry) = predecessor.get_mut(slot) {
                *entry = Some(current);
            }
            queue.push_back(next);
        }
    }

    // An undiscovered endpoint has no predecessor; only the degenerate from == to case is a
    // legitimate single-element path.
    if predecessor.get(to_slot)?.is_none() && from != to {
        return None;
    }

    let mut positions = vec![to];
    let mut cursor = predecessor.get(to_slot).copied().flatten();
    while let Some(step) = cursor {
        positions.push(step);
        cursor = grid
            .offset(step)
            .and_then(|slot| predecessor.get(slot).copied())
            .flatten();
    }
    positions.reverse();

    Some(Path::new(positions))
}

/// Stepwise reveal of a solution path.
///
/// This structure turns a [`Path`] into an explicit ordered sequence of highlight steps, one per
/// path cell, produced up front. The presentation layer paces the steps in time by calling
/// [`SolutionReveal::advance`]; the core never schedules delays itself. A reveal is cancelled by
/// replacement: dropping it, or building a new one, discards any steps not yet taken.
#[derive(Clone, Debug)]
pub struct SolutionReveal {
    /// Highlight steps in path order.
    steps: Vec<Position>,
    /// Index of the next step to take.
    cursor: usize,
}

impl SolutionReveal {
    /// Builds the full step sequence for the given path.
    pub fn new(path: &Path) -> Self {
        Self {
            steps: path.positions().to_vec(),
            cursor: 0,
        }
    }

    /// Takes the next highlight step, or `None` once every cell has been revealed.
    pub fn advance(&mut self) -> Option<Position> {
        let step = self.steps.get(self.cursor).copied();
        if step.is_some() {
            self.cursor += 1;
        }

        step
    }

    /// Returns the cells revealed so far, in path order.
    pub fn revealed(&self) -> &[Position] {
        self.steps.get(..self.cursor).unwrap_or_default()
    }

    /// Reports whether every step has been taken.
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    /// Rewinds the reveal to the beginning without rebuilding the steps.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a 3x3 grid whose only passages form a serpentine corner-to-corner walk.
    ///
    /// The layout is the degenerate Hamiltonian case: (0,0) -> (0,1) -> (0,2) -> (1,2) -> (1,1)
    /// -> (1,0) -> (2,0) -> (2,1) -> (2,2).
    fn snake_grid() -> Grid {
        let mut grid = Grid::new(3, 3);
        assert!(grid.open_wall(Position::new(0, 0), Direction::Right));
        assert!(grid.open_wall(Position::new(0, 1), Direction::Right));
        assert!(grid.open_wall(Position::new(0, 2), Direction::Down));
        assert!(grid.open_wall(Position::new(1, 2), Direction::Left));
        assert!(grid.open_wall(Position::new(1, 1), Direction::Left));
        assert!(grid.open_wall(Position::new(1, 0), Direction::Down));
        assert!(grid.open_wall(Position::new(2, 0), Direction::Right));
        assert!(grid.open_wall(Position::new(2, 1), Direction::Right));
        grid
    }

    /// Enumerates every simple wall-respecting path between two cells and returns the shortest
    /// length found.
    fn brute_force_shortest(grid: &Grid, from: Position, to: Position) -> Option<usize> {
        fn explore(
            grid: &Grid,
            current: Position,
            to: Position,
            trail: &mut Vec<Position>,
            best: &mut Option<usize>,
        ) {
            if current == to {
                let length = trail.len();
                *best = Some(best.map_or(length, |known| known.min(length)));
                return;
            }
            for direction in Direction::ALL {
                if grid.has_wall(current, direction) {
                    continue;
                }
                let Some(next) = grid.neighbor(current, direction) else {
                    continue;
                };
                if trail.contains(&next) {
                    continue;
                }
                trail.push(next);
                explore(grid, next, to, trail, best);
                let _ = trail.pop();
            }
        }

        let mut best = None;
        let mut trail = vec![from];
        explore(grid, from, to, &mut trail, &mut best);
        best
    }

    #[test]
    fn test_path_to_self_is_single_element() {
        let grid = snake_grid();
        let position = Position::new(1, 1);

        let path = find_path(&grid, position, position).expect("self path must exist");
        assert_eq!(path.len(), 1);
        assert_eq!(path.first(), Some(position));
        assert_eq!(path.last(), Some(position));
    }

    #[test]
    fn test_snake_grid_corner_to_corner_is_hamiltonian() {
        let grid = snake_grid();

        let path = find_path(&grid, Position::new(0, 0), Position::new(2, 2))
            .expect("the serpentine walk must be found");

        assert_eq!(path.len(), 9, "all nine cells must be traversed");
        assert_eq!(
            path.positions(),
            [
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 2),
                Position::new(1, 1),
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_path_respects_walls_and_adjacency() {
        let grid = snake_grid();
        let path = find_path(&grid, Position::new(0, 1), Position::new(2, 1))
            .expect("path must exist in a connected maze");

        for window in path.positions().windows(2) {
            let (Some(&step), Some(&next)) = (window.first(), window.get(1)) else {
                panic!("windows of two must hold two positions");
            };
            let open = Direction::ALL.into_iter().any(|direction| {
                grid.neighbor(step, direction) == Some(next) && !grid.has_wall(step, direction)
            });
            assert!(open, "{step} and {next} must share an open boundary");
        }
    }

    #[test]
    fn test_bfs_matches_brute_force_on_small_grids() {
        let grid = snake_grid();

        for from in grid.positions() {
            for to in grid.positions() {
                let expected = brute_force_shortest(&grid, from, to);
                let found = find_path(&grid, from, to).map(|path| path.len());
                assert_eq!(found, expected, "between {from} and {to}");
            }
        }
    }

    #[test]
    fn test_disconnected_cells_report_no_path() {
        // A fresh grid has every wall present, so nothing is reachable.
        let grid = Grid::new(3, 3);

        assert_eq!(
            find_path(&grid, Position::new(0, 0), Position::new(0, 1)),
            None
        );
    }

    #[test]
    fn test_out_of_bounds_endpoints_report_no_path() {
        let grid = snake_grid();

        assert_eq!(
            find_path(&grid, Position::new(0, 0), Position::new(9, 9)),
            None
        );
        assert_eq!(
            find_path(&grid, Position::new(9, 9), Position::new(0, 0)),
            None
        );
    }

    #[test]
    fn test_reveal_steps_follow_path_order() {
        let grid = snake_grid();
        let path = find_path(&grid, Position::new(0, 0), Position::new(2, 2))
            .expect("the serpentine walk must be found");

        let mut reveal = SolutionReveal::new(&path);
        assert!(!reveal.is_complete());

        let mut taken = Vec::new();
        while let Some(step) = reveal.advance() {
            taken.push(step);
        }

        assert_eq!(taken.as_slice(), path.positions());
        assert!(reveal.is_complete());
        assert_eq!(reveal.advance(), None);

        reveal.reset();
        assert!(reveal.revealed().is_empty());
        assert_eq!(reveal.advance(), Some(Position::new(0, 0)));
        assert_eq!(reveal.revealed(), &[Position::new(0, 0)]);
    }
}
