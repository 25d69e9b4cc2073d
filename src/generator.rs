//! Randomized perfect-maze generation.
//!
//! This module carves a spanning tree over the cell adjacency graph of a [`Grid`] using the
//! depth-first backtracking algorithm, leaving every cell reachable from every other cell through
//! exactly one simple path.

use rand::Rng;

use crate::grid::{Direction, Grid, Position};

/// Carves a perfect maze into the given grid.
///
/// This function mutates the grid in place so that the walls-down edges form a spanning tree of
/// the cell adjacency graph. Generation starts from a uniformly random cell and repeatedly
/// extends the deepest frontier cell toward a uniformly random unvisited neighbor, clearing the
/// wall pair between them, and backtracks once a cell has no unvisited neighbor left.
///
/// Neighbors are enumerated in the fixed order up, right, down, left; the order only shapes the
/// bias of the carved passages. The same random sequence always produces the same maze, so a
/// seeded source gives reproducible layouts. All walls are restored before carving so the grid
/// can be regenerated without reallocation, and the visited flags are cleared afterwards so
/// verification can re-sample endpoints on the finished structure.
pub fn generate<R: Rng>(grid: &mut Grid, rng: &mut R) {
    grid.reset();

    let start = random_position(grid, rng);
    grid.mark_visited(start);
    let mut stack = vec![start];

    while let Some(&current) = stack.last() {
        let neighbors: Vec<(Position, Direction)> = Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                grid.neighbor(current, direction)
                    .filter(|&next| !grid.is_visited(next))
                    .map(|next| (next, direction))
            })
            .collect();

        if neighbors.is_empty() {
            let _ = stack.pop();
            continue;
        }

        if let Some(&(next, direction)) = neighbors.get(rng.gen_range(0..neighbors.len())) {
            let _ = grid.open_wall(current, direction);
            grid.mark_visited(next);
            stack.push(next);
        }
    }

    grid.clear_visited();
}

/// Samples a uniformly random in-bounds position of the grid.
pub(crate) fn random_position<R: Rng>(grid: &Grid, rng: &mut R) -> Position {
    Position::new(rng.gen_range(0..grid.rows()), rng.gen_range(0..grid.cols()))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;
    use crate::pathfinding::find_path;

    #[test]
    fn test_generated_maze_is_a_spanning_tree() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(8, 6);
        generate(&mut grid, &mut rng);

        // Connected: every cell is reachable from the first one.
        let origin = Position::new(0, 0);
        for position in grid.positions() {
            assert!(
                find_path(&grid, origin, position).is_some(),
                "cell {position} must be reachable from the origin"
            );
        }

        // Acyclic: a connected graph over N vertices with N - 1 edges is a tree.
        assert_eq!(grid.open_edge_count(), grid.cell_count() - 1);
    }

    #[test]
    fn test_generated_walls_are_symmetric() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut grid = Grid::new(7, 7);
        generate(&mut grid, &mut rng);

        for position in grid.positions() {
            for direction in Direction::ALL {
                if let Some(next) = grid.neighbor(position, direction) {
                    assert_eq!(
                        grid.has_wall(position, direction),
                        grid.has_wall(next, direction.opposite()),
                        "wall between {position} and {next} must match on both sides"
                    );
                }
            }
        }
    }

    #[test]
    fn test_visited_flags_cleared_after_generation() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::new(5, 5);
        generate(&mut grid, &mut rng);

        for position in grid.positions() {
            assert!(!grid.is_visited(position), "visited flags must be cleared");
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        let mut first = Grid::new(6, 9);
        let mut second = Grid::new(6, 9);
        generate(&mut first, &mut StdRng::seed_from_u64(123));
        generate(&mut second, &mut StdRng::seed_from_u64(123));

        assert_eq!(first, second);
    }

    #[test]
    fn test_regeneration_reuses_the_grid() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut grid = Grid::new(4, 4);
        generate(&mut grid, &mut rng);
        generate(&mut grid, &mut rng);

        assert_eq!(grid.open_edge_count(), grid.cell_count() - 1);
    }

    #[test]
    fn test_minimal_two_by_two_maze() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(2, 2);
        generate(&mut grid, &mut rng);

        assert_eq!(grid.open_edge_count(), 3);
    }
}
