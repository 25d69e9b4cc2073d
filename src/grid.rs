//! Grid model for the maze.
//!
//! This module contains the cell and wall representation of a maze, including the symmetric wall
//! mutation used during generation and a textual rendering of the wall layout.

use std::fmt::{self, Write as _};

/// Cell position within a grid.
///
/// This structure identifies a single cell by its row and column. Both coordinates are zero-based
/// and must lie within the bounds of the grid the position is used with.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Position {
    /// Zero-based row coordinate of the cell.
    pub row: usize,
    /// Zero-based column coordinate of the cell.
    pub col: usize,
}

impl Position {
    /// Creates a position from a row and column pair.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.row, self.col)
    }
}

/// Orthogonal movement direction between adjacent cells.
///
/// This enumeration names the four directions in which a cell borders a neighbor. The ordering of
/// [`Direction::ALL`] fixes the neighbor enumeration order used by the generator, which only
/// affects the bias of generated shapes, never correctness.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    /// Toward the previous row.
    Up,
    /// Toward the next column.
    Right,
    /// Toward the next row.
    Down,
    /// Toward the previous column.
    Left,
}

impl Direction {
    /// All four directions in the fixed enumeration order up, right, down, left.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Returns the direction pointing back toward the cell this one was taken from.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Returns the slot this direction occupies in a cell's wall array.
    pub(crate) const fn wall_slot(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }

    /// Returns the position one step in this direction, bounds-checked against the given
    /// dimensions.
    ///
    /// This function returns `None` when the step would leave the rectangle spanned by `rows` and
    /// `cols`, so callers never have to reason about wrapping arithmetic.
    pub fn step(self, position: Position, rows: usize, cols: usize) -> Option<Position> {
        match self {
            Self::Up if position.row > 0 => Some(Position::new(position.row - 1, position.col)),
            Self::Right if position.col + 1 < cols => {
                Some(Position::new(position.row, position.col + 1))
            }
            Self::Down if position.row + 1 < rows => {
                Some(Position::new(position.row + 1, position.col))
            }
            Self::Left if position.col > 0 => Some(Position::new(position.row, position.col - 1)),
            _ => None,
        }
    }
}

/// Single cell of the maze grid.
///
/// This structure holds the four boundary flags of a cell, each `true` meaning a wall is present
/// and traversal in that direction is blocked, together with the visited flag consumed by the
/// generator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    /// Position of this cell within its grid.
    position: Position,
    /// Wall flags in direction slot order (up, right, down, left).
    walls: [bool; 4],
    /// Visited flag used while carving the maze.
    ///
    /// This field is cleared after generation so the structure can be reused by verification
    /// re-sampling without allocating a fresh grid.
    visited: bool,
}

impl Cell {
    /// Creates a cell with all four walls present and the visited flag cleared.
    const fn new(position: Position) -> Self {
        Self {
            position,
            walls: [true; 4],
            visited: false,
        }
    }

    /// Returns the position of this cell.
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Reports whether the wall toward the given direction is present.
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls.get(direction.wall_slot()).copied().unwrap_or(true)
    }

    /// Sets or clears the wall toward the given direction on this cell only.
    ///
    /// Symmetry with the neighboring cell is the responsibility of [`Grid::open_wall`]; this
    /// method never reaches across the boundary.
    fn set_wall(&mut self, direction: Direction, present: bool) {
        if let Some(wall) = self.walls.get_mut(direction.wall_slot()) {
            *wall = present;
        }
    }
}

/// Rectangular maze grid of cells.
///
/// This structure owns the cells of one maze in row-major order. It is immutable once generated
/// except for the symmetric wall state set during generation, which every mutation keeps
/// consistent on both sides of a shared boundary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    /// Number of cell rows.
    rows: usize,
    /// Number of cell columns.
    cols: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell initialized with all four walls present.
    ///
    /// The caller is expected to have validated the dimensions; the constructor itself imposes no
    /// bounds beyond what allocation permits.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(Position::new(row, col)));
            }
        }

        Self { rows, cols, cells }
    }

    /// Returns the number of cell rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of cell columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the total number of cells.
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Reports whether the given position lies within the grid bounds.
    pub const fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    /// Returns the row-major index of a position, or `None` when it lies outside the grid.
    pub(crate) const fn offset(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some(position.row * self.cols + position.col)
        } else {
            None
        }
    }

    /// Returns the cell at the given position, or `None` when it lies outside the grid.
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.offset(position).and_then(|index| self.cells.get(index))
    }

    /// Returns a mutable reference to the cell at the given position.
    fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.offset(position)
            .and_then(|index| self.cells.get_mut(index))
    }

    /// Reports whether a wall blocks movement from the given position toward a direction.
    ///
    /// Positions outside the grid report a wall, so movement queries degrade to "blocked" instead
    /// of panicking on bad input.
    pub fn has_wall(&self, position: Position, direction: Direction) -> bool {
        self.cell(position)
            .map_or(true, |cell| cell.has_wall(direction))
    }

    /// Returns the in-bounds neighbor of a position toward a direction.
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        direction.step(position, self.rows, self.cols)
    }

    /// Clears the wall pair between a cell and its neighbor toward the given direction.
    ///
    /// Both sides of the shared boundary are cleared in one operation so the symmetry invariant
    /// can never be observed broken. Returns `true` when a wall pair was opened and `false` when
    /// the position or its neighbor lies outside the grid.
    pub fn open_wall(&mut self, position: Position, direction: Direction) -> bool {
        let Some(next) = self.neighbor(position, direction) else {
            return false;
        };

        if let Some(cell) = self.cell_mut(position) {
            cell.set_wall(direction, false);
        } else {
            return false;
        }
        if let Some(cell) = self.cell_mut(next) {
            cell.set_wall(direction.opposite(), false);
        }

        true
    }

    /// Reports whether the cell at the given position carries the visited mark.
    pub(crate) fn is_visited(&self, position: Position) -> bool {
        self.cell(position).is_some_and(|cell| cell.visited)
    }

    /// Marks the cell at the given position as visited.
    pub(crate) fn mark_visited(&mut self, position: Position) {
        if let Some(cell) = self.cell_mut(position) {
            cell.visited = true;
        }
    }

    /// Clears the visited mark on every cell.
    pub(crate) fn clear_visited(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
        }
    }

    /// Restores every wall and clears every visited mark.
    ///
    /// Regeneration reuses the same allocation, so the carved state of a previous run must be
    /// wiped before a new spanning tree is laid down.
    pub(crate) fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.walls = [true; 4];
            cell.visited = false;
        }
    }

    /// Returns an iterator over every position of the grid in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// Counts the open-wall edges of the passage graph.
    ///
    /// Each cleared boundary between two adjacent cells counts once. A perfect maze over the grid
    /// has exactly `cell_count() - 1` such edges.
    pub fn open_edge_count(&self) -> usize {
        self.positions()
            .map(|position| {
                let mut edges = 0;
                if !self.has_wall(position, Direction::Right)
                    && self.neighbor(position, Direction::Right).is_some()
                {
                    edges += 1;
                }
                if !self.has_wall(position, Direction::Down)
                    && self.neighbor(position, Direction::Down).is_some()
                {
                    edges += 1;
                }
                edges
            })
            .sum()
    }
}

impl fmt::Display for Grid {
    /// Draws the wall layout with one character cell of interior per maze cell.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let position = Position::new(row, col);
                formatter.write_char('+')?;
                formatter.write_str(if self.has_wall(position, Direction::Up) {
                    "---"
                } else {
                    "   "
                })?;
            }
            formatter.write_str("+\n")?;

            for col in 0..self.cols {
                let position = Position::new(row, col);
                formatter.write_char(if self.has_wall(position, Direction::Left) {
                    '|'
                } else {
                    ' '
                })?;
                formatter.write_str("   ")?;
            }
            formatter.write_str("|\n")?;
        }

        for _ in 0..self.cols {
            formatter.write_str("+---")?;
        }
        formatter.write_str("+\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_all_walls_present() {
        let grid = Grid::new(3, 4);

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.cell_count(), 12);
        for position in grid.positions() {
            for direction in Direction::ALL {
                assert!(
                    grid.has_wall(position, direction),
                    "expected a wall at {position} toward {direction:?}"
                );
            }
            assert!(!grid.is_visited(position), "expected a cleared visited flag");
        }
    }

    #[test]
    fn test_contains_and_neighbor_bounds() {
        let grid = Grid::new(2, 2);

        assert!(grid.contains(Position::new(1, 1)));
        assert!(!grid.contains(Position::new(2, 0)));
        assert!(!grid.contains(Position::new(0, 2)));

        assert_eq!(grid.neighbor(Position::new(0, 0), Direction::Up), None);
        assert_eq!(grid.neighbor(Position::new(0, 0), Direction::Left), None);
        assert_eq!(
            grid.neighbor(Position::new(0, 0), Direction::Right),
            Some(Position::new(0, 1))
        );
        assert_eq!(
            grid.neighbor(Position::new(0, 0), Direction::Down),
            Some(Position::new(1, 0))
        );
        assert_eq!(grid.neighbor(Position::new(1, 1), Direction::Down), None);
        assert_eq!(grid.neighbor(Position::new(1, 1), Direction::Right), None);
    }

    #[test]
    fn test_open_wall_clears_both_sides() {
        let mut grid = Grid::new(2, 2);

        assert!(grid.open_wall(Position::new(0, 0), Direction::Right));
        assert!(!grid.has_wall(Position::new(0, 0), Direction::Right));
        assert!(!grid.has_wall(Position::new(0, 1), Direction::Left));
        assert!(grid.has_wall(Position::new(0, 0), Direction::Down));
    }

    #[test]
    fn test_open_wall_rejects_boundary() {
        let mut grid = Grid::new(2, 2);

        assert!(!grid.open_wall(Position::new(0, 0), Direction::Up));
        assert!(!grid.open_wall(Position::new(1, 1), Direction::Down));
        assert!(!grid.open_wall(Position::new(5, 5), Direction::Left));
        for position in grid.positions() {
            for direction in Direction::ALL {
                assert!(grid.has_wall(position, direction), "walls must be untouched");
            }
        }
    }

    #[test]
    fn test_visited_marks_round_trip() {
        let mut grid = Grid::new(2, 3);
        let position = Position::new(1, 2);

        grid.mark_visited(position);
        assert!(grid.is_visited(position));
        assert!(!grid.is_visited(Position::new(0, 0)));

        grid.clear_visited();
        assert!(!grid.is_visited(position));
    }

    #[test]
    fn test_open_edge_count_on_fresh_grid() {
        let grid = Grid::new(4, 4);

        assert_eq!(grid.open_edge_count(), 0);
    }

    #[test]
    fn test_direction_opposites() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_display_draws_closed_layout() {
        let grid = Grid::new(1, 2);
        let rendered = grid.to_string();

        assert_eq!(rendered, "+---+---+\n|   |   |\n+---+---+\n");
    }
}
