//! Session state and the direct function-call API for one maze game.
//!
//! This module restructures the game state as an explicit session object passed into and returned
//! from each core operation: the grid, the chosen endpoints, the player position, and the random
//! source all live here instead of in process-wide state. The surrounding presentation layer
//! calls straight into these operations; the core has no knowledge of input devices or timing.

use std::{collections::BTreeSet, fmt::Write as _};

use color_eyre::eyre::Result;
use rand::{rngs::StdRng, SeedableRng as _};

use crate::{
    config::Config,
    grid::{Direction, Grid, Position},
    pathfinding::{find_path, Path, SolutionReveal},
    verify::{generate_verified, resample_endpoints, Guarantee},
};

/// Result of a single move attempt.
///
/// This enumeration reports a rejected move as a value rather than an error, since bumping into a
/// wall is a normal part of play and never a fault.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MoveOutcome {
    /// The move was accepted and the player now stands on the carried position.
    Moved(Position),
    /// The move was rejected because a wall blocks that direction.
    Blocked,
}

/// State container for one maze game session.
///
/// This structure owns exactly one grid together with its start and exit positions, the mutable
/// player position, the configuration, the random source, and the optional in-flight solution
/// reveal. Execution is single-threaded and synchronous, driven by discrete external triggers; no
/// operation suspends mid-computation.
#[derive(Debug)]
pub struct Session {
    /// Sanitized session configuration.
    config: Config,
    /// The generated wall graph.
    grid: Grid,
    /// Start position the player spawns on.
    start: Position,
    /// Exit position that wins the game.
    exit: Position,
    /// Current player position.
    ///
    /// This field only ever moves across open adjacencies; every change goes through
    /// [`Session::try_move`] or a regeneration that resets it onto the start cell.
    player: Position,
    /// Length of the verified shortest path, when one was found.
    shortest_path_len: Option<usize>,
    /// Strength of the minimum-length guarantee of the current maze.
    guarantee: Guarantee,
    /// In-flight solution reveal, cancelled by replacement on regeneration.
    reveal: Option<SolutionReveal>,
    /// Random source for generation and endpoint sampling.
    rng: StdRng,
}

impl Session {
    /// Creates a session and generates its first verified maze.
    ///
    /// The configuration is clamped before use. A seeded configuration reproduces the same
    /// session every time; without a seed the random source is drawn from entropy.
    pub fn new(config: Config) -> Self {
        let config = config.clamped();
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let verified = generate_verified(config.rows, config.cols, config.min_path_fraction, &mut rng);

        Self {
            config,
            start: verified.start,
            exit: verified.exit,
            player: verified.start,
            shortest_path_len: verified.path.as_ref().map(Path::len),
            guarantee: verified.guarantee,
            grid: verified.grid,
            reveal: None,
            rng,
        }
    }

    /// Returns the grid of the current maze.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the start position.
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Returns the exit position.
    pub const fn exit(&self) -> Position {
        self.exit
    }

    /// Returns the current player position.
    pub const fn player(&self) -> Position {
        self.player
    }

    /// Returns the session configuration after clamping.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the length of the verified shortest path, or `None` when it is unknown.
    ///
    /// The length is unknown only after a best-effort fallback whose final endpoint pair had no
    /// path, which cannot occur post-generation but is tolerated defensively.
    pub const fn shortest_path_len(&self) -> Option<usize> {
        self.shortest_path_len
    }

    /// Returns the strength of the minimum-length guarantee of the current maze.
    pub const fn guarantee(&self) -> Guarantee {
        self.guarantee
    }

    /// Discards the current maze and generates a fresh verified one.
    ///
    /// The player is placed back on the new start position and any in-flight solution reveal is
    /// cancelled by replacement.
    pub fn regenerate(&mut self) {
        let verified = generate_verified(
            self.config.rows,
            self.config.cols,
            self.config.min_path_fraction,
            &mut self.rng,
        );

        self.grid = verified.grid;
        self.start = verified.start;
        self.exit = verified.exit;
        self.player = verified.start;
        self.shortest_path_len = verified.path.as_ref().map(Path::len);
        self.guarantee = verified.guarantee;
        self.reveal = None;
    }

    /// Picks a fresh start and exit on the current maze, preserving its layout.
    ///
    /// Returns `false` when no sufficiently distant pair was found within the attempt budget, in
    /// which case the session keeps its current endpoints and the caller may suggest
    /// regenerating instead.
    pub fn reset_endpoints(&mut self) -> bool {
        let Some((start, exit, path)) =
            resample_endpoints(&self.grid, self.config.min_path_fraction, &mut self.rng)
        else {
            return false;
        };

        self.start = start;
        self.exit = exit;
        self.player = start;
        self.shortest_path_len = Some(path.len());
        self.guarantee = Guarantee::Met;
        self.reveal = None;

        true
    }

    /// Attempts to move the player one cell in the given direction.
    ///
    /// The move is rejected when the wall in that direction is present; boundary cells always
    /// keep their outer walls, so the player can never leave the grid.
    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.grid.has_wall(self.player, direction) {
            return MoveOutcome::Blocked;
        }
        let Some(next) = self.grid.neighbor(self.player, direction) else {
            return MoveOutcome::Blocked;
        };

        self.player = next;
        MoveOutcome::Moved(next)
    }

    /// Reports whether the player stands on the exit cell.
    pub fn has_escaped(&self) -> bool {
        self.player == self.exit
    }

    /// Computes the shortest path from the player to the exit.
    pub fn solve(&self) -> Option<Path> {
        find_path(&self.grid, self.player, self.exit)
    }

    /// Starts a stepwise reveal of the current solution.
    ///
    /// The full step sequence is produced up front; the caller paces the steps through
    /// [`Session::advance_reveal`]. Returns `false` when no path from the player to the exit
    /// exists, which leaves no reveal in flight.
    pub fn begin_reveal(&mut self) -> bool {
        match self.solve() {
            Some(path) => {
                self.reveal = Some(SolutionReveal::new(&path));
                true
            }
            None => {
                self.reveal = None;
                false
            }
        }
    }

    /// Takes the next highlight step of the in-flight reveal, if any.
    pub fn advance_reveal(&mut self) -> Option<Position> {
        self.reveal.as_mut()?.advance()
    }

    /// Returns the solution cells revealed so far.
    pub fn revealed(&self) -> &[Position] {
        self.reveal.as_ref().map_or(&[], SolutionReveal::revealed)
    }

    /// Enables or disables fog-of-war.
    pub fn set_fog_enabled(&mut self, enabled: bool) {
        self.config.fog_enabled = enabled;
    }

    /// Changes the fog-of-war traversal radius.
    pub fn set_visibility_radius(&mut self, radius: usize) {
        self.config.visibility_radius = radius;
    }

    /// Computes the set of cells currently visible to the player.
    ///
    /// With fog enabled this is the bounded-radius flood around the player; with fog disabled
    /// the engine is bypassed and the full grid is visible. The set is derived per call and never
    /// persisted.
    pub fn visible_cells(&self) -> BTreeSet<Position> {
        if self.config.fog_enabled {
            crate::visibility::compute_visible(&self.grid, self.player, self.config.visibility_radius)
        } else {
            self.grid.positions().collect()
        }
    }

    /// Renders the session as ASCII art.
    ///
    /// Walls are always drawn; each cell interior shows the player as `P`, the exit as `E`, the
    /// start as `S`, a solution overlay cell as `*`, and fogged cells as `~`. The optional
    /// `solution` parameter overlays a path the caller obtained from [`Session::solve`].
    ///
    /// # Errors
    ///
    /// This function may return errors from formatting into the output string.
    pub fn render(&self, solution: Option<&Path>) -> Result<String> {
        let visible = self.visible_cells();
        let mut output = String::new();

        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                let position = Position::new(row, col);
                output.push('+');
                output.push_str(if self.grid.has_wall(position, Direction::Up) {
                    "---"
                } else {
                    "   "
                });
            }
            output.push_str("+\n");

            for col in 0..self.grid.cols() {
                let position = Position::new(row, col);
                output.push(if self.grid.has_wall(position, Direction::Left) {
                    '|'
                } else {
                    ' '
                });

                let marker = if position == self.player {
                    'P'
                } else if !visible.contains(&position) {
                    '~'
                } else if position == self.exit {
                    'E'
                } else if position == self.start {
                    'S'
                } else if solution.is_some_and(|path| path.positions().contains(&position)) {
                    '*'
                } else {
                    ' '
                };
                write!(output, " {marker} ")?;
            }
            output.push_str("|\n");
        }

        for _ in 0..self.grid.cols() {
            output.push_str("+---");
        }
        output.push_str("+\n");

        Ok(output)
    }
}
