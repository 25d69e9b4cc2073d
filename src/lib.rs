//! Procedural maze core with guaranteed solvability and fog-of-war visibility.
//!
//! This crate generates perfect mazes with a randomized depth-first spanning tree, verifies them
//! against a minimum shortest-path length by repeated regeneration and endpoint sampling, finds
//! shortest paths with a wall-respecting breadth-first search, and computes bounded-radius
//! visibility floods for fog-of-war. All state lives in an explicit per-game [`Session`]; the
//! presentation layer drives it through direct function calls and paces any solution reveal
//! itself.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod config;
mod generator;
mod grid;
mod pathfinding;
mod session;
mod verify;
mod visibility;

pub use config::{
    Config, DEFAULT_DIMENSION, DEFAULT_MIN_PATH_FRACTION, DEFAULT_VISIBILITY_RADIUS,
    MAX_DIMENSION, MIN_DIMENSION,
};
pub use generator::generate;
pub use grid::{Cell, Direction, Grid, Position};
pub use pathfinding::{find_path, Path, SolutionReveal};
pub use session::{MoveOutcome, Session};
pub use verify::{
    generate_verified, minimum_path_length, resample_endpoints, Guarantee, VerifiedMaze,
    ABSOLUTE_MIN_PATH_LENGTH, MAX_GENERATION_ATTEMPTS, MAX_RESAMPLE_ATTEMPTS,
};
pub use visibility::compute_visible;
