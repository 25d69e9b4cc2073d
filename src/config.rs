//! Session configuration and its sanitization.
//!
//! This module holds the recognized options of a maze session together with the clamping rules
//! applied before the core consumes them. The structure doubles as a clap argument group so the
//! binary can parse it straight from the command line.

use clap::Args;

/// Smallest supported grid dimension.
pub const MIN_DIMENSION: usize = 5;

/// Largest supported grid dimension.
pub const MAX_DIMENSION: usize = 40;

/// Default number of rows and columns.
pub const DEFAULT_DIMENSION: usize = 12;

/// Default minimum solution length as a fraction of the total cell count.
pub const DEFAULT_MIN_PATH_FRACTION: f64 = 0.12;

/// Default fog-of-war traversal radius.
pub const DEFAULT_VISIBILITY_RADIUS: usize = 3;

/// Recognized options of one maze session.
///
/// This structure carries everything the core consumes: grid dimensions, the minimum-length
/// fraction the verifier enforces, the fog settings of the visibility engine, and an optional
/// seed for reproducible sessions. All state is in-memory for the lifetime of one session; there
/// are no file formats or persisted settings.
#[derive(Args, Clone, Debug)]
pub struct Config {
    /// Number of cell rows, clamped to the supported range.
    #[arg(long, default_value_t = DEFAULT_DIMENSION)]
    pub rows: usize,

    /// Number of cell columns, clamped to the supported range.
    #[arg(long, default_value_t = DEFAULT_DIMENSION)]
    pub cols: usize,

    /// Minimum acceptable solution length as a fraction of the total cell count.
    #[arg(long = "min-fraction", default_value_t = DEFAULT_MIN_PATH_FRACTION)]
    pub min_path_fraction: f64,

    /// Maximum traversal distance revealed around the player when fog is enabled.
    #[arg(long = "radius", default_value_t = DEFAULT_VISIBILITY_RADIUS)]
    pub visibility_radius: usize,

    /// Disables fog-of-war so the whole grid is always visible.
    #[arg(long = "no-fog", action = clap::ArgAction::SetFalse)]
    pub fog_enabled: bool,

    /// Seed for the random source; omit it for an entropy-seeded session.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_DIMENSION,
            cols: DEFAULT_DIMENSION,
            min_path_fraction: DEFAULT_MIN_PATH_FRACTION,
            visibility_radius: DEFAULT_VISIBILITY_RADIUS,
            fog_enabled: true,
            seed: None,
        }
    }
}

impl Config {
    /// Returns the configuration with every option forced into its supported domain.
    ///
    /// Dimensions are clamped to `[MIN_DIMENSION, MAX_DIMENSION]`. A non-finite or non-positive
    /// fraction falls back to the default and anything above one is capped at one, mirroring how
    /// the requirement is bounded by the cell count anyway.
    pub fn clamped(mut self) -> Self {
        self.rows = self.rows.clamp(MIN_DIMENSION, MAX_DIMENSION);
        self.cols = self.cols.clamp(MIN_DIMENSION, MAX_DIMENSION);

        if !self.min_path_fraction.is_finite() || self.min_path_fraction <= 0.0 {
            self.min_path_fraction = DEFAULT_MIN_PATH_FRACTION;
        } else if self.min_path_fraction > 1.0 {
            self.min_path_fraction = 1.0;
        }

        self
    }
}
