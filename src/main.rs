//! This crate contains the source code for the binary for the fogmaze generator.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser;
use color_eyre::{eyre::Result, install};
use fogmaze::{Config, Guarantee, Session};

/// Command-line arguments of the fogmaze binary.
///
/// This structure wraps the session configuration with the presentation choices of the binary
/// itself.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Session configuration shared with the library.
    #[command(flatten)]
    config: Config,

    /// Overlays the shortest path from the start to the exit on the rendered maze.
    #[arg(long)]
    solve: bool,
}

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    let session = Session::new(cli.config);

    let solution = if cli.solve { session.solve() } else { None };
    print!("{}", session.render(solution.as_ref())?);

    match session.shortest_path_len() {
        Some(length) => println!("Shortest path length: {length}"),
        None => println!("Shortest path length: unknown"),
    }
    if session.guarantee() == Guarantee::BestEffort {
        println!("Minimum-length requirement not met within the attempt budget; best-effort maze.");
    }

    Ok(())
}
