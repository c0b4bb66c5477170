//! Development tasks for the tile access workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;

use anyhow::Result;
use clap::Parser;
use client_viewer::LogTarget;
use commands::{TileCheck, TileList, TileQuery};

/// Development tasks for the tile access workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for tile access data", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Static tile dataset commands
    #[command(subcommand)]
    Tiles(TilesCommand),
}

/// Inspect and validate static tile datasets
#[derive(Parser)]
enum TilesCommand {
    /// List locations with their entry counts
    List(TileList),

    /// Look up the named feature on one tile
    Query(TileQuery),

    /// Validate a dataset and print its load report
    Check(TileCheck),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for RUST_LOG and other env vars)
    let _ = dotenvy::dotenv();

    let _guard = client_viewer::setup_logging(LogTarget::Stderr)?;

    let cli = Cli::parse();

    match cli.command {
        Command::Tiles(tiles_cmd) => match tiles_cmd {
            TilesCommand::List(cmd) => cmd.execute(),
            TilesCommand::Query(cmd) => cmd.execute(),
            TilesCommand::Check(cmd) => cmd.execute(),
        },
    }
}
