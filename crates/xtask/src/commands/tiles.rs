//! Static tile dataset commands
//!
//! Loads a static tile JSON file the same way the viewer does and prints
//! what it indexed, so dataset edits can be checked without a game session.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use serde_json::json;

use game_content::{LoadReport, StaticTileLoader, StaticTileRegistry};
use game_core::Position;

/// List locations with their entry counts
#[derive(Parser, Debug)]
pub struct TileList {
    /// Static tile dataset (JSON)
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

impl TileList {
    pub fn execute(self) -> Result<()> {
        let registry = load(&self.file)?;

        println!(
            "{} {}",
            style("Dataset:").bold().cyan(),
            self.file.display()
        );
        println!();

        for location in &registry.report().locations {
            println!(
                "  {:<24} {} entries",
                style(&location.name).yellow(),
                location.entries
            );
        }

        println!();
        println!(
            "  {} locations, {} entries",
            registry.locations().count(),
            registry.report().total_entries()
        );
        Ok(())
    }
}

/// Look up the named feature on one tile
#[derive(Parser, Debug)]
pub struct TileQuery {
    /// Static tile dataset (JSON)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Location name (case-insensitive)
    #[arg(value_name = "LOCATION")]
    location: String,

    /// Tile column
    #[arg(value_name = "X", allow_negative_numbers = true)]
    x: i32,

    /// Tile row
    #[arg(value_name = "Y", allow_negative_numbers = true)]
    y: i32,
}

impl TileQuery {
    pub fn execute(self) -> Result<()> {
        let registry = load(&self.file)?;
        let tile = Position::new(self.x, self.y);

        if !registry.is_available(&self.location) {
            println!(
                "{} No data for location {}",
                style("✗").red().bold(),
                style(&self.location).yellow()
            );
            return Ok(());
        }

        match registry.entry_at(&self.location, tile) {
            Some(entry) => println!(
                "{} {} ({}, type \"{}\") at {}",
                style("✓").green().bold(),
                style(&entry.name).bold(),
                entry.category,
                entry.kind,
                tile
            ),
            None => println!(
                "{} Nothing at {} in {}",
                style("✗").red().bold(),
                tile,
                self.location
            ),
        }
        Ok(())
    }
}

/// Validate a dataset and print its load report
#[derive(Parser, Debug)]
pub struct TileCheck {
    /// Static tile dataset (JSON)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// Per-location counts with totals
    Summary,
    /// Machine-readable JSON report
    Json,
}

impl TileCheck {
    pub fn execute(self) -> Result<()> {
        let registry = load(&self.file)?;
        let report = registry.report();

        match self.format {
            OutputFormat::Summary => print_summary(&self.file, report),
            OutputFormat::Json => print_json(report)?,
        }
        Ok(())
    }
}

fn load(path: &Path) -> Result<StaticTileRegistry> {
    StaticTileLoader::load(path)
        .with_context(|| format!("Static tile dataset is not usable: {}", path.display()))
}

fn print_summary(path: &Path, report: &LoadReport) {
    println!("{} {}", style("Dataset:").bold().cyan(), path.display());
    println!();

    for location in &report.locations {
        let marker = if location.skipped > 0 {
            style("!").yellow().bold()
        } else {
            style("✓").green().bold()
        };
        println!(
            "  {} {:<24} {} indexed, {} skipped, {} shadowed",
            marker, location.name, location.entries, location.skipped, location.shadowed
        );
    }

    println!();
    println!("{}", style("Totals:").bold().yellow());
    println!("  Indexed:  {}", report.total_entries());
    println!("  Skipped:  {}", report.total_skipped());
    println!("  Shadowed: {}", report.total_shadowed());
}

fn print_json(report: &LoadReport) -> Result<()> {
    let locations: Vec<_> = report
        .locations
        .iter()
        .map(|location| {
            json!({
                "name": location.name,
                "entries": location.entries,
                "skipped": location.skipped,
                "shadowed": location.shadowed,
            })
        })
        .collect();

    let value = json!({
        "locations": locations,
        "total_entries": report.total_entries(),
        "total_skipped": report.total_skipped(),
        "total_shadowed": report.total_shadowed(),
    });

    let json = serde_json::to_string_pretty(&value).context("Failed to serialize load report")?;
    println!("{}", json);
    Ok(())
}
