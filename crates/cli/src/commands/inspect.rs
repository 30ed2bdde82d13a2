//! Reads saved dragons back from the snapshot repository.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use dragon_core::EntityId;
use runtime::{FileSnapshotRepository, SavedDragon, SnapshotRepository};

use crate::dirs;

#[derive(Parser)]
pub struct Inspect {
    /// Dragon to show; all saved dragons if omitted
    #[arg(value_name = "ID")]
    id: Option<u32>,

    /// Custom save directory (defaults to platform-specific location)
    #[arg(short, long, value_name = "DIR")]
    save_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One block per dragon
    Summary,
    /// Stored JSON records
    Json,
}

impl Inspect {
    pub fn execute(self) -> Result<()> {
        let dir = self.save_dir.unwrap_or_else(dirs::save_dir);
        if !dir.exists() {
            anyhow::bail!("Save directory not found: {}", dir.display());
        }
        let repo = FileSnapshotRepository::new(&dir)?;

        let ids = match self.id {
            Some(id) => vec![EntityId(id)],
            None => repo.list_ids()?,
        };
        if ids.is_empty() {
            println!("No dragons saved in {}", dir.display());
            return Ok(());
        }

        for id in ids {
            let saved = repo
                .load(id)?
                .with_context(|| format!("Dragon {} is not saved in {}", id, dir.display()))?;
            match self.format {
                OutputFormat::Summary => print_summary(&saved),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&saved)?),
            }
        }
        Ok(())
    }
}

fn print_summary(saved: &SavedDragon) {
    println!(
        "{} {} ({})",
        style("Dragon").bold().yellow(),
        saved.id,
        saved.name.as_deref().unwrap_or("unnamed")
    );
    println!("  Breed: {}", saved.breed);
    println!(
        "  Owner: {}",
        saved
            .owner
            .map_or_else(|| "none".to_string(), |owner| owner.to_string())
    );
    println!("  Position: {:?}", saved.position);
    println!(
        "  Ticks alive: {}",
        saved
            .snapshot
            .ticks_alive
            .map_or_else(|| "unknown".to_string(), |ticks| ticks.to_string())
    );
    println!("  Saddled: {}", saved.snapshot.saddle);
    println!("  Reproductions: {}", saved.snapshot.repro_count);
    println!();
}
