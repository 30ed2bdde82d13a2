//! Command-line driver for the dragon simulation.
//!
//! ```bash
//! # scripted session: tame, saddle, ride, breed, save
//! dragon-sim run --seed 7 --ticks 120 --save
//!
//! # inspect what was saved
//! dragon-sim inspect --format json
//! ```

mod commands;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{Inspect, Run};

/// Tameable dragon simulation tools
#[derive(Parser)]
#[command(name = "dragon-sim")]
#[command(about = "Drive and inspect the dragon simulation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run a scripted session against a fresh world
    Run(Run),

    /// Show saved dragons
    Inspect(Inspect),
}

fn main() -> Result<()> {
    // SAVE_DATA_DIR and RUST_LOG may come from a .env file
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run(cmd) => cmd.execute(),
        Command::Inspect(cmd) => cmd.execute(),
    }
}
