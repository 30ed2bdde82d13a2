//! Scripted session: two wild dragons are tamed, one is saddled and flown,
//! then the pair breeds and everything is saved.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use dragon_content::{ConfigLoader, ContentFactory};
use dragon_core::{
    Actor, Breed, Dragon, EntityId, Facing, HeldItem, ItemId, RiderInput, Vec3,
};
use runtime::{
    BreedOracleImpl, FileSnapshotRepository, FlatWorld, ItemOracleImpl, OracleManager,
    PresentationMirror, ScriptedRiders, Simulation,
};

use crate::dirs;

const PLAYER: EntityId = EntityId(1_000);
const GROUND_Y: f64 = 64.0;
/// Upper bound on courtship items offered per dragon.
const MAX_TAME_ATTEMPTS: u32 = 64;

#[derive(Parser)]
pub struct Run {
    /// Game seed; the same seed replays the same session
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Ticks spent riding in flight
    #[arg(short, long, default_value_t = 120)]
    ticks: u64,

    /// Content directory with config.toml, items.ron and breeds.ron
    /// (defaults to the bundled data)
    #[arg(short, long, value_name = "DIR")]
    content: Option<PathBuf>,

    /// Config file overriding the content directory's config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Save every dragon at the end of the session
    #[arg(long)]
    save: bool,

    /// Where to save (defaults to the platform data directory)
    #[arg(long, value_name = "DIR")]
    save_dir: Option<PathBuf>,
}

impl Run {
    pub fn execute(self) -> Result<()> {
        let content = match &self.content {
            Some(dir) => ContentFactory::new(dir),
            None => ContentFactory::bundled(),
        };
        tracing::info!("Loading content from {}", content.data_dir().display());

        let config = match &self.config {
            Some(path) => ConfigLoader::load(path)?,
            None => content.load_config()?,
        };
        let items = ItemOracleImpl::from_definitions(content.load_items()?);
        let breeds = BreedOracleImpl::from_definitions(content.load_breeds()?);

        let courtship = items
            .find("cod")
            .context("Item catalog has no 'cod' courtship item")?;
        let saddle = items
            .find("saddle")
            .context("Item catalog has no 'saddle' item")?;

        let oracles = OracleManager::new(
            Arc::new(FlatWorld::new(GROUND_Y)),
            Arc::new(ScriptedRiders::new()),
            Arc::new(items),
            Arc::new(breeds),
        );
        let mut sim = Simulation::builder()
            .config(config)
            .oracles(oracles)
            .seed(self.seed)
            .build()?;

        let player = Actor::new(PLAYER);
        let first = sim.spawn(Breed::Fire, Vec3::new(0.0, GROUND_Y, 0.0));
        let second = sim.spawn(Breed::Water, Vec3::new(4.0, GROUND_Y, 0.0));

        for id in [first, second] {
            let attempts = tame(&mut sim, id, &player, courtship)?;
            println!(
                "{} dragon {} after {} attempt(s)",
                style("Tamed").bold().green(),
                id,
                attempts
            );
        }
        sim.set_name(first, Some("Ember".into()))?;
        sim.set_name(second, Some("Tide".into()))?;

        sim.interact(first, &player, &mut HeldItem::of(saddle, 1))?;
        sim.mount(first, &player)?;
        sim.set_rider_input(
            PLAYER,
            RiderInput {
                look: Vec3::new(0.0, 0.0, 1.0),
                facing: Facing::new(0.0, 0.0),
                forward: 1.0,
                strafe: 0.0,
                jumping: true,
            },
        );
        sim.run(self.ticks)?;
        println!(
            "{} for {} ticks, now at {:?}",
            style("Flew").bold().green(),
            self.ticks,
            sim.get(first)?.body().position
        );

        sim.dismount(first)?;
        sim.run(100)?;

        sim.set_in_love(first, true)?;
        sim.set_in_love(second, true)?;
        let child = sim.breed(first, second)?;
        sim.run(1)?;

        let mut mirror = PresentationMirror::new(sim.config().life_stages);
        mirror.apply(&sim.drain_sync());

        println!();
        println!("{}", style("=== Dragons ===").bold().green());
        for id in sim.ids() {
            let dragon = sim.get(id)?;
            print_dragon(dragon);
            if let Some(replica) = mirror.replica(id) {
                println!(
                    "    mirror: stage {}, scale {:.2}, flying {}",
                    replica.life_stage(),
                    replica.scale(),
                    replica.is_flying()
                );
            }
        }
        println!(
            "{} {} events recorded, offspring is {}",
            style("Session:").bold().cyan(),
            sim.drain_events().len(),
            child
        );

        if self.save {
            let dir = self.save_dir.unwrap_or_else(dirs::save_dir);
            let repo = FileSnapshotRepository::new(&dir)
                .with_context(|| format!("Failed to open save directory {}", dir.display()))?;
            for id in sim.ids() {
                sim.save(id, &repo)?;
            }
            println!("{} {}", style("Saved to").bold().cyan(), dir.display());
        }

        Ok(())
    }
}

/// Offers courtship items until the dragon accepts.
fn tame(sim: &mut Simulation, id: EntityId, player: &Actor, item: ItemId) -> Result<u32> {
    let mut held = HeldItem::of(item, MAX_TAME_ATTEMPTS);
    for attempt in 1..=MAX_TAME_ATTEMPTS {
        sim.interact(id, player, &mut held)?;
        if sim.get(id)?.is_tamed() {
            return Ok(attempt);
        }
    }
    anyhow::bail!(
        "Dragon {} refused {} courtship items",
        id,
        MAX_TAME_ATTEMPTS
    )
}

fn print_dragon(dragon: &Dragon) {
    println!(
        "  {} {} ({}) - {}, {} ticks, HP {:.0}/{:.0}",
        style("Dragon").bold().yellow(),
        dragon.id(),
        dragon.custom_name().unwrap_or("unnamed"),
        dragon.breed(),
        dragon.ticks_alive(),
        dragon.health(),
        dragon.attributes().max_health
    );
    println!(
        "    stage {}, owner {}, saddled {}, bred {} time(s)",
        dragon.life_stage(),
        dragon
            .owner()
            .map_or_else(|| "none".to_string(), |owner| owner.to_string()),
        dragon.is_saddled(),
        dragon.reproduction_count()
    );
}
