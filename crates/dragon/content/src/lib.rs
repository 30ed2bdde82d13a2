//! Data-driven content for the dragon simulation.
//!
//! Provides loaders for the files a host reads at startup:
//! - Simulation tunables (`config.toml`, TOML)
//! - Item catalog (`items.ron`, RON)
//! - Breed table with default damage immunities (`breeds.ron`, RON)
//!
//! Content is consumed by runtime oracles and never appears in creature
//! state. All loaders deserialize `dragon-core` types directly.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    BreedDefinition, BreedLoader, ConfigLoader, ContentFactory, ItemDefinition, ItemLoader,
};
