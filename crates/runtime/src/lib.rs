//! Host runtime for the dragon simulation.
//!
//! Owns a population of creatures and drives them through the core tick
//! pipeline, backed by concrete oracles and snapshot repositories.
//!
//! Modules are organized by responsibility:
//! - [`simulation`] hosts the authoritative [`Simulation`] and its builder
//! - [`presentation`] mirrors replicated state on the presentation side
//! - [`oracle`] implements the core oracle traits for a flat world
//! - [`repository`] persists creature snapshots in memory or on disk
pub mod error;
pub mod oracle;
pub mod presentation;
pub mod repository;
pub mod simulation;

pub use error::{Result, RuntimeError};
pub use oracle::{BreedOracleImpl, FlatWorld, ItemOracleImpl, OracleManager, ScriptedRiders};
pub use presentation::PresentationMirror;
pub use repository::{
    FileSnapshotRepository, InMemorySnapshotRepo, RepositoryError, SavedDragon,
    SnapshotRepository,
};
pub use simulation::{Simulation, SimulationBuilder, SimulationEvent, SyncMessage};
