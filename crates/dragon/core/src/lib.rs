//! Deterministic simulation core for a tameable, rideable dragon.
//!
//! The crate models one creature as a fixed-tick state machine:
//!
//! - [`dragon`]: the [`Dragon`] record and its controllers (growth, damage
//!   immunity, ownership, locomotion, riding, breeding), plus the interaction
//!   protocol and the event outbox.
//! - [`engine`]: [`DragonEngine`], which runs one tick in the fixed phase
//!   order.
//! - [`state`]: shared value types, the replicated-state diff layer and the
//!   persisted snapshot.
//! - [`env`]: oracle traits for everything the host world provides.
//! - [`config`]: tunables with validation.
//!
//! The core performs no I/O and does no logging. Hosts drain
//! [`DragonEvent`]s and log or render them as they see fit.
pub mod capability;
pub mod config;
pub mod dragon;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use capability::{Breedable, Damageable, Mountable, Tameable};
pub use config::{
    BreedingConfig, ConfigError, DragonConfig, LifeStageConfig, LocomotionConfig, RidingConfig,
    TamingConfig, VitalsConfig,
};
pub use dragon::{
    AmbientSound, AttackTarget, Body, BreedError, BreedingProtocol, DamageImmunityPolicy, Dragon,
    DragonEvent, GrowthController, InteractionBranch, InteractionOutcome, InteractionReport,
    LocomotionModeController, MateRejection, MountError, OffspringDescriptor, OwnershipProtocol,
    RidingController, Side, StageChange, Steering, TameOutcome, VisualEffect, breed, mate_check,
    mate_eligible, select_interaction, synthesize_name,
};
pub use engine::{DragonEngine, TickReport};
pub use env::{
    BasicNavigation, BasicNavigationFactory, BreedOracle, DefaultBreedTable, Env, HeldItem,
    ItemClass, ItemId, ItemOracle, NameFormatter, NavigationFactory, NavigationKind,
    OracleError, PathNavigation, PcgRng, RandomSource, RiderInput, RiderInputOracle, RngOracle,
    RollStream, SensorOracle, TitleCaseFormatter, compute_seed,
};
pub use error::{DragonError, ErrorSeverity};
pub use state::{
    Actor, Attributes, Breed, DamageSource, DamageTags, Dimensions, DragonReplica, EntityId,
    Facing, LifeStage, PersistedSnapshot, ReplicatedFields, ReplicatedState, ReplicationDelta,
    SyncQueue, Vec3,
};
