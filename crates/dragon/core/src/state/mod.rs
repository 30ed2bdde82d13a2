//! Data types shared by the controllers, the tick pipeline and hosts.
//!
//! Hosts read this state freely; authoritative mutation goes through the
//! [`crate::Dragon`] record and [`crate::engine::DragonEngine`].
pub mod persist;
pub mod sync;
pub mod types;

pub use persist::PersistedSnapshot;
pub use sync::{DragonReplica, ReplicatedFields, ReplicatedState, ReplicationDelta, SyncQueue};
pub use types::{
    Actor, Attributes, Breed, DamageSource, DamageTags, Dimensions, EntityId, Facing, LifeStage,
    Vec3,
};
