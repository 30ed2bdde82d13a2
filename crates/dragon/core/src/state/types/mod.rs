mod attributes;
mod common;
mod damage;

pub use attributes::Attributes;
pub use common::{Actor, Breed, Dimensions, EntityId, Facing, LifeStage, Vec3};
pub use damage::{DamageSource, DamageTags};
