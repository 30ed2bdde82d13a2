//! Rider input consumed while the creature is mounted.

use crate::state::{EntityId, Facing, Vec3};

/// Per-tick control state of a rider.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RiderInput {
    /// Unit look vector of the rider.
    pub look: Vec3,
    pub facing: Facing,
    /// Forward intent; negative means backwards.
    pub forward: f32,
    /// Sideways intent; positive is left in the world's yaw convention.
    pub strafe: f32,
    pub jumping: bool,
}

impl RiderInput {
    pub fn has_movement_intent(&self) -> bool {
        self.forward != 0.0 || self.strafe != 0.0
    }
}

pub trait RiderInputOracle: Send + Sync {
    /// Current input of `rider`, or `None` if the host has none this tick.
    fn rider_input(&self, rider: EntityId) -> Option<RiderInput>;
}
