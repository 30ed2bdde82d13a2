//! Mount occupancy and rider-input steering.

use std::f32::consts::PI;

use crate::env::RiderInput;
use crate::error::{DragonError, ErrorSeverity};
use crate::state::{EntityId, LifeStage, Vec3};

/// Why an actor may not mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("creature is not tamed")]
    NotTamed,

    #[error("{actor} is not the owner")]
    NotOwner { actor: EntityId },

    #[error("creature has no saddle")]
    NotSaddled,

    #[error("a {stage} cannot carry a rider")]
    NotAdult { stage: LifeStage },

    #[error("already ridden by {rider}")]
    Occupied { rider: EntityId },

    #[error("creature is dying")]
    Dying,
}

impl DragonError for MountError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotTamed => "MOUNT_NOT_TAMED",
            Self::NotOwner { .. } => "MOUNT_NOT_OWNER",
            Self::NotSaddled => "MOUNT_NOT_SADDLED",
            Self::NotAdult { .. } => "MOUNT_NOT_ADULT",
            Self::Occupied { .. } => "MOUNT_OCCUPIED",
            Self::Dying => "MOUNT_DYING",
        }
    }
}

/// Output of one steering step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Steering {
    /// Movement target; the current position when there is no intent.
    pub waypoint: Vec3,
    /// Head yaw to adopt (the rider's yaw).
    pub head_yaw: f32,
    /// Body pitch to adopt (half the rider's pitch).
    pub pitch: f32,
    /// Jump was pressed this tick and not the previous one.
    pub jump_edge: bool,
}

/// Single-seat occupancy plus the jump-edge latch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RidingController {
    rider: Option<EntityId>,
    was_jumping: bool,
}

impl RidingController {
    /// The first (and only) occupant.
    pub fn controlling_passenger(&self) -> Option<EntityId> {
        self.rider
    }

    pub fn is_ridden(&self) -> bool {
        self.rider.is_some()
    }

    pub(crate) fn seat(&mut self, rider: EntityId) {
        self.rider = Some(rider);
        self.was_jumping = false;
    }

    /// Clears the seat, returning the previous occupant.
    pub fn unmount(&mut self) -> Option<EntityId> {
        self.was_jumping = false;
        self.rider.take()
    }

    /// Maps rider input to a waypoint `reach` units away along the rider's
    /// look vector, rotated for backwards or sideways intent.
    pub fn steer(&mut self, input: &RiderInput, position: Vec3, reach: f64) -> Steering {
        let jump_edge = input.jumping && !self.was_jumping;
        self.was_jumping = input.jumping;

        let waypoint = if input.has_movement_intent() {
            let look = input.look.rotate_yaw(intent_rotation(input.forward, input.strafe));
            position + look * reach
        } else {
            position
        };

        Steering {
            waypoint,
            head_yaw: input.facing.yaw,
            pitch: input.facing.pitch * 0.5,
            jump_edge,
        }
    }
}

/// Backwards beats sideways; forward or no intent keeps the look direction.
fn intent_rotation(forward: f32, strafe: f32) -> f32 {
    if forward < 0.0 {
        PI
    } else if strafe > 0.0 {
        PI * 0.5
    } else if strafe < 0.0 {
        PI * -0.5
    } else {
        0.0
    }
}
