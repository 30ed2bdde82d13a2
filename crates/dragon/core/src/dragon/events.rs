use crate::env::NavigationKind;
use crate::state::{Dimensions, EntityId, LifeStage, Vec3};

/// Visual-effect triggers; particles and animation stay on the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum VisualEffect {
    TameSuccess,
    TameFailure,
    Heal,
}

/// Actuator commands and notable transitions, in the order they happened.
///
/// The creature appends to an outbox during a tick or an interaction; the
/// host drains it with [`crate::Dragon::drain_events`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragonEvent {
    StageChanged {
        from: LifeStage,
        to: LifeStage,
    },
    /// Collision box was rebuilt; position and ground contact are unchanged.
    SizeRecalculated {
        dimensions: Dimensions,
    },
    FlightModeChanged {
        flying: bool,
    },
    FollowRangeChanged {
        value: f32,
    },
    NavigationReplaced {
        kind: NavigationKind,
    },
    WaypointSet {
        target: Vec3,
        speed: f64,
    },
    LiftOff {
        impulse: f64,
    },
    VisualEffect(VisualEffect),
    Tamed {
        owner: EntityId,
    },
    Saddled,
    Healed {
        amount: f32,
    },
    SitChanged {
        sitting: bool,
    },
    Mounted {
        rider: EntityId,
    },
    Dismounted {
        rider: EntityId,
    },
    Hurt {
        amount: f32,
    },
    DeathStarted,
    Removed,
}
