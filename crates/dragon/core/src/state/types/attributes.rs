/// Explicit per-creature attribute block.
///
/// Owned by the creature record and written directly by the controller that
/// owns each value; `follow_range` is the only one that changes at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Attributes {
    pub move_speed: f64,
    pub max_health: f32,
    pub attack_damage: f32,
    pub knockback_resist: f32,
    pub flying_speed: f64,
    pub follow_range: f32,
}

impl Attributes {
    pub const BASE_SPEED_GROUND: f64 = 0.3;
    pub const BASE_SPEED_FLYING: f64 = 0.6;
    pub const BASE_DAMAGE: f32 = 18.0;
    pub const BASE_HEALTH: f32 = 940.0;
    pub const BASE_FOLLOW_RANGE: f32 = 16.0;
    pub const BASE_KB_RESISTANCE: f32 = 1.0;
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            move_speed: Self::BASE_SPEED_GROUND,
            max_health: Self::BASE_HEALTH,
            attack_damage: Self::BASE_DAMAGE,
            knockback_resist: Self::BASE_KB_RESISTANCE,
            flying_speed: Self::BASE_SPEED_FLYING,
            follow_range: Self::BASE_FOLLOW_RANGE,
        }
    }
}
