//! Damage intake, the death sequence and scale-derived body metrics.

use crate::env::RandomSource;
use crate::state::{DamageSource, Dimensions, EntityId, Vec3};

use super::{Dragon, DragonEvent};

/// A potential attack target as seen by the combat gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackTarget {
    pub id: EntityId,
    /// Owner of the target, if it is a tamed creature.
    pub owner: Option<EntityId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum AmbientSound {
    Growl,
    Breathe,
}

impl Dragon {
    pub fn is_invulnerable_to(&self, source: &DamageSource) -> bool {
        self.immunity
            .is_invulnerable(source, self.id, self.controlling_passenger())
    }

    /// Applies incoming damage. Returns false if the hit was ignored.
    ///
    /// Any accepted hit makes the creature stand up. Reaching zero health
    /// starts the death sequence.
    pub fn hurt(&mut self, source: &DamageSource, amount: f32) -> bool {
        if self.is_dying() || self.is_removed() || self.is_invulnerable_to(source) {
            return false;
        }

        self.set_sitting(false);
        self.health = (self.health - amount).max(0.0);
        self.events.push(DragonEvent::Hurt { amount });

        if self.health <= 0.0 {
            self.start_death();
        }
        true
    }

    /// Begins the death sequence; cannot be cancelled.
    pub fn start_death(&mut self) {
        if self.is_dying() {
            return;
        }
        self.health = 0.0;
        self.death_timer = Some(0);
        self.unmount();
        self.body.motion = Vec3::ZERO;
        self.events.push(DragonEvent::DeathStarted);
    }

    /// One tick of the death sequence: pins the body in place and counts the
    /// timer. The creature is removed once the timer reaches the configured
    /// maximum.
    pub(crate) fn tick_death(&mut self) {
        let Some(timer) = self.death_timer else {
            return;
        };

        self.unmount();
        self.body.motion = Vec3::ZERO;
        self.body.facing.yaw = self.body.prev_facing.yaw;
        self.body.head_yaw = self.body.prev_head_yaw;

        if timer >= self.config.vitals.max_death_time && !self.removed {
            self.removed = true;
            self.events.push(DragonEvent::Removed);
        }
        self.death_timer = Some(timer.saturating_add(1));
    }

    /// A saddled creature drops its saddle when it dies.
    pub fn drops_saddle(&self) -> bool {
        self.saddled
    }

    /// Fall damage for a drop of `distance` blocks. Flight-capable creatures
    /// take none.
    pub fn fall_damage(&self, distance: f32, multiplier: f32) -> f32 {
        if !self.life_stage().is_hatchling() {
            return 0.0;
        }
        ((distance - 3.0) * multiplier).ceil().max(0.0)
    }

    pub fn can_attack(&self) -> bool {
        !self.life_stage().is_hatchling() && !self.is_dying()
    }

    /// Never attacks itself or anything owned by its own owner.
    pub fn should_attack(&self, target: &AttackTarget) -> bool {
        if target.id == self.id {
            return false;
        }
        match target.owner {
            Some(owner) => Some(owner) != self.owner(),
            None => true,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.config.vitals.base_width, self.config.vitals.base_height)
            .scaled(self.scale())
    }

    /// Vertical offset of the rider seat above the creature's position.
    pub fn seat_height(&self) -> f64 {
        let riding = &self.config.riding;
        let base = if self.sitting {
            riding.seat_height_sitting
        } else {
            riding.seat_height
        };
        base * self.scale() as f64
    }

    /// World position of the rider, given the rider's own vertical offset.
    pub fn seat_position(&self, rider_offset: f64) -> Vec3 {
        let scale = self.scale() as f64;
        let local = Vec3::new(0.0, self.seat_height() + rider_offset, 0.8 * scale);
        local.rotate_yaw((-self.body.facing.yaw).to_radians()) + self.body.position
    }

    pub fn eye_height(&self) -> f32 {
        let eye = self.config.vitals.eye_height * self.scale();
        if self.sitting { eye * 0.8 } else { eye }
    }

    pub fn sound_volume(&self) -> f32 {
        self.scale()
    }

    pub fn sound_pitch(&self) -> f32 {
        self.scale() - 2.0
    }

    pub fn ambient_sound<R: RandomSource + ?Sized>(&self, rng: &mut R) -> AmbientSound {
        if rng.one_in(self.config.vitals.growl_odds) {
            AmbientSound::Growl
        } else {
            AmbientSound::Breathe
        }
    }
}
