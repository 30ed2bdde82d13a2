//! World sensors consumed by the locomotion controller.

use crate::state::Vec3;

/// Read-only view of the terrain around the creature.
///
/// Block and material queries stay on the host side; the core only needs the
/// two derived answers below.
pub trait SensorOracle: Send + Sync {
    /// Vertical distance from `position` down to the nearest solid ground.
    fn ground_distance(&self, position: Vec3) -> f32;

    /// Whether `position` is inside water or another liquid.
    fn is_in_liquid(&self, position: Vec3) -> bool;
}
