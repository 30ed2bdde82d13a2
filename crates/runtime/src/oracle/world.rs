//! Flat terrain with an optional water layer.
use dragon_core::{SensorOracle, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlatWorld {
    ground_y: f64,
    /// Surface of a water layer covering the ground, if any.
    water_surface: Option<f64>,
}

impl FlatWorld {
    pub const fn new(ground_y: f64) -> Self {
        Self {
            ground_y,
            water_surface: None,
        }
    }

    #[must_use]
    pub const fn with_water(mut self, surface: f64) -> Self {
        self.water_surface = Some(surface);
        self
    }

    pub fn ground_y(&self) -> f64 {
        self.ground_y
    }
}

impl SensorOracle for FlatWorld {
    fn ground_distance(&self, position: Vec3) -> f32 {
        (position.y - self.ground_y).max(0.0) as f32
    }

    fn is_in_liquid(&self, position: Vec3) -> bool {
        self.water_surface
            .is_some_and(|surface| position.y < surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_height_above_ground() {
        let world = FlatWorld::new(64.0);
        assert_eq!(world.ground_distance(Vec3::new(0.0, 70.0, 0.0)), 6.0);
        assert_eq!(world.ground_distance(Vec3::new(0.0, 60.0, 0.0)), 0.0);
        assert!(!world.is_in_liquid(Vec3::new(0.0, 64.0, 0.0)));
    }

    #[test]
    fn water_layer_counts_as_liquid() {
        let world = FlatWorld::new(60.0).with_water(63.0);
        assert!(world.is_in_liquid(Vec3::new(0.0, 62.0, 0.0)));
        assert!(!world.is_in_liquid(Vec3::new(0.0, 63.5, 0.0)));
    }
}
