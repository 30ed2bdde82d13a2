//! Rider controls set by the host between ticks.
use std::collections::HashMap;
use std::sync::RwLock;

use dragon_core::{EntityId, RiderInput, RiderInputOracle};

/// Latest input per rider. Inputs persist until replaced or cleared, like a
/// held key.
#[derive(Default)]
pub struct ScriptedRiders {
    inputs: RwLock<HashMap<EntityId, RiderInput>>,
}

impl ScriptedRiders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&self, rider: EntityId, input: RiderInput) {
        match self.inputs.write() {
            Ok(mut inputs) => {
                inputs.insert(rider, input);
            }
            Err(_) => tracing::warn!("Rider input lock poisoned; dropping input for {}", rider),
        }
    }

    pub fn clear(&self, rider: EntityId) {
        if let Ok(mut inputs) = self.inputs.write() {
            inputs.remove(&rider);
        }
    }
}

impl RiderInputOracle for ScriptedRiders {
    fn rider_input(&self, rider: EntityId) -> Option<RiderInput> {
        self.inputs
            .read()
            .ok()
            .and_then(|inputs| inputs.get(&rider).copied())
    }
}
