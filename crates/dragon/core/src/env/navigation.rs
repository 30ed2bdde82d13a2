//! Navigation-strategy capability.
//!
//! Concrete pathfinding is a host concern. The creature owns exactly one
//! boxed [`PathNavigation`] and replaces it wholesale when its locomotion
//! mode flips, so no path state survives a ground/flight switch.

use crate::state::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum NavigationKind {
    Ground,
    Flight,
}

impl NavigationKind {
    pub const fn for_flying(flying: bool) -> Self {
        if flying { Self::Flight } else { Self::Ground }
    }
}

pub trait PathNavigation: Send {
    fn kind(&self) -> NavigationKind;

    fn destination(&self) -> Option<Vec3>;

    fn set_destination(&mut self, target: Vec3);

    fn clear_path(&mut self);

    fn has_path(&self) -> bool {
        self.destination().is_some()
    }
}

/// Builds navigation strategies for a locomotion mode.
pub trait NavigationFactory: Send + Sync {
    fn create(&self, kind: NavigationKind) -> Box<dyn PathNavigation>;
}

/// Destination-only strategy used when the host plugs in no pathfinder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasicNavigation {
    kind: NavigationKind,
    destination: Option<Vec3>,
}

impl BasicNavigation {
    pub const fn new(kind: NavigationKind) -> Self {
        Self {
            kind,
            destination: None,
        }
    }
}

impl PathNavigation for BasicNavigation {
    fn kind(&self) -> NavigationKind {
        self.kind
    }

    fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    fn set_destination(&mut self, target: Vec3) {
        self.destination = Some(target);
    }

    fn clear_path(&mut self) {
        self.destination = None;
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BasicNavigationFactory;

impl NavigationFactory for BasicNavigationFactory {
    fn create(&self, kind: NavigationKind) -> Box<dyn PathNavigation> {
        Box::new(BasicNavigation::new(kind))
    }
}
