//! Runtime implementations of the `dragon-core` oracle traits.
//!
//! Item and breed data are immutable after loading. The world sensors and
//! rider controls are updated by the host between ticks. [`OracleManager`]
//! bundles everything so the simulation can build an [`Env`] on demand.
mod breeds;
mod items;
mod riders;
mod world;

use std::sync::Arc;

use dragon_core::{BasicNavigationFactory, Env, NavigationFactory, PcgRng};

pub use breeds::BreedOracleImpl;
pub use items::ItemOracleImpl;
pub use riders::ScriptedRiders;
pub use world::FlatWorld;

/// Manages all oracle implementations and provides unified access.
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) world: Arc<FlatWorld>,
    pub(crate) riders: Arc<ScriptedRiders>,
    pub(crate) items: Arc<ItemOracleImpl>,
    pub(crate) breeds: Arc<BreedOracleImpl>,
    pub(crate) navigation: Arc<dyn NavigationFactory>,
    pub(crate) rng: PcgRng,
}

impl OracleManager {
    pub fn new(
        world: Arc<FlatWorld>,
        riders: Arc<ScriptedRiders>,
        items: Arc<ItemOracleImpl>,
        breeds: Arc<BreedOracleImpl>,
    ) -> Self {
        Self {
            world,
            riders,
            items,
            breeds,
            navigation: Arc::new(BasicNavigationFactory),
            rng: PcgRng, // PcgRng is stateless
        }
    }

    /// Swaps in another navigation factory (e.g. a real pathfinder).
    pub fn with_navigation(mut self, navigation: Arc<dyn NavigationFactory>) -> Self {
        self.navigation = navigation;
        self
    }

    /// Converts the manager into the oracle bundle the core expects.
    pub fn as_env(&self) -> Env<'_> {
        Env::with_all(
            self.world.as_ref(),
            self.riders.as_ref(),
            self.navigation.as_ref(),
            self.items.as_ref(),
        )
    }

    pub fn world(&self) -> &FlatWorld {
        &self.world
    }

    pub fn riders(&self) -> &ScriptedRiders {
        &self.riders
    }

    pub fn items(&self) -> &ItemOracleImpl {
        &self.items
    }

    pub fn breeds(&self) -> &BreedOracleImpl {
        &self.breeds
    }

    pub fn navigation(&self) -> &dyn NavigationFactory {
        self.navigation.as_ref()
    }

    pub fn rng(&self) -> &PcgRng {
        &self.rng
    }
}

impl Default for OracleManager {
    /// Flat world at y = 64 with the built-in breed table and no items.
    fn default() -> Self {
        Self::new(
            Arc::new(FlatWorld::new(64.0)),
            Arc::new(ScriptedRiders::new()),
            Arc::new(ItemOracleImpl::new()),
            Arc::new(BreedOracleImpl::builtin()),
        )
    }
}
