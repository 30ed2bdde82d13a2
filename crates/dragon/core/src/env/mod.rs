//! Traits describing the host world the creature lives in.
//!
//! Oracles expose terrain sensing, rider input, item classification and
//! navigation construction. The [`Env`] aggregate bundles them so the tick
//! pipeline can reach everything it needs without hard coupling to concrete
//! implementations.
mod breeds;
mod error;
mod items;
mod names;
mod navigation;
mod riders;
mod rng;
mod sensors;

pub use breeds::{BreedOracle, DefaultBreedTable};
pub use error::OracleError;
pub use items::{HeldItem, ItemClass, ItemId, ItemOracle};
pub use names::{NameFormatter, TitleCaseFormatter};
pub use navigation::{
    BasicNavigation, BasicNavigationFactory, NavigationFactory, NavigationKind, PathNavigation,
};
pub use riders::{RiderInput, RiderInputOracle};
pub use rng::{PcgRng, RandomSource, RngOracle, RollStream, compute_seed};
pub use sensors::SensorOracle;

/// Aggregates the read-only oracles required by the tick pipeline and the
/// interaction protocol.
#[derive(Clone, Copy, Default)]
pub struct Env<'a> {
    sensors: Option<&'a dyn SensorOracle>,
    riders: Option<&'a dyn RiderInputOracle>,
    navigation: Option<&'a dyn NavigationFactory>,
    items: Option<&'a dyn ItemOracle>,
}

impl<'a> Env<'a> {
    pub fn new(
        sensors: Option<&'a dyn SensorOracle>,
        riders: Option<&'a dyn RiderInputOracle>,
        navigation: Option<&'a dyn NavigationFactory>,
        items: Option<&'a dyn ItemOracle>,
    ) -> Self {
        Self {
            sensors,
            riders,
            navigation,
            items,
        }
    }

    pub fn with_all(
        sensors: &'a dyn SensorOracle,
        riders: &'a dyn RiderInputOracle,
        navigation: &'a dyn NavigationFactory,
        items: &'a dyn ItemOracle,
    ) -> Self {
        Self::new(Some(sensors), Some(riders), Some(navigation), Some(items))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the SensorOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SensorsNotAvailable` if no sensor oracle was provided.
    pub fn sensors(&self) -> Result<&'a dyn SensorOracle, OracleError> {
        self.sensors.ok_or(OracleError::SensorsNotAvailable)
    }

    /// Returns the RiderInputOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RidersNotAvailable` if no rider oracle was provided.
    pub fn riders(&self) -> Result<&'a dyn RiderInputOracle, OracleError> {
        self.riders.ok_or(OracleError::RidersNotAvailable)
    }

    /// Returns the NavigationFactory, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::NavigationNotAvailable` if no factory was provided.
    pub fn navigation(&self) -> Result<&'a dyn NavigationFactory, OracleError> {
        self.navigation.ok_or(OracleError::NavigationNotAvailable)
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no item oracle was provided.
    pub fn items(&self) -> Result<&'a dyn ItemOracle, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }
}
