//! Persisted snapshot of the creature-specific fields.

/// Fields that survive a save/reload cycle.
///
/// Keys match the established save format (`Saddle`, `TicksAlive`,
/// `ReproCount`). Every field is optional on load: a missing `TicksAlive`
/// keeps the default adult stage, the others fall back to `false` / `0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersistedSnapshot {
    #[cfg_attr(feature = "serde", serde(rename = "Saddle", default))]
    pub saddle: bool,

    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "TicksAlive",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub ticks_alive: Option<u32>,

    #[cfg_attr(feature = "serde", serde(rename = "ReproCount", default))]
    pub repro_count: u8,
}
