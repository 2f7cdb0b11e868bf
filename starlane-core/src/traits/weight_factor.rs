use crate::galaxy::SolarSystem;
use crate::scoring::SystemScore;

/// A pluggable weighting policy for systems reached during a search.
///
/// The calculator depends only on this contract. A factor carries everything
/// that stays constant while moving from system to system; per-call inputs
/// are the system under evaluation and its hop distance from the origin.
pub trait IWeightFactor: Send + Sync {
    /// Weigh one system at the given hop distance from the search origin.
    fn score(&self, system: &SolarSystem, jumps_from_origin: u32) -> SystemScore;

    /// Keep the factor's own hop cap in sync with the calculator's.
    /// Factors without a hop-dependent term may ignore this.
    fn set_max_jumps(&mut self, _max_jumps: u32) {}
}
