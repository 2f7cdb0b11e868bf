//! The galaxy model: solar systems, the star map, and whole-map statistics.

pub mod census;
pub mod map;
pub mod system;

pub use census::MapCensus;
pub use map::StarMap;
pub use system::{PlanetTypeId, SolarSystem, SystemId};
