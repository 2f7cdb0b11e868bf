//! Concrete weight factors.

pub mod planetary;

pub use planetary::PlanetaryIndustryFactor;
