//! # starlane-core
//!
//! Foundation crate for the Starlane map analysis engine.
//! Defines the galaxy model, scoring vocabulary, traits, errors, and constants.
//! Every other crate in the workspace depends on this.

pub mod constants;
pub mod errors;
pub mod galaxy;
pub mod scoring;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use errors::{ConfigError, GraphError, StarlaneError, StarlaneResult};
pub use galaxy::{MapCensus, PlanetTypeId, SolarSystem, StarMap, SystemId};
pub use scoring::{SecurityPreference, SystemScore, WeightBreakdown, WeightMethod};
pub use traits::IWeightFactor;
