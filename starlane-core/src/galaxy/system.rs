//! A single solar system: identity, security, planets, and stargate links.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Stable identifier of a solar system.
pub type SystemId = u32;

/// Identifier of a planet type.
pub type PlanetTypeId = u32;

/// A node in the star map. Read-only during a search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolarSystem {
    pub id: SystemId,
    /// Display name, used in logs and renderings. Not guaranteed unique.
    pub name: String,
    /// Conventionally in [-1.0, 1.0] but not clamped.
    pub security_status: f64,
    /// Planet types present at the system. A type may occur more than once;
    /// multiplicity feeds the density term.
    pub planet_type_ids: Vec<PlanetTypeId>,
    /// Ids of directly linked systems, resolved against the map at traversal
    /// time. Empty for an isolated system.
    pub links: Vec<SystemId>,
}

impl SolarSystem {
    pub fn new(id: SystemId, name: impl Into<String>, security_status: f64) -> Self {
        Self {
            id,
            name: name.into(),
            security_status,
            planet_type_ids: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Builder-style helper for assembling fixtures and loaded data.
    pub fn with_planet_types(mut self, planet_type_ids: &[PlanetTypeId]) -> Self {
        self.planet_type_ids.extend_from_slice(planet_type_ids);
        self
    }

    /// Distinct planet types present at this system.
    pub fn distinct_planet_types(&self) -> BTreeSet<PlanetTypeId> {
        self.planet_type_ids.iter().copied().collect()
    }

    pub fn has_links(&self) -> bool {
        !self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_planet_types_collapses_duplicates() {
        let system = SolarSystem::new(30_000_001, "Tanoo", 0.85).with_planet_types(&[11, 12, 11]);
        let distinct = system.distinct_planet_types();
        assert_eq!(distinct.len(), 2);
        assert!(distinct.contains(&11));
        assert!(distinct.contains(&12));
    }

    #[test]
    fn new_system_has_no_links() {
        let system = SolarSystem::new(1, "Isolated", -0.2);
        assert!(!system.has_links());
        assert!(system.planet_type_ids.is_empty());
    }
}
