//! The star map: id-keyed systems plus the planet-type name registry.

use rustc_hash::FxHashMap;

use crate::errors::GraphError;

use super::system::{PlanetTypeId, SolarSystem, SystemId};

/// The full graph of linked solar systems.
///
/// Adjacency is stored as ids on each system and resolved here, so a link
/// referencing a missing system surfaces as [`GraphError::DanglingLink`]
/// instead of being skipped silently.
#[derive(Debug, Clone, Default)]
pub struct StarMap {
    systems: FxHashMap<SystemId, SolarSystem>,
    planet_type_names: FxHashMap<PlanetTypeId, String>,
}

impl StarMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a system, replacing any previous entry with the same id.
    pub fn add_system(&mut self, system: SolarSystem) {
        self.systems.insert(system.id, system);
    }

    /// Link two systems in both directions. Either id may be unknown at call
    /// time; links are validated when traversed.
    pub fn connect(&mut self, a: SystemId, b: SystemId) {
        if let Some(system) = self.systems.get_mut(&a) {
            if !system.links.contains(&b) {
                system.links.push(b);
            }
        }
        if let Some(system) = self.systems.get_mut(&b) {
            if !system.links.contains(&a) {
                system.links.push(a);
            }
        }
    }

    pub fn get(&self, id: SystemId) -> Option<&SolarSystem> {
        self.systems.get(&id)
    }

    /// Resolve a system id, failing on an unknown id.
    pub fn require(&self, id: SystemId) -> Result<&SolarSystem, GraphError> {
        self.systems.get(&id).ok_or(GraphError::UnknownSystem { id })
    }

    /// Resolve the systems linked to `id`, in link order.
    pub fn linked_systems(&self, id: SystemId) -> Result<Vec<&SolarSystem>, GraphError> {
        let system = self.require(id)?;
        let mut linked = Vec::with_capacity(system.links.len());
        for &link_id in &system.links {
            let target = self
                .systems
                .get(&link_id)
                .ok_or(GraphError::DanglingLink { from: id, to: link_id })?;
            linked.push(target);
        }
        Ok(linked)
    }

    /// Register a display name for a planet type.
    pub fn name_planet_type(&mut self, id: PlanetTypeId, name: impl Into<String>) {
        self.planet_type_names.insert(id, name.into());
    }

    /// Display name for a planet type, falling back to the numeric id.
    pub fn planet_type_name(&self, id: PlanetTypeId) -> String {
        match self.planet_type_names.get(&id) {
            Some(name) => name.clone(),
            None => id.to_string(),
        }
    }

    pub fn systems(&self) -> impl Iterator<Item = &SolarSystem> {
        self.systems.values()
    }

    /// System ids in ascending order. Batch runs iterate in this order so
    /// their output is reproducible.
    pub fn system_ids_sorted(&self) -> Vec<SystemId> {
        let mut ids: Vec<SystemId> = self.systems.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}
