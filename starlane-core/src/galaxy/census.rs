//! Whole-map statistics: planet totals, per-type counts, and share breakdowns.

use std::collections::BTreeMap;

use serde::Serialize;

use super::map::StarMap;
use super::system::PlanetTypeId;

/// Aggregate statistics over a fully loaded star map, consumed by reporting.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MapCensus {
    pub total_systems: usize,
    pub total_planets: usize,
    /// Occurrences of each planet type across the whole map.
    pub planets_by_type: BTreeMap<PlanetTypeId, u64>,
    /// Each type's fraction of all planets, in [0.0, 1.0].
    pub type_share: BTreeMap<PlanetTypeId, f64>,
    pub mean_planets_per_system: f64,
    /// Mean over populated systems of each type's within-system planet
    /// fraction. Systems with no planets are skipped.
    pub mean_type_share_per_system: BTreeMap<PlanetTypeId, f64>,
}

impl MapCensus {
    /// Collect statistics in one pass over the map's systems.
    pub fn collect(map: &StarMap) -> Self {
        let mut planets_by_type: BTreeMap<PlanetTypeId, u64> = BTreeMap::new();
        let mut share_sums: BTreeMap<PlanetTypeId, f64> = BTreeMap::new();
        let mut total_planets = 0usize;
        let mut populated_systems = 0usize;

        for system in map.systems() {
            let planet_count = system.planet_type_ids.len();
            total_planets += planet_count;
            if planet_count == 0 {
                continue;
            }
            populated_systems += 1;

            let mut in_system: BTreeMap<PlanetTypeId, u64> = BTreeMap::new();
            for &planet_type in &system.planet_type_ids {
                *planets_by_type.entry(planet_type).or_insert(0) += 1;
                *in_system.entry(planet_type).or_insert(0) += 1;
            }
            for (planet_type, count) in in_system {
                *share_sums.entry(planet_type).or_insert(0.0) +=
                    count as f64 / planet_count as f64;
            }
        }

        let total_systems = map.len();
        let type_share = planets_by_type
            .iter()
            .map(|(&planet_type, &count)| {
                let share = if total_planets == 0 {
                    0.0
                } else {
                    count as f64 / total_planets as f64
                };
                (planet_type, share)
            })
            .collect();
        let mean_type_share_per_system = share_sums
            .into_iter()
            .map(|(planet_type, sum)| (planet_type, sum / populated_systems as f64))
            .collect();
        let mean_planets_per_system = if total_systems == 0 {
            0.0
        } else {
            total_planets as f64 / total_systems as f64
        };

        Self {
            total_systems,
            total_planets,
            planets_by_type,
            type_share,
            mean_planets_per_system,
            mean_type_share_per_system,
        }
    }
}
