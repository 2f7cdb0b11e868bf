//! Planetary-industry weighting: values a system by remaining jump budget,
//! planet-type diversity, planet-type density, and security band.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use starlane_core::constants::{
    DEFAULT_JUMP_WEIGHT, DEFAULT_MAX_JUMPS, DEFAULT_SECURITY_WEIGHT, DEFAULT_TYPE_DENSITY_WEIGHT,
    DEFAULT_TYPE_DIVERSITY_WEIGHT,
};
use starlane_core::galaxy::{PlanetTypeId, SolarSystem};
use starlane_core::scoring::{SecurityPreference, SystemScore, WeightBreakdown};
use starlane_core::traits::IWeightFactor;

/// Weighting configuration for planetary-industry searches.
///
/// Every weight accepts negative values, reversing its effect (a negative
/// `jump_weight` prefers more jumps), and 0 disables the term. Weights are
/// integers so that otherwise-equal systems cannot drift apart on floating
/// point noise; only the density term contributes a truncated fraction.
#[derive(Debug, Clone)]
pub struct PlanetaryIndustryFactor {
    /// Planet types the search must account for.
    pub planet_types_desired: BTreeSet<PlanetTypeId>,
    /// Hop radius used by the jump term. Kept in sync with the calculator.
    pub max_jumps: u32,
    /// Value of each remaining jump below the radius.
    pub jump_weight: i32,
    /// Value of each distinct desired type present at a system.
    pub type_diversity_weight: i32,
    /// Value of repeated planets of a desired type.
    pub type_density_weight: i32,
    /// Average the per-planet density counts instead of summing them. The
    /// average is truncated before weighting, keeping the fraction stable
    /// across otherwise-equal systems.
    pub use_average_density: bool,
    /// Value of the security decile after the preference transform.
    pub security_weight: i32,
    pub security_preference: SecurityPreference,
}

impl Default for PlanetaryIndustryFactor {
    fn default() -> Self {
        Self {
            planet_types_desired: BTreeSet::new(),
            max_jumps: DEFAULT_MAX_JUMPS,
            jump_weight: DEFAULT_JUMP_WEIGHT,
            type_diversity_weight: DEFAULT_TYPE_DIVERSITY_WEIGHT,
            type_density_weight: DEFAULT_TYPE_DENSITY_WEIGHT,
            use_average_density: true,
            security_weight: DEFAULT_SECURITY_WEIGHT,
            security_preference: SecurityPreference::HighSec,
        }
    }
}

impl PlanetaryIndustryFactor {
    /// Default weighting for a given desired-type set.
    pub fn for_types(desired: impl IntoIterator<Item = PlanetTypeId>) -> Self {
        Self {
            planet_types_desired: desired.into_iter().collect(),
            ..Self::default()
        }
    }

    fn jump_value(&self, jumps_from_origin: u32) -> f64 {
        (self.max_jumps as i64 - jumps_from_origin as i64) as f64 * self.jump_weight as f64
    }

    fn diversity_value(&self, planet_type_ids: &[PlanetTypeId]) -> f64 {
        let distinct = planet_type_ids
            .iter()
            .filter(|planet_type| self.planet_types_desired.contains(planet_type))
            .collect::<BTreeSet<_>>();
        (distinct.len() as i64 * self.type_diversity_weight as i64) as f64
    }

    fn density_value(&self, planet_type_ids: &[PlanetTypeId]) -> f64 {
        let mut desired_counts: FxHashMap<PlanetTypeId, u64> = FxHashMap::default();
        for planet_type in planet_type_ids {
            if self.planet_types_desired.contains(planet_type) {
                *desired_counts.entry(*planet_type).or_insert(0) += 1;
            }
        }
        // One count per planet at the system; undesired types count 0.
        let counts: Vec<u64> = planet_type_ids
            .iter()
            .map(|planet_type| desired_counts.get(planet_type).copied().unwrap_or(0))
            .collect();

        let density = if self.use_average_density {
            if counts.is_empty() {
                0.0
            } else {
                let average = counts.iter().sum::<u64>() as f64 / counts.len() as f64;
                (average * 100.0).floor() / 1000.0
            }
        } else {
            counts.iter().sum::<u64>() as f64
        };
        density * self.type_density_weight as f64
    }

    fn security_value(&self, security_status: f64) -> f64 {
        let mut decile = (security_status * 10.0).floor();
        match self.security_preference {
            SecurityPreference::HighSec => {}
            SecurityPreference::LowSec => {
                // Fold both ends toward the low-sec deciles. A decile of 0 or
                // below stays where it is.
                if decile > 0.0 && decile < 5.0 {
                    decile += 5.0;
                } else if decile >= 5.0 {
                    decile -= 5.0;
                }
            }
            SecurityPreference::NullSec => decile = -decile,
        }
        decile / 10.0 * self.security_weight as f64
    }
}

impl IWeightFactor for PlanetaryIndustryFactor {
    fn score(&self, system: &SolarSystem, jumps_from_origin: u32) -> SystemScore {
        let breakdown = WeightBreakdown {
            jump_value: self.jump_value(jumps_from_origin),
            diversity_value: self.diversity_value(&system.planet_type_ids),
            density_value: self.density_value(&system.planet_type_ids),
            security_value: self.security_value(system.security_status),
        };
        let matched = system
            .distinct_planet_types()
            .intersection(&self.planet_types_desired)
            .copied()
            .collect();
        SystemScore {
            weight: breakdown.total(),
            breakdown,
            matched,
        }
    }

    fn set_max_jumps(&mut self, max_jumps: u32) {
        self.max_jumps = max_jumps;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system_with_planets(planet_type_ids: &[PlanetTypeId], security: f64) -> SolarSystem {
        SolarSystem::new(1, "Test", security).with_planet_types(planet_type_ids)
    }

    #[test]
    fn jump_value_scales_with_remaining_jumps() {
        let factor = PlanetaryIndustryFactor::for_types([11]);
        let score = factor.score(&system_with_planets(&[], 1.0), 1);
        // max_jumps 3, one jump spent, 500 per remaining jump.
        assert_eq!(score.breakdown.jump_value, 1000.0);
    }

    #[test]
    fn negative_jump_weight_prefers_distance() {
        let mut factor = PlanetaryIndustryFactor::for_types([11]);
        factor.jump_weight = -500;
        let near = factor.score(&system_with_planets(&[], 1.0), 0);
        let far = factor.score(&system_with_planets(&[], 1.0), 3);
        assert!(far.breakdown.jump_value > near.breakdown.jump_value);
    }

    #[test]
    fn diversity_counts_distinct_types_not_occurrences() {
        let factor = PlanetaryIndustryFactor::for_types([11, 12, 13]);
        let score = factor.score(&system_with_planets(&[11, 11, 12, 99], 1.0), 0);
        assert_eq!(score.breakdown.diversity_value, 200.0);
    }

    #[test]
    fn average_density_truncates_to_two_decimals() {
        let factor = PlanetaryIndustryFactor::for_types([11, 12]);
        // Counts per planet are [2, 2, 1, 0]; average 1.25.
        // floor(1.25 * 100) / 1000 = 0.125, times weight 10.
        let score = factor.score(&system_with_planets(&[11, 11, 12, 99], 1.0), 0);
        assert_eq!(score.breakdown.density_value, 1.25);
    }

    #[test]
    fn summed_density_counts_every_planet() {
        let mut factor = PlanetaryIndustryFactor::for_types([11, 12]);
        factor.use_average_density = false;
        // Counts per planet are [2, 2, 1, 0]; sum 5, times weight 10.
        let score = factor.score(&system_with_planets(&[11, 11, 12, 99], 1.0), 0);
        assert_eq!(score.breakdown.density_value, 50.0);
    }

    #[test]
    fn density_of_planetless_system_is_zero() {
        let factor = PlanetaryIndustryFactor::for_types([11]);
        let score = factor.score(&system_with_planets(&[], 1.0), 0);
        assert_eq!(score.breakdown.density_value, 0.0);
    }

    #[test]
    fn high_sec_preference_keeps_decile() {
        let mut factor = PlanetaryIndustryFactor::for_types([]);
        factor.security_weight = 10;
        let score = factor.score(&system_with_planets(&[], 0.45), 0);
        // floor(4.5) = 4, then 4 / 10 * 10.
        assert_eq!(score.breakdown.security_value, 4.0);
    }

    #[test]
    fn low_sec_preference_folds_both_ends() {
        let mut factor = PlanetaryIndustryFactor::for_types([]);
        factor.security_weight = 10;
        factor.security_preference = SecurityPreference::LowSec;

        // High-sec decile 8 folds down to 3.
        let high = factor.score(&system_with_planets(&[], 0.85), 0);
        assert_eq!(high.breakdown.security_value, 3.0);
        // Decile 4 folds up to 9.
        let low = factor.score(&system_with_planets(&[], 0.45), 0);
        assert_eq!(low.breakdown.security_value, 9.0);
        // Decile 5 is on the fold and drops to 0.
        let edge = factor.score(&system_with_planets(&[], 0.5), 0);
        assert_eq!(edge.breakdown.security_value, 0.0);
        // Zero and negative deciles stay put.
        let zero = factor.score(&system_with_planets(&[], 0.05), 0);
        assert_eq!(zero.breakdown.security_value, 0.0);
        let null = factor.score(&system_with_planets(&[], -0.45), 0);
        assert_eq!(null.breakdown.security_value, -5.0);
    }

    #[test]
    fn null_sec_preference_negates_decile() {
        let mut factor = PlanetaryIndustryFactor::for_types([]);
        factor.security_weight = 10;
        factor.security_preference = SecurityPreference::NullSec;
        let score = factor.score(&system_with_planets(&[], -0.9), 0);
        assert_eq!(score.breakdown.security_value, 9.0);
    }

    #[test]
    fn matched_is_intersection_of_desired_and_present() {
        let factor = PlanetaryIndustryFactor::for_types([11, 12, 13]);
        let score = factor.score(&system_with_planets(&[11, 12, 99], 1.0), 0);
        assert_eq!(score.matched, BTreeSet::from([11, 12]));
    }

    #[test]
    fn weight_is_sum_of_breakdown() {
        let factor = PlanetaryIndustryFactor::for_types([11]);
        let score = factor.score(&system_with_planets(&[11, 11], 0.95), 1);
        assert_eq!(score.weight, score.breakdown.total());
    }
}
