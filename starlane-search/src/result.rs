//! Per-system, per-run result records and their report renderings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use starlane_core::galaxy::{PlanetTypeId, SolarSystem, StarMap, SystemId};
use starlane_core::scoring::{SystemScore, WeightBreakdown};

const LEVEL_ONE_SPACING: usize = 30;
const SIMPLE_SPACING: usize = 5;

pub(crate) struct SymbolSet {
    pub(crate) title_prefix: &'static str,
    pub(crate) title_suffix: &'static str,
    pub(crate) level_one: &'static str,
    pub(crate) level_two: &'static str,
    pub(crate) end_italic: &'static str,
    pub(crate) new_line: &'static str,
    pub(crate) italic: &'static str,
}

pub(crate) const MARKUP_SYMBOLS: SymbolSet = SymbolSet {
    title_prefix: "<b>",
    title_suffix: "</b>",
    level_one: "<br>&#8594;<i> ",
    level_two: "<br>  &#8618;<i> ",
    end_italic: "</i>",
    new_line: "<br>",
    italic: "<i>",
};

pub(crate) const PLAIN_SYMBOLS: SymbolSet = SymbolSet {
    title_prefix: ">>>>>__________ ",
    title_suffix: " __________<<<<<",
    level_one: "\n -> ",
    level_two: "\n   => ",
    end_italic: "*",
    new_line: "\n",
    italic: "*",
};

fn pad(words: &str, width: usize) -> String {
    format!("{words:<width$}")
}

/// One weighed system within a single run.
///
/// Created when a system is first scored; dropped again within the same run
/// if its subtree cannot complete the target set; otherwise never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightResult {
    pub system_id: SystemId,
    pub system_name: String,
    pub origin_id: SystemId,
    pub origin_name: String,
    pub jumps_from_origin: u32,
    pub weight: f64,
    pub breakdown: WeightBreakdown,
    /// Occurrences of each desired planet type found at the system.
    pub found_types: BTreeMap<PlanetTypeId, u32>,
}

impl WeightResult {
    /// Build the record for a scored system, ready to chain into the run's
    /// result map.
    pub fn populate(
        system: &SolarSystem,
        origin: &SolarSystem,
        jumps_from_origin: u32,
        score: &SystemScore,
    ) -> Self {
        let mut found_types: BTreeMap<PlanetTypeId, u32> = BTreeMap::new();
        for planet_type in &system.planet_type_ids {
            if score.matched.contains(planet_type) {
                *found_types.entry(*planet_type).or_insert(0) += 1;
            }
        }
        Self {
            system_id: system.id,
            system_name: system.name.clone(),
            origin_id: origin.id,
            origin_name: origin.name.clone(),
            jumps_from_origin,
            weight: score.weight,
            breakdown: score.breakdown,
            found_types,
        }
    }

    /// Descending sort key for a run's results.
    pub fn sort_value(&self) -> f64 {
        self.weight
    }

    /// Render the record for reporting. `markup` switches between HTML and
    /// plain-text symbols; `simple` selects the compact one-line form over
    /// the detailed multi-line one.
    pub fn render(&self, map: &StarMap, markup: bool, simple: bool) -> String {
        let symbols = if markup { &MARKUP_SYMBOLS } else { &PLAIN_SYMBOLS };
        if simple {
            self.render_simple(symbols)
        } else {
            self.render_detailed(map, symbols)
        }
    }

    fn render_simple(&self, symbols: &SymbolSet) -> String {
        let title = format!(
            "{} {} (Jmp: {}) {}",
            symbols.title_prefix, self.system_name, self.jumps_from_origin, symbols.title_suffix
        );
        // The compact form lists the factors as jump, diversity, security,
        // density.
        let values = [
            format!(
                "{}Weights: (T: {}){}{} {}{:.3}",
                symbols.italic,
                self.weight,
                symbols.end_italic,
                symbols.new_line,
                pad("Jmp:", SIMPLE_SPACING),
                self.breakdown.jump_value
            ),
            format!(
                "{}{:.3}",
                pad("Div:", SIMPLE_SPACING),
                self.breakdown.diversity_value
            ),
            format!(
                "{}{:.3}",
                pad("Sec:", SIMPLE_SPACING),
                self.breakdown.security_value
            ),
            format!(
                "{}{:.3}",
                pad("Dns:", SIMPLE_SPACING),
                self.breakdown.density_value
            ),
        ]
        .join(" ");
        format!("{title}{values}")
    }

    fn render_detailed(&self, map: &StarMap, symbols: &SymbolSet) -> String {
        let title = format!(
            "{}{} (Jumps: {}){}",
            symbols.title_prefix, self.system_name, self.jumps_from_origin, symbols.title_suffix
        );
        let weight_line = format!(
            "{}{}{}{}",
            symbols.level_one,
            pad("Weight:", LEVEL_ONE_SPACING),
            symbols.end_italic,
            self.weight
        );
        let values_line = format!(
            "{}Individual Weights:      Jumps: {}{:.3}, Diversity: {:.3}, Density: {:.3}, Security: {:.3}",
            symbols.level_two,
            symbols.end_italic,
            self.breakdown.jump_value,
            self.breakdown.diversity_value,
            self.breakdown.density_value,
            self.breakdown.security_value
        );
        let mut found: Vec<String> = self
            .found_types
            .iter()
            .map(|(planet_type, count)| {
                format!("{} x{}", map.planet_type_name(*planet_type), count)
            })
            .collect();
        found.sort();
        let types_line = format!(
            "{}{}{}{}",
            symbols.level_one,
            pad("Planet Types Available:", LEVEL_ONE_SPACING),
            symbols.end_italic,
            found.join(" | ")
        );
        format!("{title}{weight_line}{values_line}{types_line}")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn scored_result() -> (StarMap, WeightResult) {
        let mut map = StarMap::new();
        map.name_planet_type(11, "Barren");
        map.name_planet_type(12, "Temperate");

        let origin = SolarSystem::new(1, "Pator", 0.9);
        let system = SolarSystem::new(2, "Hek", 0.5).with_planet_types(&[11, 11, 12]);
        let score = SystemScore {
            weight: 1000.0,
            breakdown: WeightBreakdown {
                jump_value: 500.0,
                diversity_value: 100.0,
                density_value: 400.0,
                security_value: 0.0,
            },
            matched: BTreeSet::from([11, 12]),
        };
        let result = WeightResult::populate(&system, &origin, 1, &score);
        (map, result)
    }

    #[test]
    fn populate_counts_found_types() {
        let (_, result) = scored_result();
        assert_eq!(result.system_id, 2);
        assert_eq!(result.origin_name, "Pator");
        assert_eq!(result.jumps_from_origin, 1);
        assert_eq!(result.found_types.get(&11), Some(&2));
        assert_eq!(result.found_types.get(&12), Some(&1));
    }

    #[test]
    fn populate_ignores_undesired_types() {
        let origin = SolarSystem::new(1, "Pator", 0.9);
        let system = SolarSystem::new(2, "Hek", 0.5).with_planet_types(&[11, 99]);
        let score = SystemScore {
            weight: 0.0,
            breakdown: WeightBreakdown::default(),
            matched: BTreeSet::from([11]),
        };
        let result = WeightResult::populate(&system, &origin, 0, &score);
        assert_eq!(result.found_types.len(), 1);
        assert!(!result.found_types.contains_key(&99));
    }

    #[test]
    fn simple_plain_render_is_stable() {
        let (map, result) = scored_result();
        let rendered = result.render(&map, false, true);
        assert_eq!(
            rendered,
            ">>>>>__________  Hek (Jmp: 1)  __________<<<<<\
             *Weights: (T: 1000)*\n \
             Jmp: 500.000 Div: 100.000 Sec: 0.000 Dns: 400.000"
        );
    }

    #[test]
    fn simple_markup_render_uses_html_symbols() {
        let (map, result) = scored_result();
        let rendered = result.render(&map, true, true);
        assert!(rendered.starts_with("<b> Hek (Jmp: 1) </b>"));
        assert!(rendered.contains("<i>Weights: (T: 1000)</i><br>"));
    }

    #[test]
    fn detailed_render_lists_found_types_with_counts() {
        let (map, result) = scored_result();
        let rendered = result.render(&map, false, false);
        assert!(rendered.starts_with(">>>>>__________ Hek (Jumps: 1) __________<<<<<"));
        assert!(rendered.contains("\n -> Weight:                       *1000"));
        assert!(rendered.contains(
            "\n   => Individual Weights:      Jumps: *500.000, Diversity: 100.000, \
             Density: 400.000, Security: 0.000"
        ));
        assert!(rendered.contains("Barren x2 | Temperate x1"));
    }

    #[test]
    fn detailed_render_falls_back_to_type_id_without_name() {
        let (_, result) = scored_result();
        let unnamed = StarMap::new();
        let rendered = result.render(&unnamed, false, false);
        assert!(rendered.contains("11 x2 | 12 x1"));
    }

    #[test]
    fn results_round_trip_through_json() {
        let (_, result) = scored_result();
        let json = serde_json::to_string(&result).unwrap();
        let back: WeightResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.system_id, result.system_id);
        assert_eq!(back.weight, result.weight);
        assert_eq!(back.found_types, result.found_types);
    }
}
