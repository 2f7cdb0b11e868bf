//! Property checks for the map census over randomly populated maps.

use proptest::collection::vec;
use proptest::prelude::*;
use starlane_core::galaxy::{MapCensus, SolarSystem, StarMap, SystemId};

fn arb_map() -> impl Strategy<Value = StarMap> {
    vec(vec(11u32..16, 0..6), 1..12).prop_map(|systems| {
        let mut map = StarMap::new();
        for (i, planets) in systems.into_iter().enumerate() {
            let id = (i + 1) as SystemId;
            map.add_system(
                SolarSystem::new(id, format!("SYS-{id}"), 0.5).with_planet_types(&planets),
            );
        }
        map
    })
}

proptest! {
    #[test]
    fn per_type_counts_sum_to_the_planet_total(map in arb_map()) {
        let census = MapCensus::collect(&map);
        let counted: u64 = census.planets_by_type.values().sum();
        prop_assert_eq!(counted, census.total_planets as u64);
    }

    #[test]
    fn type_shares_sum_to_one_when_planets_exist(map in arb_map()) {
        let census = MapCensus::collect(&map);
        if census.total_planets > 0 {
            let total: f64 = census.type_share.values().sum();
            prop_assert!((total - 1.0).abs() < 1e-9, "shares sum to {}", total);
        } else {
            prop_assert!(census.type_share.is_empty());
        }
    }

    #[test]
    fn mean_planets_matches_the_totals(map in arb_map()) {
        let census = MapCensus::collect(&map);
        let expected = census.total_planets as f64 / census.total_systems as f64;
        prop_assert_eq!(census.mean_planets_per_system, expected);
    }
}
