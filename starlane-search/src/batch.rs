//! Whole-map batch driver: one weighting run per linked system, plus compact
//! report assembly over the collected outcomes.

use std::collections::BTreeMap;

use starlane_core::errors::StarlaneResult;
use starlane_core::galaxy::{StarMap, SystemId};
use starlane_core::scoring::WeightMethod;

use crate::calculator::{RunOutcome, WeightCalculator};
use crate::result::{MARKUP_SYMBOLS, PLAIN_SYMBOLS};

/// Run the calculator once per linked system in the map, in ascending id
/// order, collecting every outcome keyed by origin.
///
/// Isolated systems are skipped: with no links they cannot reach anything
/// beyond themselves. Cross-run top tracking accumulates in the calculator
/// as with manual runs.
pub fn run_all(
    calculator: &mut WeightCalculator,
    map: &StarMap,
    method: WeightMethod,
) -> StarlaneResult<BTreeMap<SystemId, RunOutcome>> {
    let mut outcomes = BTreeMap::new();
    for id in map.system_ids_sorted() {
        let system = map.require(id)?;
        if !system.has_links() {
            tracing::trace!(system = id, "isolated system skipped");
            continue;
        }
        let outcome = calculator.run(map, id, method)?;
        outcomes.insert(id, outcome);
    }
    tracing::debug!(origins = outcomes.len(), "batch complete");
    Ok(outcomes)
}

/// Render one compact text block per origin, keyed by origin id.
///
/// Reachable origins render each surviving result in compact form, joined by
/// the symbol set's line break. Unreachable origins get a fallback line
/// naming the search radius.
pub fn render_batch(
    outcomes: &BTreeMap<SystemId, RunOutcome>,
    map: &StarMap,
    markup: bool,
    max_jumps: u32,
) -> BTreeMap<SystemId, String> {
    let symbols = if markup { &MARKUP_SYMBOLS } else { &PLAIN_SYMBOLS };
    let mut rendered = BTreeMap::new();
    for (origin_id, outcome) in outcomes {
        let text = if outcome.results.is_empty() {
            format!("Not possible to get all materials within {max_jumps} jumps")
        } else {
            outcome
                .results
                .iter()
                .map(|result| result.render(map, markup, true))
                .collect::<Vec<_>>()
                .join(symbols.new_line)
        };
        rendered.insert(*origin_id, text);
    }
    rendered
}
