//! The bounded-radius weight calculator: depth-first traversal with revisit
//! reconciliation, branch pruning, aggregation, and cross-run top tracking.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use starlane_core::constants::{MAX_JUMP_RADIUS, UNREACHABLE_WEIGHT};
use starlane_core::errors::{ConfigError, StarlaneResult};
use starlane_core::galaxy::{PlanetTypeId, SolarSystem, StarMap, SystemId};
use starlane_core::scoring::WeightMethod;
use starlane_core::traits::IWeightFactor;

use crate::audit::AuditLog;
use crate::result::WeightResult;

/// Aggregate weight of one run.
#[derive(Debug, Clone, PartialEq)]
pub enum RunWeight {
    /// Averaged or totalled weight of the surviving results.
    Scalar(f64),
    /// The unaggregated per-system weights, ordered like the results.
    Raw(Vec<f64>),
    /// The run could not satisfy the target set within the radius.
    Unreachable,
}

impl RunWeight {
    /// Scalar view for ranking. Unreachable runs report the sentinel value;
    /// raw runs have no scalar.
    pub fn scalar(&self) -> Option<f64> {
        match self {
            RunWeight::Scalar(weight) => Some(*weight),
            RunWeight::Raw(_) => None,
            RunWeight::Unreachable => Some(UNREACHABLE_WEIGHT),
        }
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, RunWeight::Unreachable)
    }
}

/// What one `run` call produced: the aggregate weight and the surviving
/// results sorted by weight, best first.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub origin_id: SystemId,
    pub weight: RunWeight,
    pub results: Vec<WeightResult>,
}

impl RunOutcome {
    pub fn result_for(&self, system_id: SystemId) -> Option<&WeightResult> {
        self.results
            .iter()
            .find(|result| result.system_id == system_id)
    }

    /// Ids of the surviving results, in sorted-result order.
    pub fn system_ids(&self) -> Vec<SystemId> {
        self.results.iter().map(|result| result.system_id).collect()
    }
}

/// Weighs every system within a hop radius of an origin and keeps the best
/// outcomes seen across repeated runs.
///
/// One instance is reusable across many origins: `run` resets the per-run
/// state itself, `clear_all` also resets the cross-run bookkeeping.
pub struct WeightCalculator {
    strategy: Box<dyn IWeightFactor>,
    desired: BTreeSet<PlanetTypeId>,
    max_jumps: u32,
    cache_linked_lookups: bool,

    // Per-run state, reset by `clear`.
    visited_at_hop: FxHashMap<SystemId, u32>,
    results: FxHashMap<SystemId, WeightResult>,

    // Cross-run state, reset by `clear_all`.
    top_weight: f64,
    top_details: FxHashMap<SystemId, Vec<WeightResult>>,
    audit: AuditLog,

    // Validated link lists, kept for the calculator's lifetime.
    link_cache: FxHashMap<SystemId, Vec<SystemId>>,
}

impl WeightCalculator {
    /// Bind a weighting strategy and the search parameters.
    ///
    /// The strategy's own hop cap is synchronized with `max_jumps`. The
    /// radius is bounded by [`MAX_JUMP_RADIUS`] since the traversal recurses
    /// once per hop.
    pub fn configure(
        mut strategy: Box<dyn IWeightFactor>,
        desired: BTreeSet<PlanetTypeId>,
        max_jumps: u32,
        cache_linked_lookups: bool,
    ) -> Result<Self, ConfigError> {
        if max_jumps > MAX_JUMP_RADIUS {
            return Err(ConfigError::JumpRadiusTooLarge {
                requested: max_jumps,
                max: MAX_JUMP_RADIUS,
            });
        }
        strategy.set_max_jumps(max_jumps);
        Ok(Self {
            strategy,
            desired,
            max_jumps,
            cache_linked_lookups,
            visited_at_hop: FxHashMap::default(),
            results: FxHashMap::default(),
            top_weight: 0.0,
            top_details: FxHashMap::default(),
            audit: AuditLog::new(),
            link_cache: FxHashMap::default(),
        })
    }

    /// Weigh every system within the radius of `origin_id` and aggregate the
    /// surviving weights by `method`.
    ///
    /// A run that cannot complete the desired set returns
    /// [`RunWeight::Unreachable`] with no results; that is an expected
    /// outcome, not an error. Errors surface only for a malformed map.
    pub fn run(
        &mut self,
        map: &StarMap,
        origin_id: SystemId,
        method: WeightMethod,
    ) -> StarlaneResult<RunOutcome> {
        self.clear();
        let origin = map.require(origin_id)?;
        self.audit.begin_run(origin_id, &origin.name);
        self.audit
            .record(format!("==== new run started for {} ====", origin.name));
        self.audit
            .record(format!("expected match values: {:?}", self.desired));
        tracing::debug!(origin = origin_id, ?method, "run started");

        let found_all = self.visit_system(map, origin, origin, None, 0, &BTreeSet::new())?;

        let mut results: Vec<WeightResult> = if found_all {
            self.results.values().cloned().collect()
        } else {
            self.results.clear();
            Vec::new()
        };
        results.sort_by(|a, b| {
            b.sort_value()
                .total_cmp(&a.sort_value())
                .then_with(|| a.system_id.cmp(&b.system_id))
        });

        let weight = if found_all {
            let raw: Vec<f64> = results.iter().map(|result| result.weight).collect();
            let (aggregated, recorded) = match method {
                WeightMethod::Average => {
                    let mean = raw.iter().sum::<f64>() / raw.len() as f64;
                    let value = (mean * 10.0).floor() / 100.0;
                    (RunWeight::Scalar(value), format!("{value}"))
                }
                WeightMethod::Total => {
                    let value = (raw.iter().sum::<f64>() * 10.0).floor() / 100.0;
                    (RunWeight::Scalar(value), format!("{value}"))
                }
                WeightMethod::Raw => (RunWeight::Raw(raw.clone()), format!("{raw:?}")),
            };
            self.audit.record(format!(
                "==== run complete: raw weights {raw:?} | recorded weight by {method:?}: {recorded} ===="
            ));
            aggregated
        } else {
            self.audit
                .record("==== run complete: no complete match found, weight -1 ====");
            RunWeight::Unreachable
        };

        if let RunWeight::Scalar(scalar) = weight {
            self.record_top(scalar, origin_id, &results);
        }

        tracing::debug!(
            origin = origin_id,
            result_count = results.len(),
            unreachable = weight.is_unreachable(),
            "run complete"
        );
        Ok(RunOutcome {
            origin_id,
            weight,
            results,
        })
    }

    /// Reset the per-run state. Cross-run bookkeeping is untouched.
    pub fn clear(&mut self) {
        self.visited_at_hop.clear();
        self.results.clear();
    }

    /// Reset everything, including cross-run bookkeeping and audit trails,
    /// for full reuse of the calculator.
    pub fn clear_all(&mut self) {
        self.clear();
        self.top_weight = 0.0;
        self.top_details.clear();
        self.audit.clear();
    }

    /// Highest aggregate weight seen across runs, 0 until a run beats it.
    pub fn top_weight(&self) -> f64 {
        self.top_weight
    }

    /// Results of every origin currently tied at the top weight.
    pub fn top_details(&self) -> &FxHashMap<SystemId, Vec<WeightResult>> {
        &self.top_details
    }

    /// Audit trail for one origin, oldest entry first.
    pub fn audit_log(&self, origin_id: SystemId) -> &[String] {
        self.audit.for_origin(origin_id)
    }

    /// Every audit trail recorded by this calculator, keyed by origin.
    pub fn audit_logs(&self) -> &std::collections::BTreeMap<SystemId, Vec<String>> {
        self.audit.all()
    }

    pub fn max_jumps(&self) -> u32 {
        self.max_jumps
    }

    pub fn desired(&self) -> &BTreeSet<PlanetTypeId> {
        &self.desired
    }

    /// Depth-first visit of one system. Returns true when some chain through
    /// this system completed the desired set.
    fn visit_system(
        &mut self,
        map: &StarMap,
        origin: &SolarSystem,
        system: &SolarSystem,
        previous: Option<SystemId>,
        jumps: u32,
        matched_so_far: &BTreeSet<PlanetTypeId>,
    ) -> StarlaneResult<bool> {
        let visit = format!(
            "weighting [{}#{}@jump-{} from {}]",
            system.name,
            system.id,
            jumps,
            previous.map_or_else(|| "start".to_string(), |id| id.to_string())
        );
        self.audit.record(format!("{visit} beginning check"));

        // A cheaper path already explored this system; a longer one is not
        // worth rewalking. An equal distance passes and overwrites.
        if let Some(&recorded) = self.visited_at_hop.get(&system.id) {
            if recorded < jumps {
                self.audit
                    .record(format!("{visit} already checked closer, abandoning"));
                return Ok(false);
            }
        }
        self.visited_at_hop.insert(system.id, jumps);

        let score = self.strategy.score(system, jumps);
        tracing::trace!(system = system.id, jumps, weight = score.weight, "system weighed");
        self.results
            .insert(system.id, WeightResult::populate(system, origin, jumps, &score));

        let new_matched: BTreeSet<PlanetTypeId> =
            matched_so_far.union(&score.matched).copied().collect();
        self.audit.record(format!(
            "{visit} weight values (jump, diversity, density, security) {:?}",
            score.breakdown
        ));
        self.audit
            .record(format!("{visit} matched so far {new_matched:?}"));

        if new_matched == self.desired {
            self.audit.record(format!("{visit} completes a path"));
            return Ok(true);
        }
        if jumps == self.max_jumps {
            // End of the chain without a full match; its weight is noise.
            self.results.remove(&system.id);
            self.audit.record(format!(
                "{visit} final system in chain, match incomplete, abandoning"
            ));
            return Ok(false);
        }

        self.audit.record(format!("{visit} checking linked systems"));
        let mut any_child_found = false;
        for linked_id in self.linked_ids(map, system.id)? {
            // Skip the edge just traversed, by id.
            if previous == Some(linked_id) {
                continue;
            }
            let linked = map.require(linked_id)?;
            let child_found =
                self.visit_system(map, origin, linked, Some(system.id), jumps + 1, &new_matched)?;
            // A sibling path may have removed the child's result already;
            // absent is fine.
            if !child_found && self.results.remove(&linked_id).is_some() {
                self.audit.record(format!(
                    "{visit} chain through #{linked_id} meets no targets, removing result"
                ));
            }
            any_child_found = any_child_found || child_found;
        }
        Ok(any_child_found)
    }

    /// Resolve the link list for a system, optionally caching the validated
    /// ids for the calculator's lifetime.
    fn linked_ids(&mut self, map: &StarMap, id: SystemId) -> StarlaneResult<Vec<SystemId>> {
        if self.cache_linked_lookups {
            if let Some(ids) = self.link_cache.get(&id) {
                return Ok(ids.clone());
            }
        }
        let ids: Vec<SystemId> = map.linked_systems(id)?.iter().map(|s| s.id).collect();
        if self.cache_linked_lookups {
            self.link_cache.insert(id, ids.clone());
        }
        Ok(ids)
    }

    fn record_top(&mut self, weight: f64, origin_id: SystemId, results: &[WeightResult]) {
        if weight > self.top_weight {
            self.top_weight = weight;
            self.top_details.clear();
            self.top_details.insert(origin_id, results.to_vec());
            self.audit
                .record("new top origin, previous entries removed");
            tracing::debug!(origin = origin_id, weight, "new top weight");
        } else if weight == self.top_weight {
            self.top_details.insert(origin_id, results.to_vec());
            self.audit.record("ties the current top weight, adding details");
            tracing::debug!(origin = origin_id, weight, "tied top weight");
        }
    }
}
