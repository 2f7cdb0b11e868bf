//! # starlane-search
//!
//! Bounded-radius search and weighting over the star map: the weight
//! calculator, the planetary-industry factor, per-run result records, audit
//! trails, and the batch driver.

pub mod audit;
pub mod batch;
pub mod calculator;
pub mod factors;
pub mod result;

pub use audit::AuditLog;
pub use batch::{render_batch, run_all};
pub use calculator::{RunOutcome, RunWeight, WeightCalculator};
pub use factors::PlanetaryIndustryFactor;
pub use result::WeightResult;
