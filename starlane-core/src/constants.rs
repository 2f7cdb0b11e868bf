/// Starlane system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default hop-radius cap for a weighted search.
pub const DEFAULT_MAX_JUMPS: u32 = 3;

/// Upper bound on the hop radius accepted at configure time.
/// The traversal recurses once per hop, so this also bounds stack depth.
pub const MAX_JUMP_RADIUS: u32 = 64;

/// Default weight per jump saved relative to the radius.
pub const DEFAULT_JUMP_WEIGHT: i32 = 500;

/// Default weight per distinct desired planet type found at a system.
pub const DEFAULT_TYPE_DIVERSITY_WEIGHT: i32 = 100;

/// Default weight applied to the planet-type density term.
pub const DEFAULT_TYPE_DENSITY_WEIGHT: i32 = 10;

/// Default weight applied to the security term.
pub const DEFAULT_SECURITY_WEIGHT: i32 = 0;

/// Aggregate weight reported for a run that cannot satisfy its target set.
pub const UNREACHABLE_WEIGHT: f64 = -1.0;
