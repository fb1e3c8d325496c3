/// Half-width of the accepted band around each macro target, in grams.
pub const MACRO_TOLERANCE_GRAMS: f64 = 5.0;

/// Per-ingredient usage cap when solving against the full catalog, in grams.
/// Stands in for pantry quantity so the solver may pick ingredients the user
/// does not own yet.
pub const CATALOG_CEILING_GRAMS: f64 = 400.0;

/// Solve rounds attempted per requested plan in the multi-solution search.
pub const ATTEMPTS_PER_PLAN: usize = 5;

/// Randomized cost range for one ingredient variable: uniform in
/// [COST_JITTER_MIN, COST_JITTER_MAX). Different draws favor different
/// vertices of the same feasible polytope.
pub const COST_JITTER_MIN: f64 = 0.5;
pub const COST_JITTER_MAX: f64 = 1.5;

/// Cost used for every variable on the deterministic single-solve path.
pub const NEUTRAL_COST: f64 = 1.0;

/// Default number of plans the forward path asks for.
pub const DEFAULT_PLAN_COUNT: usize = 3;
