/// Simulator version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Every allocation distributes exactly this many percentage points.
pub const TOTAL_BUDGET: f64 = 100.0;

/// Maximum |sum − 100| the engine accepts before projecting.
pub const BUDGET_TOLERANCE: f64 = 0.01;

/// Looser tolerance the front end uses to enable the "run" action.
pub const UI_BUDGET_TOLERANCE: f64 = 0.1;

/// Hard ceiling for every projected outcome (percent).
pub const OUTCOME_CEILING: f64 = 100.0;

// --- Recommendation thresholds (percent of budget) ---
pub const EDUCATION_FLOOR: f64 = 15.0;
pub const WATER_FLOOR: f64 = 12.0;
pub const ENERGY_FLOOR: f64 = 18.0;
pub const AGRICULTURE_CEILING: f64 = 25.0;
/// Rebalancing fires when the smallest share is below this...
pub const REBALANCE_LOW_SHARE: f64 = 10.0;
/// ...and the largest share is above this.
pub const REBALANCE_HIGH_SHARE: f64 = 22.0;

// --- Trajectory bounds ---
pub const MAX_HORIZON_YEARS: usize = 100;
pub const MIN_START_YEAR: i32 = 1900;
pub const MAX_START_YEAR: i32 = 2200;
