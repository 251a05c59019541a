// Single source of truth for all default values.

use crate::models::{ImpactMatrix, SdgMetrics, SectorAllocation, SectorWeights};

// --- Model ---

/// Present-day state every projection starts from.
pub const BASELINE: SdgMetrics = SdgMetrics {
    literacy: 74.0,
    clean_water: 62.0,
    renewable_energy: 38.0,
    co2_reduction: 12.0,
};

pub const IMPACT_MATRIX: ImpactMatrix = ImpactMatrix {
    literacy: SectorWeights {
        education: 2.5,
        health: 0.3,
        water: 0.1,
        energy: 0.2,
        agriculture: 0.1,
        infrastructure: 0.2,
    },
    clean_water: SectorWeights {
        education: 0.1,
        health: 0.5,
        water: 3.0,
        energy: 0.2,
        agriculture: 0.3,
        infrastructure: 0.8,
    },
    renewable_energy: SectorWeights {
        education: 0.2,
        health: 0.1,
        water: 0.2,
        energy: 3.5,
        agriculture: 0.2,
        infrastructure: 0.5,
    },
    co2_reduction: SectorWeights {
        education: 0.3,
        health: 0.2,
        water: 0.3,
        energy: 2.8,
        agriculture: 0.5,
        infrastructure: 0.4,
    },
};

/// Initial slider state before any user edits.
pub const DEFAULT_ALLOCATION: SectorAllocation = SectorAllocation {
    education: 18.0,
    health: 15.0,
    water: 12.0,
    energy: 20.0,
    agriculture: 20.0,
    infrastructure: 15.0,
};

/// Canned "optimized" allocation. A fixed answer, not the result of a search.
pub const SUGGESTED_ALLOCATION: SectorAllocation = SectorAllocation {
    education: 20.0,
    health: 16.0,
    water: 14.0,
    energy: 22.0,
    agriculture: 13.0,
    infrastructure: 15.0,
};

// --- Trajectory ---
pub const DEFAULT_START_YEAR: i32 = 2025;
pub const DEFAULT_HORIZON_YEARS: usize = 6;

// --- Recommendations ---
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
