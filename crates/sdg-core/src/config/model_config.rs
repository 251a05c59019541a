use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{ImpactMatrix, SdgMetrics, SectorAllocation};

/// Read-only model data: baseline, impact coefficients, canned allocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub baseline: SdgMetrics,
    pub coefficients: ImpactMatrix,
    pub default_allocation: SectorAllocation,
    pub suggested_allocation: SectorAllocation,
}

impl ModelConfig {
    /// Process-wide instance built from the compiled defaults.
    ///
    /// Initialised on first use and never mutated afterwards.
    pub fn standard() -> &'static ModelConfig {
        static STANDARD: OnceLock<ModelConfig> = OnceLock::new();
        STANDARD.get_or_init(ModelConfig::default)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            baseline: defaults::BASELINE,
            coefficients: defaults::IMPACT_MATRIX,
            default_allocation: defaults::DEFAULT_ALLOCATION,
            suggested_allocation: defaults::SUGGESTED_ALLOCATION,
        }
    }
}
