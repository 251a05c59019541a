//! Budget advisor that returns a fixed allocation.
//!
//! There is no search here: `suggest` ignores its input and hands back the
//! configured allocation. A real optimizer replaces this via
//! [`IAllocationAdvisor`].

use sdg_core::models::SectorAllocation;
use sdg_core::traits::IAllocationAdvisor;
use sdg_core::ModelConfig;

/// Always suggests the same allocation.
#[derive(Debug, Clone)]
pub struct FixedAdvisor {
    allocation: SectorAllocation,
}

impl FixedAdvisor {
    pub fn new(allocation: SectorAllocation) -> Self {
        Self { allocation }
    }

    /// Advisor returning the model's suggested allocation.
    pub fn from_model(model: &ModelConfig) -> Self {
        Self::new(model.suggested_allocation)
    }
}

impl Default for FixedAdvisor {
    fn default() -> Self {
        Self::from_model(ModelConfig::standard())
    }
}

impl IAllocationAdvisor for FixedAdvisor {
    fn suggest(&self, _current: Option<&SectorAllocation>) -> SectorAllocation {
        self.allocation
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
