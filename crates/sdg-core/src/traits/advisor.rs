//! IAllocationAdvisor trait.
//!
//! The shipped advisor returns a fixed allocation. A search-based advisor
//! implements the same trait and is swapped in on the engine.

use crate::models::SectorAllocation;

/// Suggests an allocation, optionally starting from the user's current one.
pub trait IAllocationAdvisor: Send + Sync {
    fn suggest(&self, current: Option<&SectorAllocation>) -> SectorAllocation;

    /// Short identifier for logs.
    fn name(&self) -> &str;
}
