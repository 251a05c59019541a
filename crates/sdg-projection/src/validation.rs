//! Allocation validator. Runs before every projection.

use sdg_core::constants::{BUDGET_TOLERANCE, TOTAL_BUDGET};
use sdg_core::errors::{SdgError, SdgResult};
use sdg_core::models::SectorAllocation;

/// Check that the shares sum to the full budget within [`BUDGET_TOLERANCE`].
///
/// Every share must be finite; a NaN or infinite share never balances.
/// Returns the computed total on success.
pub fn validate(allocation: &SectorAllocation) -> SdgResult<f64> {
    let total = allocation.total();
    let finite = allocation.iter().all(|(_, share)| share.is_finite());
    if !finite || (total - TOTAL_BUDGET).abs() > BUDGET_TOLERANCE {
        return Err(SdgError::InvalidBudget {
            expected: TOTAL_BUDGET,
            actual: total,
        });
    }
    Ok(total)
}
