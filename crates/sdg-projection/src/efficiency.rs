//! Efficiency scorer.
//!
//! `score = round₁(Σ_o (projected[o] − baseline[o]) / Σ_s allocation[s])`
//!
//! Larger is better and unbounded above. For a validated allocation the
//! denominator is always 100.

use sdg_core::errors::{SdgError, SdgResult};
use sdg_core::models::{SdgMetrics, SectorAllocation};

/// Score `projected` against `baseline` per percent of `allocation` spent.
///
/// Returns [`SdgError::ZeroSpend`] instead of dividing by zero; the function
/// is public and may be reached with an unvalidated allocation.
pub fn score(
    allocation: &SectorAllocation,
    projected: &SdgMetrics,
    baseline: &SdgMetrics,
) -> SdgResult<f64> {
    let total_improvement = projected.improvement_over(baseline).total();
    let total_spend = allocation.total();
    if total_spend == 0.0 {
        return Err(SdgError::ZeroSpend);
    }
    Ok(round_to_tenth(total_improvement / total_spend))
}

/// Round to one decimal place, halves toward positive infinity.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
