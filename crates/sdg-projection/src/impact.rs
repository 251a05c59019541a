//! Linear impact projector.
//!
//! ```text
//! improvement[o] = Σ_s allocation[s] × coefficient[o][s]
//! value[o]       = clamp(baseline[o] + improvement[o], baseline[o], 100)
//! ```
//!
//! Improvement past the ceiling is discarded, not reported.

use sdg_core::constants::OUTCOME_CEILING;
use sdg_core::models::{Outcome, SdgMetrics, SectorAllocation, SectorWeights};
use sdg_core::ModelConfig;

/// Raw (unclamped) percentage-point gain for one coefficient row.
pub fn improvement(allocation: &SectorAllocation, row: &SectorWeights) -> f64 {
    allocation
        .iter()
        .map(|(sector, share)| share * row.weight(sector))
        .sum()
}

fn saturate(baseline: f64, raw_improvement: f64) -> f64 {
    // Never below the baseline; capped at the ceiling.
    (baseline + raw_improvement).min(OUTCOME_CEILING).max(baseline)
}

/// Project the end-state outcome vector for `allocation`.
pub fn project(allocation: &SectorAllocation, model: &ModelConfig) -> SdgMetrics {
    SdgMetrics::from_fn(|outcome| {
        let gain = improvement(allocation, model.coefficients.row(outcome));
        saturate(model.baseline.get(outcome), gain)
    })
}

/// Per-outcome projection detail for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeBreakdown {
    pub outcome: Outcome,
    pub baseline: f64,
    pub raw_improvement: f64,
    pub projected: f64,
    /// Improvement lost to the ceiling.
    pub discarded: f64,
}

impl OutcomeBreakdown {
    pub fn is_saturated(&self) -> bool {
        self.discarded > 0.0
    }
}

/// Compute the projection with the full breakdown of each outcome.
pub fn compute_breakdown(allocation: &SectorAllocation, model: &ModelConfig) -> Vec<OutcomeBreakdown> {
    Outcome::ALL
        .iter()
        .map(|&outcome| {
            let baseline = model.baseline.get(outcome);
            let raw_improvement = improvement(allocation, model.coefficients.row(outcome));
            let projected = saturate(baseline, raw_improvement);
            OutcomeBreakdown {
                outcome,
                baseline,
                raw_improvement,
                projected,
                discarded: (baseline + raw_improvement - projected).max(0.0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdg_core::models::Sector;

    fn all_in(sector: Sector) -> SectorAllocation {
        let mut allocation = ModelConfig::standard().default_allocation;
        for s in Sector::ALL {
            allocation = allocation.with_share(s, 0.0);
        }
        allocation.with_share(sector, 100.0)
    }

    #[test]
    fn improvement_is_dot_product() {
        let model = ModelConfig::standard();
        let gain = improvement(&model.default_allocation, model.coefficients.row(Outcome::Literacy));
        assert!((gain - 59.7).abs() < 1e-9);
    }

    #[test]
    fn breakdown_reports_discarded_gain() {
        let model = ModelConfig::standard();
        let breakdown = compute_breakdown(&all_in(Sector::Energy), model);
        let renewable = breakdown
            .iter()
            .find(|b| b.outcome == Outcome::RenewableEnergy)
            .unwrap();
        assert_eq!(renewable.projected, 100.0);
        assert!((renewable.discarded - 288.0).abs() < 1e-9);
        assert!(renewable.is_saturated());

        let literacy = breakdown.iter().find(|b| b.outcome == Outcome::Literacy).unwrap();
        assert!(!literacy.is_saturated());
        assert!((literacy.projected - 94.0).abs() < 1e-9);
    }
}
