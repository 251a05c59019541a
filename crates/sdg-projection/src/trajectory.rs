//! Trajectory interpolator.
//!
//! Linear path from the baseline to the projected end state. Point `i` of
//! `n` sits at fraction `(i + 1) / n`, so the first year is already one step
//! along and the last year is the end state itself.

use sdg_core::config::TrajectoryConfig;
use sdg_core::models::{SdgMetrics, SectorAllocation, YearlyProgress};
use sdg_core::ModelConfig;

use crate::impact;

/// Recompute the end state for `allocation` and interpolate toward it.
pub fn project_yearly(
    allocation: &SectorAllocation,
    model: &ModelConfig,
    schedule: &TrajectoryConfig,
) -> Vec<YearlyProgress> {
    let end = impact::project(allocation, model);
    interpolate(&model.baseline, &end, schedule)
}

/// Interpolate between two outcome vectors over the schedule's years.
pub fn interpolate(
    baseline: &SdgMetrics,
    end: &SdgMetrics,
    schedule: &TrajectoryConfig,
) -> Vec<YearlyProgress> {
    let steps = schedule.horizon_years as f64;
    schedule
        .years()
        .enumerate()
        .map(|(i, year)| {
            let fraction = (i + 1) as f64 / steps;
            YearlyProgress {
                year,
                metrics: SdgMetrics::from_fn(|o| lerp(baseline.get(o), end.get(o), fraction)),
            }
        })
        .collect()
}

fn lerp(from: f64, to: f64, fraction: f64) -> f64 {
    if fraction >= 1.0 {
        // Exact end state, free of rounding in `from + (to - from)`.
        return to;
    }
    from + (to - from) * fraction
}
