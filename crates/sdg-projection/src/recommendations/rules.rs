//! Ordered threshold rules.
//!
//! Underinvestment: education (<15), water (<12), energy (<18).
//! Overinvestment: agriculture (>25).
//! Rebalance: smallest share <10 while the largest is >22.
//!
//! Evaluation order is part of the contract: callers see the first matches.

use std::cmp::Ordering;

use sdg_core::constants::{
    AGRICULTURE_CEILING, EDUCATION_FLOOR, ENERGY_FLOOR, REBALANCE_HIGH_SHARE, REBALANCE_LOW_SHARE,
    WATER_FLOOR,
};
use sdg_core::models::{SdgMetrics, Sector, SectorAllocation};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which rule produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    EducationUnderinvestment,
    WaterUnderinvestment,
    EnergyUnderinvestment,
    AgricultureOverinvestment,
    Rebalance,
}

/// Inputs every rule may inspect.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub allocation: &'a SectorAllocation,
    pub projected: &'a SdgMetrics,
}

/// A rule: returns its message when the allocation matches.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationRule {
    pub kind: RecommendationKind,
    pub check: fn(&RuleContext<'_>) -> Option<String>,
}

static RULES: [RecommendationRule; 5] = [
    RecommendationRule {
        kind: RecommendationKind::EducationUnderinvestment,
        check: education_underinvestment,
    },
    RecommendationRule {
        kind: RecommendationKind::WaterUnderinvestment,
        check: water_underinvestment,
    },
    RecommendationRule {
        kind: RecommendationKind::EnergyUnderinvestment,
        check: energy_underinvestment,
    },
    RecommendationRule {
        kind: RecommendationKind::AgricultureOverinvestment,
        check: agriculture_overinvestment,
    },
    RecommendationRule {
        kind: RecommendationKind::Rebalance,
        check: rebalance,
    },
];

/// All rules in evaluation order.
pub fn all_rules() -> &'static [RecommendationRule] {
    &RULES
}

fn education_underinvestment(ctx: &RuleContext<'_>) -> Option<String> {
    (ctx.allocation.education < EDUCATION_FLOOR).then(|| {
        "Increasing Education budget by 5% could improve literacy by 12.5% points.".to_string()
    })
}

fn water_underinvestment(ctx: &RuleContext<'_>) -> Option<String> {
    (ctx.allocation.water < WATER_FLOOR).then(|| {
        "Water infrastructure needs more focus - doubling allocation improves access by 24%."
            .to_string()
    })
}

fn energy_underinvestment(ctx: &RuleContext<'_>) -> Option<String> {
    (ctx.allocation.energy < ENERGY_FLOOR)
        .then(|| "Renewable Energy requires higher investment to meet 2030 targets.".to_string())
}

fn agriculture_overinvestment(ctx: &RuleContext<'_>) -> Option<String> {
    (ctx.allocation.agriculture > AGRICULTURE_CEILING).then(|| {
        "Reducing Agriculture spending by 8% and reallocating to Water increases overall efficiency."
            .to_string()
    })
}

fn rebalance(ctx: &RuleContext<'_>) -> Option<String> {
    let (lowest, highest) = share_extremes(ctx.allocation)?;
    (lowest.1 < REBALANCE_LOW_SHARE && highest.1 > REBALANCE_HIGH_SHARE).then(|| {
        format!(
            "Balancing {} (-5%) with {} (+5%) improves efficiency by 15%.",
            highest.0, lowest.0
        )
    })
}

/// Smallest and largest `(sector, share)` after a stable ascending sort.
///
/// Ties keep declaration order, so among equal shares the earliest sector
/// is "lowest" and the latest is "highest".
pub fn share_extremes(allocation: &SectorAllocation) -> Option<((Sector, f64), (Sector, f64))> {
    let mut ranked: Vec<(Sector, f64)> = allocation.iter().collect();
    ranked.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    Some((*ranked.first()?, *ranked.last()?))
}
