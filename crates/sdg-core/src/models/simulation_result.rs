use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{SdgMetrics, SectorAllocation, YearlyProgress};

/// Everything one projection produces. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// The input allocation, echoed back.
    pub allocation: SectorAllocation,
    pub projected_metrics: SdgMetrics,
    /// Total improvement per percent spent, rounded to one decimal.
    pub efficiency_score: f64,
    /// Six points, ascending by year; the last equals `projected_metrics`.
    pub yearly_progress: Vec<YearlyProgress>,
    /// At most three advisory messages, in rule order.
    pub recommendations: Vec<String>,
}
