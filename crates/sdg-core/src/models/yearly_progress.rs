use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::SdgMetrics;

/// One point on the interpolated trajectory.
///
/// Serializes flat (`{ "year": 2026, "literacy": ..., ... }`) so chart
/// components can bind the outcome keys directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct YearlyProgress {
    pub year: i32,
    #[serde(flatten)]
    pub metrics: SdgMetrics,
}
