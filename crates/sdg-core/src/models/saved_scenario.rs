use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{SdgMetrics, SectorAllocation, SimulationResult};

/// A named snapshot of a simulation, in the shape the front end persists.
///
/// Only the value is built here; storage, listing and deletion belong to the
/// caller, which treats the schema as opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SavedScenario {
    pub id: String,
    pub name: String,
    pub date: DateTime<Utc>,
    pub allocation: SectorAllocation,
    pub efficiency_score: f64,
    pub projected_metrics: SdgMetrics,
}

impl SavedScenario {
    /// Snapshot `result` under `name` with a fresh id and the current time.
    pub fn capture(name: impl Into<String>, result: &SimulationResult) -> Self {
        Self {
            id: generate_scenario_id(),
            name: name.into(),
            date: Utc::now(),
            allocation: result.allocation,
            efficiency_score: result.efficiency_score,
            projected_metrics: result.projected_metrics,
        }
    }
}

/// `scenario_<uuid>` with the hyphen-free uuid form.
pub fn generate_scenario_id() -> String {
    format!("scenario_{}", uuid::Uuid::new_v4().simple())
}
