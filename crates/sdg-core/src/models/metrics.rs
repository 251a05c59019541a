use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Outcome;
use crate::config::defaults;

/// One percentage value per tracked outcome.
///
/// Used for the baseline, for projected end states, and for deltas.
/// Missing keys deserialize to the baseline value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct SdgMetrics {
    pub literacy: f64,
    pub clean_water: f64,
    pub renewable_energy: f64,
    pub co2_reduction: f64,
}

impl SdgMetrics {
    /// Build a vector by evaluating `f` once per outcome.
    pub fn from_fn(mut f: impl FnMut(Outcome) -> f64) -> Self {
        Self {
            literacy: f(Outcome::Literacy),
            clean_water: f(Outcome::CleanWater),
            renewable_energy: f(Outcome::RenewableEnergy),
            co2_reduction: f(Outcome::Co2Reduction),
        }
    }

    pub fn get(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Literacy => self.literacy,
            Outcome::CleanWater => self.clean_water,
            Outcome::RenewableEnergy => self.renewable_energy,
            Outcome::Co2Reduction => self.co2_reduction,
        }
    }

    /// `(outcome, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Outcome, f64)> + '_ {
        Outcome::ALL.into_iter().map(move |o| (o, self.get(o)))
    }

    /// Per-outcome difference `self − baseline`.
    pub fn improvement_over(&self, baseline: &SdgMetrics) -> SdgMetrics {
        SdgMetrics::from_fn(|o| self.get(o) - baseline.get(o))
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }
}

impl Default for SdgMetrics {
    fn default() -> Self {
        defaults::BASELINE
    }
}
