use serde::{Deserialize, Serialize};

use super::defaults;

/// Yearly trajectory schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrajectoryConfig {
    /// Label of the first simulated year.
    pub start_year: i32,
    /// Number of yearly points; the last one reaches the projected end state.
    pub horizon_years: usize,
}

impl TrajectoryConfig {
    /// Year labels in ascending order.
    ///
    /// Bounded by config validation (`horizon_years` ≤ 100, `start_year` ≤ 2200).
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        (0..self.horizon_years).map(move |i| self.start_year + i as i32)
    }
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            start_year: defaults::DEFAULT_START_YEAR,
            horizon_years: defaults::DEFAULT_HORIZON_YEARS,
        }
    }
}
