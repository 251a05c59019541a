use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// The four tracked SDG indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Literacy,
    CleanWater,
    RenewableEnergy,
    Co2Reduction,
}

impl Outcome {
    /// Total number of outcomes.
    pub const COUNT: usize = 4;

    /// All variants for iteration.
    pub const ALL: [Outcome; 4] = [
        Self::Literacy,
        Self::CleanWater,
        Self::RenewableEnergy,
        Self::Co2Reduction,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Literacy => "literacy",
            Self::CleanWater => "cleanWater",
            Self::RenewableEnergy => "renewableEnergy",
            Self::Co2Reduction => "co2Reduction",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Literacy => "Literacy Rate",
            Self::CleanWater => "Clean Water Access",
            Self::RenewableEnergy => "Renewable Energy",
            Self::Co2Reduction => "CO₂ Reduction",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
