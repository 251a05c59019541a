use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Outcome, Sector};
use crate::config::defaults;

/// Percentage points contributed to one outcome per unit of each sector's share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectorWeights {
    pub education: f64,
    pub health: f64,
    pub water: f64,
    pub energy: f64,
    pub agriculture: f64,
    pub infrastructure: f64,
}

impl SectorWeights {
    pub fn weight(&self, sector: Sector) -> f64 {
        match sector {
            Sector::Education => self.education,
            Sector::Health => self.health,
            Sector::Water => self.water,
            Sector::Energy => self.energy,
            Sector::Agriculture => self.agriculture,
            Sector::Infrastructure => self.infrastructure,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Sector, f64)> + '_ {
        Sector::ALL.into_iter().map(move |s| (s, self.weight(s)))
    }
}

/// Linear impact model: one row of sector weights per outcome.
///
/// Rows missing from a config file keep their compiled values; a row that is
/// present must list all six sectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ImpactMatrix {
    pub literacy: SectorWeights,
    pub clean_water: SectorWeights,
    pub renewable_energy: SectorWeights,
    pub co2_reduction: SectorWeights,
}

impl ImpactMatrix {
    pub fn row(&self, outcome: Outcome) -> &SectorWeights {
        match outcome {
            Outcome::Literacy => &self.literacy,
            Outcome::CleanWater => &self.clean_water,
            Outcome::RenewableEnergy => &self.renewable_energy,
            Outcome::Co2Reduction => &self.co2_reduction,
        }
    }

    pub fn coefficient(&self, outcome: Outcome, sector: Sector) -> f64 {
        self.row(outcome).weight(sector)
    }
}

impl Default for ImpactMatrix {
    fn default() -> Self {
        defaults::IMPACT_MATRIX
    }
}
