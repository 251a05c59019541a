use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Sector;
use crate::config::defaults;
use crate::constants::{BUDGET_TOLERANCE, TOTAL_BUDGET, UI_BUDGET_TOLERANCE};

/// Share of the budget (percent) given to each sector.
///
/// Valid allocations sum to 100 within [`BUDGET_TOLERANCE`]. The projection
/// engine only ever borrows an allocation; the caller owns the authoritative copy.
/// Missing keys deserialize to the default allocation's share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct SectorAllocation {
    pub education: f64,
    pub health: f64,
    pub water: f64,
    pub energy: f64,
    pub agriculture: f64,
    pub infrastructure: f64,
}

impl SectorAllocation {
    pub fn share(&self, sector: Sector) -> f64 {
        match sector {
            Sector::Education => self.education,
            Sector::Health => self.health,
            Sector::Water => self.water,
            Sector::Energy => self.energy,
            Sector::Agriculture => self.agriculture,
            Sector::Infrastructure => self.infrastructure,
        }
    }

    /// Copy of this allocation with one sector's share replaced.
    pub fn with_share(mut self, sector: Sector, share: f64) -> Self {
        let slot = match sector {
            Sector::Education => &mut self.education,
            Sector::Health => &mut self.health,
            Sector::Water => &mut self.water,
            Sector::Energy => &mut self.energy,
            Sector::Agriculture => &mut self.agriculture,
            Sector::Infrastructure => &mut self.infrastructure,
        };
        *slot = share;
        self
    }

    /// `(sector, share)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Sector, f64)> + '_ {
        Sector::ALL.into_iter().map(move |s| (s, self.share(s)))
    }

    /// Sum of all six shares.
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, share)| share).sum()
    }

    /// Absolute distance of the total from the full budget.
    pub fn deviation(&self) -> f64 {
        (self.total() - TOTAL_BUDGET).abs()
    }

    /// True when the engine will accept this allocation.
    pub fn is_balanced(&self) -> bool {
        self.deviation() <= BUDGET_TOLERANCE
    }

    /// True when the front end should enable the "run" action.
    ///
    /// Looser than [`is_balanced`](Self::is_balanced): slider rounding can leave
    /// the total a little off, and the engine makes the final call.
    pub fn is_runnable(&self) -> bool {
        self.deviation() <= UI_BUDGET_TOLERANCE
    }

    /// True when no share is negative.
    pub fn is_non_negative(&self) -> bool {
        self.iter().all(|(_, share)| share >= 0.0)
    }
}

impl Default for SectorAllocation {
    fn default() -> Self {
        defaults::DEFAULT_ALLOCATION
    }
}
