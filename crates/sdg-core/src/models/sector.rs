use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// The six budget categories competing for a share of the budget.
///
/// Declaration order is significant: it is the enumeration order exposed to
/// the front end and the tie-break order when shares are sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    Education,
    Health,
    Water,
    Energy,
    Agriculture,
    Infrastructure,
}

impl Sector {
    /// Total number of sectors.
    pub const COUNT: usize = 6;

    /// All variants for iteration.
    pub const ALL: [Sector; 6] = [
        Self::Education,
        Self::Health,
        Self::Water,
        Self::Energy,
        Self::Agriculture,
        Self::Infrastructure,
    ];

    /// Wire identifier, identical to the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Health => "health",
            Self::Water => "water",
            Self::Energy => "energy",
            Self::Agriculture => "agriculture",
            Self::Infrastructure => "infrastructure",
        }
    }

    /// Display label for slider captions.
    pub fn label(self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Health => "Health",
            Self::Water => "Water",
            Self::Energy => "Energy",
            Self::Agriculture => "Agriculture",
            Self::Infrastructure => "Infrastructure",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
