use serde::{Deserialize, Serialize};

use super::defaults;

/// Recommendation generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Matches beyond this many are dropped, keeping rule order.
    pub max_recommendations: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            max_recommendations: defaults::DEFAULT_MAX_RECOMMENDATIONS,
        }
    }
}
