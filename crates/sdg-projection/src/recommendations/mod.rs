//! Heuristic improvement recommendations.
//!
//! Every rule is evaluated in order; the first `limit` matches are kept.
//! Not ranked by severity.

pub mod rules;

use sdg_core::models::{SdgMetrics, SectorAllocation};
use sdg_core::recommendation_span;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

pub use rules::{RecommendationKind, RecommendationRule, RuleContext};

/// An advisory message tagged with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub message: String,
}

/// Every matching rule, in evaluation order, untruncated.
pub fn evaluate(allocation: &SectorAllocation, projected: &SdgMetrics) -> Vec<Recommendation> {
    let ctx = RuleContext {
        allocation,
        projected,
    };
    rules::all_rules()
        .iter()
        .filter_map(|rule| {
            let message = (rule.check)(&ctx)?;
            debug!(kind = ?rule.kind, "recommendation rule matched");
            Some(Recommendation {
                kind: rule.kind,
                message,
            })
        })
        .collect()
}

/// The first `limit` matches in evaluation order.
pub fn generate(
    allocation: &SectorAllocation,
    projected: &SdgMetrics,
    limit: usize,
) -> Vec<Recommendation> {
    let _span = recommendation_span!(limit).entered();
    let mut recs = evaluate(allocation, projected);
    if recs.len() > limit {
        debug!(dropped = recs.len() - limit, "truncating recommendations");
        recs.truncate(limit);
    }
    recs
}
