//! # sdg-projection
//!
//! Projects a budget allocation across six policy sectors onto four SDG
//! outcomes: linear impact model with a hard ceiling, efficiency score,
//! six-year trajectory, and up to three heuristic recommendations.
//!
//! The free functions run against [`ProjectionEngine::standard`], which is
//! built once from the compiled defaults.

pub mod efficiency;
pub mod engine;
pub mod impact;
pub mod optimizer;
pub mod recommendations;
pub mod trajectory;
pub mod validation;

pub use engine::ProjectionEngine;
pub use optimizer::FixedAdvisor;
pub use recommendations::{Recommendation, RecommendationKind};

use sdg_core::errors::SdgResult;
use sdg_core::models::{Outcome, Sector, SectorAllocation, SimulationResult};

/// Validate `allocation` and project its impact.
pub fn project(allocation: &SectorAllocation) -> SdgResult<SimulationResult> {
    ProjectionEngine::standard().project(allocation)
}

/// The fixed "optimized" allocation.
pub fn suggest_allocation() -> SectorAllocation {
    ProjectionEngine::standard().suggest_allocation()
}

/// The initial allocation before any user edits.
pub fn default_allocation() -> SectorAllocation {
    ProjectionEngine::standard().default_allocation()
}

/// Sector identifiers in display order.
pub fn sectors() -> &'static [Sector] {
    &Sector::ALL
}

/// Outcome identifiers in display order.
pub fn outcomes() -> &'static [Outcome] {
    &Outcome::ALL
}
