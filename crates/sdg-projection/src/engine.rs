//! ProjectionEngine: validates an allocation and assembles the result bundle.

use std::sync::OnceLock;

use sdg_core::config::{RecommendationConfig, SdgConfig, TrajectoryConfig};
use sdg_core::errors::SdgResult;
use sdg_core::models::{Outcome, Sector, SectorAllocation, SimulationResult};
use sdg_core::projection_span;
use sdg_core::traits::IAllocationAdvisor;
use sdg_core::ModelConfig;
use tracing::{debug, warn};

use crate::optimizer::FixedAdvisor;
use crate::{efficiency, impact, recommendations, trajectory, validation};

/// Projection engine over an immutable model snapshot.
///
/// Holds no mutable state; every call is a pure function of its input and
/// the engine may be shared freely across threads.
pub struct ProjectionEngine {
    model: ModelConfig,
    trajectory: TrajectoryConfig,
    recommendations: RecommendationConfig,
    advisor: Box<dyn IAllocationAdvisor>,
}

impl ProjectionEngine {
    /// Engine over the compiled default model.
    pub fn new() -> Self {
        let config = SdgConfig::default();
        Self::build(config)
    }

    /// Engine over a validated configuration.
    pub fn with_config(config: SdgConfig) -> SdgResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Process-wide engine over the compiled defaults.
    pub fn standard() -> &'static ProjectionEngine {
        static STANDARD: OnceLock<ProjectionEngine> = OnceLock::new();
        STANDARD.get_or_init(ProjectionEngine::new)
    }

    fn build(config: SdgConfig) -> Self {
        let advisor = Box::new(FixedAdvisor::from_model(&config.model));
        Self {
            model: config.model,
            trajectory: config.trajectory,
            recommendations: config.recommendations,
            advisor,
        }
    }

    /// Replace the budget advisor.
    pub fn with_advisor(mut self, advisor: Box<dyn IAllocationAdvisor>) -> Self {
        self.advisor = advisor;
        self
    }

    pub fn model(&self) -> &ModelConfig {
        &self.model
    }

    pub fn trajectory_config(&self) -> &TrajectoryConfig {
        &self.trajectory
    }

    /// Validate `allocation` and project its impact.
    pub fn project(&self, allocation: &SectorAllocation) -> SdgResult<SimulationResult> {
        let total = allocation.total();
        let _span = projection_span!(total).entered();

        if let Err(e) = validation::validate(allocation) {
            warn!(total, "rejected allocation: {e}");
            return Err(e);
        }

        let projected_metrics = impact::project(allocation, &self.model);
        if tracing::enabled!(tracing::Level::DEBUG) {
            for b in impact::compute_breakdown(allocation, &self.model) {
                if b.is_saturated() {
                    debug!(outcome = %b.outcome, discarded = b.discarded, "outcome saturated");
                }
            }
        }

        let efficiency_score =
            efficiency::score(allocation, &projected_metrics, &self.model.baseline)?;
        let yearly_progress = trajectory::project_yearly(allocation, &self.model, &self.trajectory);
        let recommendations = recommendations::generate(
            allocation,
            &projected_metrics,
            self.recommendations.max_recommendations,
        )
        .into_iter()
        .map(|r| r.message)
        .collect();

        debug!(efficiency_score, "projection complete");

        Ok(SimulationResult {
            allocation: *allocation,
            projected_metrics,
            efficiency_score,
            yearly_progress,
            recommendations,
        })
    }

    /// The advisor's suggestion. Independent of any current allocation.
    pub fn suggest_allocation(&self) -> SectorAllocation {
        debug!(advisor = self.advisor.name(), "suggesting allocation");
        self.advisor.suggest(None)
    }

    /// Starting allocation before any user edits.
    pub fn default_allocation(&self) -> SectorAllocation {
        self.model.default_allocation
    }

    pub fn sectors(&self) -> &'static [Sector] {
        &Sector::ALL
    }

    pub fn outcomes(&self) -> &'static [Outcome] {
        &Outcome::ALL
    }
}

impl std::fmt::Debug for ProjectionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectionEngine")
            .field("model", &self.model)
            .field("trajectory", &self.trajectory)
            .field("recommendations", &self.recommendations)
            .field("advisor", &self.advisor.name())
            .finish()
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new()
    }
}
