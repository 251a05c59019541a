pub mod allocation;
pub mod impact_matrix;
pub mod metrics;
pub mod outcome;
pub mod saved_scenario;
pub mod sector;
pub mod simulation_result;
pub mod yearly_progress;

pub use allocation::SectorAllocation;
pub use impact_matrix::{ImpactMatrix, SectorWeights};
pub use metrics::SdgMetrics;
pub use outcome::Outcome;
pub use saved_scenario::SavedScenario;
pub use sector::Sector;
pub use simulation_result::SimulationResult;
pub use yearly_progress::YearlyProgress;
