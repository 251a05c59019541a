//! # sdg-core
//!
//! Foundation crate for the SDG budget simulator.
//! Defines the sector/outcome identifiers, value types, model configuration,
//! errors, constants, and tracing setup. The projection crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::{ModelConfig, SdgConfig};
pub use errors::{ConfigError, SdgError, SdgResult};
pub use models::{
    ImpactMatrix, Outcome, SavedScenario, SdgMetrics, Sector, SectorAllocation, SectorWeights,
    SimulationResult, YearlyProgress,
};
