//! Configuration for the simulator.
//! TOML-based; every section falls back to compiled defaults.

pub mod defaults;
pub mod model_config;
pub mod observability_config;
pub mod recommendation_config;
pub mod sdg_config;
pub mod trajectory_config;

pub use model_config::ModelConfig;
pub use observability_config::ObservabilityConfig;
pub use recommendation_config::RecommendationConfig;
pub use sdg_config::SdgConfig;
pub use trajectory_config::TrajectoryConfig;
