//! Top-level simulator configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ModelConfig, ObservabilityConfig, RecommendationConfig, TrajectoryConfig};
use crate::constants::{MAX_HORIZON_YEARS, MAX_START_YEAR, MIN_START_YEAR, OUTCOME_CEILING};
use crate::errors::ConfigError;
use crate::models::{Outcome, SectorAllocation};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Aggregates all sub-configs. Missing sections and keys take compiled defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SdgConfig {
    pub model: ModelConfig,
    pub trajectory: TrajectoryConfig,
    pub recommendations: RecommendationConfig,
    pub observability: ObservabilityConfig,
}

impl SdgConfig {
    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: SdgConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: SdgConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value the projection relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let model = &self.model;

        for outcome in Outcome::ALL {
            let base = model.baseline.get(outcome);
            if !base.is_finite() || !(0.0..=OUTCOME_CEILING).contains(&base) {
                return Err(ConfigError::invalid(
                    format!("model.baseline.{outcome}"),
                    format!("must be between 0 and {OUTCOME_CEILING}"),
                ));
            }
            for (sector, weight) in model.coefficients.row(outcome).iter() {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(ConfigError::invalid(
                        format!("model.coefficients.{outcome}.{sector}"),
                        "must be a finite, non-negative number",
                    ));
                }
            }
        }

        validate_allocation("model.default_allocation", &model.default_allocation)?;
        validate_allocation("model.suggested_allocation", &model.suggested_allocation)?;

        if !(1..=MAX_HORIZON_YEARS).contains(&self.trajectory.horizon_years) {
            return Err(ConfigError::invalid(
                "trajectory.horizon_years",
                format!("must be between 1 and {MAX_HORIZON_YEARS}"),
            ));
        }
        if !(MIN_START_YEAR..=MAX_START_YEAR).contains(&self.trajectory.start_year) {
            return Err(ConfigError::invalid(
                "trajectory.start_year",
                format!("must be between {MIN_START_YEAR} and {MAX_START_YEAR}"),
            ));
        }
        if self.recommendations.max_recommendations == 0 {
            return Err(ConfigError::invalid(
                "recommendations.max_recommendations",
                "must be at least 1",
            ));
        }
        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::invalid(
                "observability.log_level",
                format!("must be one of {}", LOG_LEVELS.join(", ")),
            ));
        }
        Ok(())
    }
}

fn validate_allocation(field: &str, allocation: &SectorAllocation) -> Result<(), ConfigError> {
    if !allocation.is_non_negative() {
        return Err(ConfigError::invalid(field, "shares must be non-negative"));
    }
    if !allocation.is_balanced() {
        return Err(ConfigError::invalid(
            field,
            format!("shares must total 100 (got {:.2})", allocation.total()),
        ));
    }
    Ok(())
}
