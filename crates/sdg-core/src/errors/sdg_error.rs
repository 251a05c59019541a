use super::error_code::{self, SdgErrorCode};
use super::ConfigError;

/// Top-level simulator error.
#[derive(Debug, thiserror::Error)]
pub enum SdgError {
    /// The allocation does not sum to the total budget within tolerance.
    #[error("total allocation must equal {expected}% (got {actual:.2}%)")]
    InvalidBudget { expected: f64, actual: f64 },

    /// Efficiency was requested for an allocation that spends nothing.
    #[error("total spend is zero; efficiency is undefined")]
    ZeroSpend,

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SdgErrorCode for SdgError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidBudget { .. } => error_code::INVALID_BUDGET,
            Self::ZeroSpend => error_code::ZERO_SPEND,
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type SdgResult<T> = Result<T, SdgError>;
