//! Stable machine-readable error codes.
//!
//! The front end keys its user-facing messages on these, so they must not change.

pub const INVALID_BUDGET: &str = "INVALID_BUDGET";
pub const ZERO_SPEND: &str = "ZERO_SPEND";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Implemented by every error type that can cross the library boundary.
pub trait SdgErrorCode {
    fn error_code(&self) -> &'static str;
}
