//! Span definitions per operation.

/// Create a projection span.
#[macro_export]
macro_rules! projection_span {
    ($total:expr) => {
        tracing::debug_span!("sdg.projection", total = $total)
    };
}

/// Create a recommendation span.
#[macro_export]
macro_rules! recommendation_span {
    ($limit:expr) => {
        tracing::debug_span!("sdg.recommendation", limit = $limit)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PROJECTION: &str = "sdg.projection";
    pub const RECOMMENDATION: &str = "sdg.recommendation";
}
