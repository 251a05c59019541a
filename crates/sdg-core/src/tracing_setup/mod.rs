//! Tracing initialization and span definitions.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

/// Environment variable that overrides the configured filter,
/// e.g. `SDG_LOG=sdg_projection=debug`.
pub const LOG_ENV: &str = "SDG_LOG";

static INIT: Once = Once::new();

/// Install the subscriber with default settings (`sdg=info`, plain text).
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Install the subscriber described by `config`.
///
/// The filter applies `config.log_level` to the simulator's crates unless
/// [`LOG_ENV`] is set. Only the first call in a process has any effect.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));
        let layer = fmt::layer().with_target(true);
        let registry = tracing_subscriber::registry().with(filter);

        if config.json_logs {
            registry.with(layer.json()).init();
        } else {
            registry
                .with(layer.with_file(true).with_line_number(true))
                .init();
        }
    });
}

fn default_directive(config: &ObservabilityConfig) -> String {
    format!("sdg={}", config.log_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_scopes_level_to_simulator_crates() {
        let mut config = ObservabilityConfig::default();
        assert_eq!(default_directive(&config), "sdg=info");
        config.log_level = "debug".into();
        assert_eq!(default_directive(&config), "sdg=debug");
    }
}
