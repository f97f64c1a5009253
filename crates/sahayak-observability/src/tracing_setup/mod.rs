//! Tracing setup: subscriber installation, span definitions, event helpers.

pub mod events;
pub mod spans;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use sahayak_core::config::ObservabilityConfig;

/// Environment variable holding an `EnvFilter` directive string.
pub const ENV_LOG_FILTER: &str = "SAHAYAK_LOG";

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// Respects `SAHAYAK_LOG`; falls back to `config.log_level`. Only the first
/// call in a process has any effect.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(ENV_LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json);
}

/// Install the global subscriber with an explicit filter (tests, embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true);
        // Another subscriber may already be installed by the host; keep it.
        let _ = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}
