//! Tracing initialization for the binary.

use std::sync::Once;

use threadbot_core::config::ObservabilityConfig;
use threadbot_core::constants::LOG_ENV_VAR;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the global subscriber, writing to stderr.
///
/// The filter comes from `THREADBOT_LOG` (e.g.
/// `THREADBOT_LOG=threadbot_retrieval=debug,info`), falling back to
/// `config.log_level`. Later calls are no-ops.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let json = config.json.then(|| {
            fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::io::stderr)
        });
        let text = (!config.json).then(|| {
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
        });

        tracing_subscriber::registry()
            .with(filter)
            .with(json)
            .with(text)
            .init();
    });
}
