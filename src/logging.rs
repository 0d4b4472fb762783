use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

static INIT_TRACING: Once = Once::new();

/// Install the stdout `tracing` subscriber. `RUST_LOG` wins over the configured filter.
pub fn init(settings: &LoggingSettings) {
    INIT_TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&settings.filter))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}
