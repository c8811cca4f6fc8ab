use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

use crate::settings::LogSettings;

/// Installs a stderr subscriber. `RUST_LOG` wins over the configured level.
pub fn init_logging(settings: &LogSettings) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|err| format!("invalid log level '{}': {err}", settings.level))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = if settings.json {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_writer(io::stderr);
        registry.with(layer).try_init()
    } else {
        let layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);
        registry.with(layer).try_init()
    };
    result.map_err(|err| err.to_string())
}
