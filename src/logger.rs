//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

use crate::config::settings::LoggerSettings;

/// Initializes the global tracing subscriber from logger settings.
///
/// The configured level acts as the default filter; a `RUST_LOG`
/// environment variable takes precedence when set.
pub fn init(settings: &LoggerSettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| anyhow::anyhow!("Invalid log filter: {}", e))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(settings.console.enabled && settings.console.colored);

    if settings.console.enabled {
        builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;
    } else {
        builder
            .with_writer(std::io::sink)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;
    }

    Ok(())
}
