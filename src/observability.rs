use crate::configuration::{Configuration, LogFormat};
use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

// No timestamps or colours, CloudWatch adds its own timestamp to each line.
pub fn subscriber(config: &Configuration) -> Result<Box<dyn Subscriber + Send + Sync>> {
    let filter = EnvFilter::try_new(config.log_level.to_lowercase())
        .with_context(|| format!("Invalid log level '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_target(false);

    let subscriber: Box<dyn Subscriber + Send + Sync> = match config.log_format {
        LogFormat::Text => Box::new(builder.finish()),
        LogFormat::Json => Box::new(builder.json().flatten_event(true).finish()),
    };

    Ok(subscriber)
}

/// Installs the process-wide subscriber. Call once, before the runtime starts.
pub fn init_logging(config: &Configuration) -> Result<()> {
    tracing::subscriber::set_global_default(subscriber(config)?)
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
