//! Tracing setup: stdout always, plus a plain-text file when `LOG_FILE` is set.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_FILTER: &str = "info,pipeline_server=debug,pipeline_validator=debug";

/// `RUST_LOG` when set and valid, otherwise [`DEFAULT_FILTER`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber.
pub fn init_tracing(log_file: Option<&str>) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_filter(env_filter());

    let registry = tracing_subscriber::registry().with(stdout_layer);

    if let Some(path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_filter(env_filter());
        registry.with(file_layer).try_init()?;
        tracing::info!(path = %path, "logging to file");
    } else {
        registry.try_init()?;
    }
    Ok(())
}
