//! HTTP server exposing POST /pipelines/parse: node/edge counts, DAG check and
//! per-node health for pipelines built in the visual editor.
//!
//! Configure via env: LISTEN or PORT, LOG_FILE, RUST_LOG. Load .env with dotenv.

mod app;
mod config;
mod error;
mod logging;

use std::path::PathBuf;

use tokio::signal;
use tracing::{debug, info};

use crate::config::ServerConfig;

/// Loads the first `.env` found in the working directory or its parent.
/// Returns the file that was applied so it can be logged once tracing is up.
fn load_dotenv() -> Option<PathBuf> {
    if let Ok(path) = dotenv::dotenv() {
        return Some(path);
    }
    let fallback = std::env::current_dir().ok()?.parent()?.join(".env");
    dotenv::from_path(&fallback).ok().map(|()| fallback)
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let dotenv_path = load_dotenv();

    let config = ServerConfig::from_env()?;
    logging::init_tracing(config.log_file.as_deref())?;
    match dotenv_path {
        Some(path) => info!(path = %path.display(), "loaded .env"),
        None => debug!("no .env file found"),
    }

    let app = app::router();

    info!("listening on http://{}", config.listen);
    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
