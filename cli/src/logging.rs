//! File logging for `--debug`.
//!
//! The TUI owns stdout, so records go to a file through a non-blocking
//! writer. Records from the `log` facade are bridged in as well.

use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::SLIDEDECK_LOG_DIR;

pub const LOG_FILE_NAME: &str = "slidedeck.log";

pub fn default_log_dir() -> PathBuf {
    std::env::home_dir()
        .unwrap_or_default()
        .join(SLIDEDECK_LOG_DIR)
}

/// Install the global subscriber. Keep the guard alive until exit so
/// buffered records are flushed.
pub fn init(log_dir: &Path) -> Result<WorkerGuard, String> {
    std::fs::create_dir_all(log_dir)
        .map_err(|e| format!("Failed to create log directory: {}", e))?;
    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "error,{}=debug,slidedeck_tui=debug",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))?;
    Ok(guard)
}
