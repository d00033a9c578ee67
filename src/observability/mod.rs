//! Observability.
//!
//! Logging goes to stderr or a log file, never stdout, because stdout carries
//! the conversation. Metrics are recorded through the `metrics` facade; no
//! recorder is installed by this crate.

mod logging;

pub use logging::{LOG_ENV_VAR, LogFormat, LoggingConfig};

use crate::config::LoggingSettings;
use crate::{Error, Result};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initializes logging from settings.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init(settings: &LoggingSettings, verbose: bool) -> Result<()> {
    init_with(LoggingConfig::from_settings(settings, verbose))
}

/// Installs the global subscriber for a resolved configuration.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init_with(config: LoggingConfig) -> Result<()> {
    let format = config.format;
    let (writer, ansi) = match &config.file {
        Some(path) => (BoxMakeWriter::new(Mutex::new(open_log_file(path)?)), false),
        None => (BoxMakeWriter::new(io::stderr), true),
    };

    let installed = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_target(true),
            )
            .with(config.filter)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(writer)
                    .with_ansi(ansi)
                    .with_target(true),
            )
            .with(config.filter)
            .try_init(),
    };
    installed.map_err(|e| Error::OperationFailed {
        operation: "logging_init".to_string(),
        cause: e.to_string(),
    })?;

    tracing::debug!(
        format = format.as_str(),
        file = ?config.file,
        "logging initialized"
    );
    Ok(())
}

/// Opens the log file in append mode, creating missing parent directories.
fn open_log_file(path: &Path) -> Result<File> {
    let failed = |operation: &str, e: &io::Error| Error::OperationFailed {
        operation: operation.to_string(),
        cause: format!("{}: {e}", path.display()),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| failed("create_log_dir", &e))?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| failed("open_log_file", &e))
}
