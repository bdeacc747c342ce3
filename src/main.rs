// formdeck - Dynamic form builder for the terminal
//
// Architecture:
// - Form engine (form): field controllers, coordinator, field list and
//   control panel; no terminal dependencies
// - TUI (ratatui): renders the form, routes keys into the engine and settles
//   deferred field state once per loop turn
// - Config: TOML file + env overrides, including the initial field list
// - Logging: tracing events captured into a buffer shown in the TUI, plus
//   optional JSON log files

mod cli;
mod config;
mod form;
mod logging;
mod theme;
mod tui;

use anyhow::{Context, Result};
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (fields, themes, config ...)
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();
    let log_buffer = LogBuffer::new();

    // The guard must outlive the program so buffered file logs flush
    let _file_guard = init_tracing(&config, &log_buffer);

    let fields = config
        .form_fields()
        .context("Invalid [[fields]] entry in config")?;

    tracing::info!(version = config::VERSION, "formdeck starting");

    tui::run_tui(config, fields, log_buffer).await
}

/// Initialize tracing
///
/// Events go to the TUI log buffer (stdout belongs to the TUI) and, when
/// enabled, to rotating JSON log files.
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(config: &Config, log_buffer: &LogBuffer) -> Option<WorkerGuard> {
    let default_filter = format!("formdeck={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let (file_layer, guard) = match file_writer(config) {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(TuiLogLayer::new(log_buffer.clone()))
        .with(file_layer)
        .init();

    guard
}

/// Non-blocking rolling file writer, if file logging is enabled and possible
fn file_writer(
    config: &Config,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let logging = &config.logging;
    if !logging.file_enabled {
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    let appender = match logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
        }
    };

    Some(tracing_appender::non_blocking(appender))
}
