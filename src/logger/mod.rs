//! Logger Module
//!
//! A logging system based on `tracing-subscriber` with support for:
//! - Console output with color control
//! - File output with multiple formats (Full, Compact, JSON)
//! - Falling back to stderr when the log file stops accepting writes

pub mod config;
pub mod error;
pub(crate) mod writer;

#[cfg(test)]
mod tests;

pub use config::*;
pub use error::LoggerError;

use std::io::IsTerminal;
use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use writer::LogFileWriter;

/// Initialize the logger with the given configuration
pub fn init_logger(config: LoggerConfig) -> anyhow::Result<()> {
    config.validate()?;

    // Create filter from level string
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    match (config.console.enabled, config.file.enabled) {
        (true, true) => init_both(&config, filter)?,
        (true, false) => init_console_only(&config.console, filter),
        (false, true) => init_file_only(&config.file, filter)?,
        (false, false) => anyhow::bail!("At least one output (console or file) must be enabled"),
    }

    Ok(())
}

fn init_console_only(config: &ConsoleConfig, filter: EnvFilter) {
    let is_tty = std::io::stderr().is_terminal();
    let use_ansi = config.colored && is_tty;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_ansi(use_ansi)
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn init_file_only(config: &FileConfig, filter: EnvFilter) -> anyhow::Result<()> {
    let writer = LogFileWriter::new(config)?;

    match config.format {
        LogFormat::Full => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_target(true)
                        .with_writer(writer),
                )
                .init();
        }
        LogFormat::Compact => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_target(true)
                        .compact()
                        .with_writer(writer),
                )
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).json().with_writer(writer))
                .init();
        }
    }

    Ok(())
}

fn init_both(config: &LoggerConfig, filter: EnvFilter) -> anyhow::Result<()> {
    let use_ansi = config.console.colored && std::io::stderr().is_terminal();
    build_both(config, filter, use_ansi)?.init();
    Ok(())
}

/// Builds the combined file and console subscriber without installing it
pub(crate) fn build_both(
    config: &LoggerConfig,
    filter: EnvFilter,
    use_ansi: bool,
) -> anyhow::Result<Box<dyn Subscriber + Send + Sync>> {
    let writer = LogFileWriter::new(&config.file)?;

    // File layer must be added BEFORE the console layer, otherwise span
    // fields are formatted with the console's ANSI setting and escape codes
    // end up in the file. See: https://github.com/tokio-rs/tracing/issues/1817
    //
    // The console layer is typed by the subscriber it sits on, so each arm
    // builds its own.
    let subscriber: Box<dyn Subscriber + Send + Sync> = match config.file.format {
        LogFormat::Full => {
            let file_layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer);

            Box::new(
                tracing_subscriber::registry()
                    .with(filter)
                    .with(file_layer)
                    .with(
                        fmt::layer()
                            .with_ansi(use_ansi)
                            .with_target(true)
                            .with_level(true)
                            .with_writer(std::io::stderr),
                    ),
            )
        }
        LogFormat::Compact => {
            let file_layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .compact()
                .with_writer(writer);

            Box::new(
                tracing_subscriber::registry()
                    .with(filter)
                    .with(file_layer)
                    .with(
                        fmt::layer()
                            .with_ansi(use_ansi)
                            .with_target(true)
                            .with_level(true)
                            .with_writer(std::io::stderr),
                    ),
            )
        }
        LogFormat::Json => {
            let file_layer = fmt::layer().with_ansi(false).json().with_writer(writer);

            Box::new(
                tracing_subscriber::registry()
                    .with(filter)
                    .with(file_layer)
                    .with(
                        fmt::layer()
                            .with_ansi(use_ansi)
                            .with_target(true)
                            .with_level(true)
                            .with_writer(std::io::stderr),
                    ),
            )
        }
    };

    Ok(subscriber)
}
