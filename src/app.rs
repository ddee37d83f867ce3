//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error reporting
//! that support the main entry point.

use netcli_server::config::{ConfigError, LogConfig, LogLevel, SourceError};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid flags, unreadable or malformed document.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;
}

/// Returns the `clap` error behind a help or version request, if any.
///
/// Those requests surface as bootstrap errors but should print their output
/// and exit the way `clap` does.
pub fn as_clap_exit(error: &ConfigError) -> Option<&clap::Error> {
    use clap::error::ErrorKind;

    match error {
        ConfigError::Bootstrap(SourceError::Flags(e))
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            Some(e)
        }
        _ => None,
    }
}

/// Prints a configuration error to stderr.
///
/// The message already carries its causes, so the source chain is not walked.
pub fn print_config_error(error: &ConfigError) {
    eprintln!("Configuration error: {error}");
    if matches!(error, ConfigError::Bootstrap(SourceError::Flags(_))) {
        eprintln!("\nRun 'netcli-server --help' for the list of options.");
    }
}

/// Maps the configured log level onto a tracing level.
pub const fn tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error | LogLevel::DPanic | LogLevel::Panic | LogLevel::Fatal => Level::ERROR,
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(logging: LogConfig) {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing_level(logging.level).into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
