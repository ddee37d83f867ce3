//! Default values for configuration options.
//!
//! Two starting points exist: the bootstrap defaults used when reading flags
//! and environment alone, and the full defaults a configuration document is
//! layered onto.

use super::model::{Config, LogConfig, LogLevel};

/// Default gRPC listen address for file-sourced configurations.
pub const LISTEN: &str = "127.0.0.1:50051";

/// Default log level.
pub const LOG_LEVEL: LogLevel = LogLevel::Info;

/// Sentinel `conf-file` value selecting standard input.
pub const STDIN_MARKER: &str = "-";

/// Format tag used for documents read from standard input.
pub const STDIN_FORMAT: &str = "yaml";

/// Default logger settings: info level, human-readable output.
#[must_use]
pub const fn logging() -> LogConfig {
    LogConfig {
        level: LOG_LEVEL,
        json: false,
    }
}

/// Starting point for the flags + environment pass.
///
/// Only logging carries a non-zero value, so an empty bootstrap field always
/// means "not supplied".
#[must_use]
pub fn bootstrap() -> Config {
    Config {
        logging: logging(),
        ..Config::default()
    }
}

/// Starting point for the environment + document pass.
#[must_use]
pub fn full() -> Config {
    Config {
        logging: logging(),
        listen: LISTEN.to_string(),
        ..Config::default()
    }
}
