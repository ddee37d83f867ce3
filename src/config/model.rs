//! Resolved configuration types.
//!
//! [`Config`] is the single value handed to listener, auth and logger setup
//! once resolution finishes. Every field is always populated: either by a
//! source or by the defaults in [`super::defaults`].

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)] // mirrors the server's on/off switches
pub struct Config {
    /// Logger settings
    pub logging: LogConfig,

    /// gRPC listen address (`host:port`)
    pub listen: String,

    /// HTTP listen address (`host:port`), empty when disabled
    pub http_listen: String,

    /// Default device login
    pub dev_login: String,

    /// Default device password
    pub dev_pass: String,

    /// Use the SSH agent for device authentication
    pub dev_use_agent: bool,

    /// Device authentication settings (document only)
    pub dev_auth: DeviceAuth,

    /// Configuration file path, `-` for stdin, empty for none
    pub conf_file: String,

    /// Path to the device types definition file
    pub dev_conf: PathBuf,

    /// Serve over TLS instead of plain TCP
    pub tls: bool,

    /// TLS certificate file
    pub cert_file: PathBuf,

    /// TLS private key file
    pub key_file: PathBuf,

    /// Basic auth credentials clients must present
    pub basic_auth: String,

    /// Disable the TCP listener
    pub disable_tcp: bool,

    /// Unix socket path
    pub unix_socket: PathBuf,

    /// Debug switch
    pub debug: bool,

    /// Default read timeout for device sessions
    pub default_read_timeout: Duration,

    /// Default per-command timeout
    pub default_cmd_timeout: Duration,
}

/// Device authentication sub-structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceAuth {
    /// Login used for devices
    pub login: String,

    /// Password used for devices
    pub password: String,

    /// Private key file for key-based authentication
    pub private_key: PathBuf,

    /// Use the SSH agent
    pub use_agent: bool,
}

/// Logger settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Minimum level that is emitted
    pub level: LogLevel,

    /// Structured (JSON) output instead of human-readable lines
    pub json: bool,
}

/// Log verbosity, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum LogLevel {
    /// Debug messages and above
    Debug,
    /// Informational messages and above
    #[default]
    Info,
    /// Warnings and above
    Warn,
    /// Errors and above
    Error,
    /// Development-time panics and above
    DPanic,
    /// Panics and above
    Panic,
    /// Fatal messages only
    Fatal,
}

impl LogLevel {
    /// The most verbose level.
    pub const MOST_VERBOSE: Self = Self::Debug;

    /// Lowercase level name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::DPanic => "dpanic",
            Self::Panic => "panic",
            Self::Fatal => "fatal",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" | "" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "dpanic" => Ok(Self::DPanic),
            "panic" => Ok(Self::Panic),
            "fatal" => Ok(Self::Fatal),
            other => Err(format!("unrecognized level '{other}'")),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, String> {
        value.parse()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ listen: {}, http_listen: {}, unix_socket: {}, tls: {}, disable_tcp: {}, \
             dev_login: {}, dev_pass: {}, dev_use_agent: {}, dev_conf: {}, basic_auth: {}, \
             read_timeout: {}, cmd_timeout: {}, log: {}{} }}",
            or_none(&self.listen),
            or_none(&self.http_listen),
            or_none(&self.unix_socket.display().to_string()),
            self.tls,
            self.disable_tcp,
            or_none(&self.dev_login),
            redact(&self.dev_pass),
            self.dev_use_agent,
            or_none(&self.dev_conf.display().to_string()),
            redact(&self.basic_auth),
            humantime::format_duration(self.default_read_timeout),
            humantime::format_duration(self.default_cmd_timeout),
            self.logging.level,
            if self.logging.json { "/json" } else { "" },
        )
    }
}

fn or_none(value: &str) -> &str {
    if value.is_empty() { "none" } else { value }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "none" } else { "***" }
}
