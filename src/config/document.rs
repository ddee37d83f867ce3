//! Whole-document configuration structure.
//!
//! Defines the shape of a configuration file with serde. Every key is
//! optional so that a document overlays only what it names onto the
//! configuration it is applied to.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use super::duration;
use super::model::{Config, LogLevel};

/// Root structure of a configuration document.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigDocument {
    /// Logger section
    pub logging: LoggingSection,

    /// Listen address
    pub port: Option<String>,

    /// HTTP listen address
    pub http_port: Option<String>,

    /// Default device login
    pub dev_login: Option<String>,

    /// Default device password
    pub dev_pass: Option<String>,

    /// Use the SSH agent for devices
    pub dev_use_agent: Option<bool>,

    /// Device authentication section
    pub dev_auth: DeviceAuthSection,

    /// Path to the device types file
    pub dev_conf: Option<PathBuf>,

    /// Serve over TLS
    pub tls: Option<bool>,

    /// TLS certificate file
    pub cert_file: Option<PathBuf>,

    /// TLS key file
    pub key_file: Option<PathBuf>,

    /// Basic auth credentials
    pub basic_auth: Option<String>,

    /// Disable the TCP listener
    pub disable_tcp: Option<bool>,

    /// Unix socket path
    pub unix_socket: Option<PathBuf>,

    /// Debug switch; does not affect the log level
    pub debug: Option<bool>,

    /// Default read timeout
    #[serde(deserialize_with = "duration::deserialize_opt")]
    pub default_read_timeout: Option<Duration>,

    /// Default command timeout
    #[serde(deserialize_with = "duration::deserialize_opt")]
    pub default_cmd_timeout: Option<Duration>,
}

/// Logger section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level name
    pub level: Option<LogLevel>,

    /// JSON output
    pub json: Option<bool>,
}

/// Device authentication section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeviceAuthSection {
    /// Device login
    pub login: Option<String>,

    /// Device password
    pub password: Option<String>,

    /// Private key file
    pub private_key: Option<PathBuf>,

    /// Use the SSH agent
    pub use_agent: Option<bool>,
}

impl ConfigDocument {
    /// Writes every key present in the document into `target`.
    pub fn apply_to(self, target: &mut Config) {
        set(&mut target.logging.level, self.logging.level);
        set(&mut target.logging.json, self.logging.json);
        set(&mut target.listen, self.port);
        set(&mut target.http_listen, self.http_port);
        set(&mut target.dev_login, self.dev_login);
        set(&mut target.dev_pass, self.dev_pass);
        set(&mut target.dev_use_agent, self.dev_use_agent);
        set(&mut target.dev_auth.login, self.dev_auth.login);
        set(&mut target.dev_auth.password, self.dev_auth.password);
        set(&mut target.dev_auth.private_key, self.dev_auth.private_key);
        set(&mut target.dev_auth.use_agent, self.dev_auth.use_agent);
        set(&mut target.dev_conf, self.dev_conf);
        set(&mut target.tls, self.tls);
        set(&mut target.cert_file, self.cert_file);
        set(&mut target.key_file, self.key_file);
        set(&mut target.basic_auth, self.basic_auth);
        set(&mut target.disable_tcp, self.disable_tcp);
        set(&mut target.unix_socket, self.unix_socket);
        set(&mut target.debug, self.debug);
        set(&mut target.default_read_timeout, self.default_read_timeout);
        set(&mut target.default_cmd_timeout, self.default_cmd_timeout);
    }
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
