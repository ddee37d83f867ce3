//! Key-value addressable configuration fields.
//!
//! Each [`Field`] ties one [`Config`] member to its external names (flag and
//! environment variable) and to a setter parsing the raw string value. The
//! flag parser and every key-value source are generated from [`FIELDS`].

use std::path::PathBuf;

use super::duration::parse_duration;
use super::model::{Config, LogLevel};

/// How a field's raw value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form text or path
    Text,
    /// Boolean switch; as a flag the value is optional (`--tls`, `--tls=false`)
    Switch,
    /// Human-friendly duration
    Duration,
    /// Log level name
    Level,
}

/// One externally addressable configuration field.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Canonical key and long flag name
    pub name: &'static str,
    /// Short flag alias
    pub short: Option<char>,
    /// Environment variable name
    pub env: &'static str,
    /// Help text for `--help`
    pub help: &'static str,
    /// Value interpretation
    pub kind: FieldKind,
    set: fn(&mut Config, &str) -> Result<(), String>,
}

impl Field {
    /// Parses `raw` and stores it into `target`.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when `raw` is not valid for this field.
    pub fn apply(&self, target: &mut Config, raw: &str) -> Result<(), String> {
        (self.set)(target, raw)
    }
}

/// All key-value addressable fields in flag declaration order.
pub static FIELDS: &[Field] = &[
    Field {
        name: "port",
        short: None,
        env: "PORT",
        help: "Listen address",
        kind: FieldKind::Text,
        set: |c, v| {
            c.listen = v.to_string();
            Ok(())
        },
    },
    Field {
        name: "http_port",
        short: None,
        env: "HTTP_PORT",
        help: "Http listen address",
        kind: FieldKind::Text,
        set: |c, v| {
            c.http_listen = v.to_string();
            Ok(())
        },
    },
    Field {
        name: "dev-login",
        short: None,
        env: "DEV_LOGIN",
        help: "Default device login",
        kind: FieldKind::Text,
        set: |c, v| {
            c.dev_login = v.to_string();
            Ok(())
        },
    },
    Field {
        name: "dev-pass",
        short: None,
        env: "DEV_PASS",
        help: "Default device password",
        kind: FieldKind::Text,
        set: |c, v| {
            c.dev_pass = v.to_string();
            Ok(())
        },
    },
    Field {
        name: "dev-use-agent",
        short: None,
        env: "DEV_USE_AGENT",
        help: "Use SSH agent for device authentication",
        kind: FieldKind::Switch,
        set: |c, v| {
            c.dev_use_agent = parse_bool(v)?;
            Ok(())
        },
    },
    Field {
        name: "conf-file",
        short: None,
        env: "CONF_FILE",
        help: "Path to config file. '-' for stdin",
        kind: FieldKind::Text,
        set: |c, v| {
            c.conf_file = v.to_string();
            Ok(())
        },
    },
    Field {
        name: "dev-conf",
        short: None,
        env: "DEV_CONF",
        help: "Path to yaml with device types",
        kind: FieldKind::Text,
        set: |c, v| {
            c.dev_conf = PathBuf::from(v);
            Ok(())
        },
    },
    Field {
        name: "tls",
        short: None,
        env: "TLS",
        help: "Connection uses TLS if true, else plain TCP",
        kind: FieldKind::Switch,
        set: |c, v| {
            c.tls = parse_bool(v)?;
            Ok(())
        },
    },
    Field {
        name: "cert-file",
        short: None,
        env: "CERT_FILE",
        help: "The TLS cert file",
        kind: FieldKind::Text,
        set: |c, v| {
            c.cert_file = PathBuf::from(v);
            Ok(())
        },
    },
    Field {
        name: "key-file",
        short: None,
        env: "KEY_FILE",
        help: "The TLS key file",
        kind: FieldKind::Text,
        set: |c, v| {
            c.key_file = PathBuf::from(v);
            Ok(())
        },
    },
    Field {
        name: "basic-auth",
        short: None,
        env: "BASIC_AUTH",
        help: "Authenticate client using Basic auth",
        kind: FieldKind::Text,
        set: |c, v| {
            c.basic_auth = v.to_string();
            Ok(())
        },
    },
    Field {
        name: "disable_tcp",
        short: None,
        env: "DISABLE_TCP",
        help: "Disable TCP listener",
        kind: FieldKind::Switch,
        set: |c, v| {
            c.disable_tcp = parse_bool(v)?;
            Ok(())
        },
    },
    Field {
        name: "unix-socket",
        short: None,
        env: "UNIX_SOCKET",
        help: "Unix socket path",
        kind: FieldKind::Text,
        set: |c, v| {
            c.unix_socket = PathBuf::from(v);
            Ok(())
        },
    },
    Field {
        name: "debug",
        short: Some('d'),
        env: "DEBUG",
        help: "Set debug log level",
        kind: FieldKind::Switch,
        set: |c, v| {
            c.debug = parse_bool(v)?;
            Ok(())
        },
    },
    Field {
        name: "default-read-timeout",
        short: None,
        env: "DEFAULT_READ_TIMEOUT",
        help: "Default read timeout",
        kind: FieldKind::Duration,
        set: |c, v| {
            c.default_read_timeout = parse_duration(v)?;
            Ok(())
        },
    },
    Field {
        name: "default-cmd-timeout",
        short: None,
        env: "DEFAULT_CMD_TIMEOUT",
        help: "Default command timeout",
        kind: FieldKind::Duration,
        set: |c, v| {
            c.default_cmd_timeout = parse_duration(v)?;
            Ok(())
        },
    },
    Field {
        name: "log-level",
        short: None,
        env: "LOG_LEVEL",
        help: "Log level (debug, info, warn, error, dpanic, panic, fatal)",
        kind: FieldKind::Level,
        set: |c, v| {
            c.logging.level = v.parse::<LogLevel>()?;
            Ok(())
        },
    },
    Field {
        name: "log-json",
        short: None,
        env: "LOG_JSON",
        help: "Emit logs as JSON",
        kind: FieldKind::Switch,
        set: |c, v| {
            c.logging.json = parse_bool(v)?;
            Ok(())
        },
    },
];

/// Looks up a field by its canonical name.
#[cfg(test)]
#[must_use]
pub fn find(name: &str) -> Option<&'static Field> {
    FIELDS.iter().find(|f| f.name == name)
}

/// Parses boolean spellings: `1`, `t`, `true` and `0`, `f`, `false` in
/// lower, upper or title case.
pub fn parse_bool(value: &str) -> Result<bool, String> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        other => Err(format!("invalid boolean '{other}'")),
    }
}
