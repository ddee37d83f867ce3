//! Error types for configuration sources and resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Error produced while decoding a whole configuration document.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The format tag names no supported format.
    #[error("failed to decode document: unsupported format \"{format}\"")]
    UnsupportedFormat {
        /// The rejected tag
        format: String,
    },

    /// JSON syntax or type error.
    #[error("failed to decode document: {0}")]
    Json(#[source] serde_json::Error),

    /// YAML syntax or type error.
    #[error("failed to decode document: {0}")]
    Yaml(#[source] serde_yaml::Error),

    /// TOML syntax or type error.
    #[error("failed to decode document: {0}")]
    Toml(#[source] toml::de::Error),

    /// A text format received bytes that are not UTF-8.
    #[error("failed to decode document: {0}")]
    NotUtf8(#[source] std::str::Utf8Error),
}

impl DecodeError {
    /// Returns true if the document itself was malformed, as opposed to
    /// naming an unsupported format.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        !matches!(self, Self::UnsupportedFormat { .. })
    }
}

/// Error reported by a single configuration source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Command-line parsing failed, or help/version output was requested.
    #[error("{0}")]
    Flags(#[from] clap::Error),

    /// A raw value could not be interpreted for its field.
    #[error("invalid value '{value}' for {key} from {source_name}: {reason}")]
    InvalidValue {
        /// Source the value came from
        source_name: &'static str,
        /// External key of the field
        key: String,
        /// The raw value
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// Failed to read the configuration file.
    #[error("failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Key lookup is not available on this source.
    #[error("{source_name}: key lookup not implemented")]
    NotImplemented {
        /// Source that refused the lookup
        source_name: &'static str,
    },

    /// The document could not be decoded.
    #[error("{origin}: {source}")]
    Decode {
        /// Where the document came from
        origin: String,
        /// Underlying decode error
        #[source]
        source: DecodeError,
    },
}

/// Error type for configuration resolution.
///
/// Each variant names the resolution stage that failed. None is recoverable.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Flags or environment could not be loaded.
    #[error("failed to load bootstrap configuration: {0}")]
    Bootstrap(#[source] SourceError),

    /// Standard input could not be read.
    #[error("failed to read configuration from stdin: {0}")]
    StdinRead(#[source] std::io::Error),

    /// The configuration document could not be decoded.
    #[error("failed to decode configuration from {origin}: {source}")]
    Decode {
        /// Where the document came from
        origin: String,
        /// Underlying decode error
        #[source]
        source: DecodeError,
    },

    /// The environment + document load failed for a reason other than decoding.
    #[error("failed to load configuration: {0}")]
    FullLoad(#[source] SourceError),
}

impl ConfigError {
    /// Classifies a failure of the environment + document pass.
    #[must_use]
    pub fn full_load(error: SourceError) -> Self {
        match error {
            SourceError::Decode { origin, source } => Self::Decode { origin, source },
            other => Self::FullLoad(other),
        }
    }

    /// Returns the decode error, if this failure was a decode failure.
    #[must_use]
    pub const fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            Self::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}
