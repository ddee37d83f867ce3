//! Document decoding by explicit format tag.
//!
//! The format is always chosen by the caller: a file extension or the tag a
//! buffer was created with. Content is never inspected to guess it.

use std::fmt;
use std::path::Path;

use super::document::ConfigDocument;
use super::error::DecodeError;
use super::model::Config;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON
    Json,
    /// YAML, tagged `yaml` or `yml`
    Yaml,
    /// TOML
    Toml,
}

impl Format {
    /// Resolves a format tag.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnsupportedFormat`] naming the tag if it is not
    /// one of `json`, `yaml`, `yml` or `toml`.
    pub fn from_tag(tag: &str) -> Result<Self, DecodeError> {
        match tag {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            other => Err(DecodeError::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }

    /// Resolves the format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnsupportedFormat`] if the extension is missing
    /// or not supported.
    pub fn from_path(path: &Path) -> Result<Self, DecodeError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy())
            .unwrap_or_default();
        Self::from_tag(&ext)
    }

    /// Canonical tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }

    /// Parses `buffer` as a configuration document.
    ///
    /// # Errors
    ///
    /// Returns the parser's error wrapped in the matching [`DecodeError`].
    pub fn parse(self, buffer: &[u8]) -> Result<ConfigDocument, DecodeError> {
        match self {
            Self::Json => serde_json::from_slice(buffer).map_err(DecodeError::Json),
            Self::Yaml => serde_yaml::from_slice(buffer).map_err(DecodeError::Yaml),
            Self::Toml => {
                let text = std::str::from_utf8(buffer).map_err(DecodeError::NotUtf8)?;
                toml::from_str(text).map_err(DecodeError::Toml)
            }
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decodes `buffer` in the format named by `tag` and overlays it onto `target`.
///
/// Keys absent from the document leave `target` untouched. On error `target`
/// is not modified.
///
/// # Errors
///
/// Returns [`DecodeError::UnsupportedFormat`] for an unknown tag, or the
/// parser error for a malformed document.
pub fn decode(buffer: &[u8], tag: &str, target: &mut Config) -> Result<(), DecodeError> {
    let document = Format::from_tag(tag)?.parse(buffer)?;
    document.apply_to(target);
    Ok(())
}
