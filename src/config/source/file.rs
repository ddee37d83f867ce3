//! Configuration file source.

use std::path::{Path, PathBuf};

use super::Source;
use crate::config::decode::Format;
use crate::config::error::{DecodeError, SourceError};
use crate::config::fields::Field;
use crate::config::model::Config;

/// A configuration document on disk, decoded by its file extension.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source for `path`. The file is not opened until decoding.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the configuration file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn decode_error(&self, source: DecodeError) -> SourceError {
        SourceError::Decode {
            origin: self.path.display().to_string(),
            source,
        }
    }
}

impl Source for FileSource {
    fn name(&self) -> &'static str {
        "file"
    }

    fn get(&self, _field: &Field) -> Result<Option<String>, SourceError> {
        Err(SourceError::NotImplemented {
            source_name: self.name(),
        })
    }

    fn decode_into(&self, target: &mut Config) -> Result<(), SourceError> {
        let format = Format::from_path(&self.path).map_err(|e| self.decode_error(e))?;
        let content = std::fs::read(&self.path).map_err(|e| SourceError::FileRead {
            path: self.path.clone(),
            source: e,
        })?;
        tracing::debug!(path = %self.path.display(), %format, "Decoding configuration file");
        format
            .parse(&content)
            .map_err(|e| self.decode_error(e))?
            .apply_to(target);
        Ok(())
    }
}
