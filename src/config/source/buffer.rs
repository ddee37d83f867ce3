//! In-memory document source.

use super::Source;
use crate::config::decode;
use crate::config::error::SourceError;
use crate::config::fields::Field;
use crate::config::model::Config;

/// A configuration document held in memory, such as captured standard input.
///
/// The format is fixed by the tag given at construction.
#[derive(Debug, Clone)]
pub struct BufferSource {
    data: Vec<u8>,
    format: String,
}

impl BufferSource {
    /// Creates a source owning `data`, to be decoded as `format`.
    pub fn new(data: impl Into<Vec<u8>>, format: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            format: format.into(),
        }
    }

    /// Declared format tag.
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }
}

impl Source for BufferSource {
    fn name(&self) -> &'static str {
        "buffer"
    }

    /// Key lookup is not supported on a buffer; it is only ever decoded whole.
    fn get(&self, _field: &Field) -> Result<Option<String>, SourceError> {
        Err(SourceError::NotImplemented {
            source_name: self.name(),
        })
    }

    fn decode_into(&self, target: &mut Config) -> Result<(), SourceError> {
        decode::decode(&self.data, &self.format, target).map_err(|source| SourceError::Decode {
            origin: format!("{} ({})", self.name(), self.format),
            source,
        })
    }
}
