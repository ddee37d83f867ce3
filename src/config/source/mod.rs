//! Configuration sources.
//!
//! A [`Source`] is either key-value addressable ([`EnvSource`],
//! [`FlagSource`]) and answers [`Source::get`] per field, or a whole
//! document ([`FileSource`], [`BufferSource`]) that overrides
//! [`Source::decode_into`] and decodes itself in one pass.

mod buffer;
mod env;
mod file;
mod flags;

pub use buffer::BufferSource;
pub use env::EnvSource;
pub use file::FileSource;
pub use flags::FlagSource;

use super::error::SourceError;
use super::fields::{FIELDS, Field};
use super::model::Config;

/// A read-only provider of configuration values.
pub trait Source {
    /// Short label used in errors and logs.
    fn name(&self) -> &'static str;

    /// Returns the raw value for `field`, or `None` if the source lacks it.
    ///
    /// # Errors
    ///
    /// Returns an error only if the source cannot perform lookups at all.
    fn get(&self, field: &Field) -> Result<Option<String>, SourceError>;

    /// Overlays every value this source has onto `target`.
    ///
    /// Fields the source does not supply keep their prior value.
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be read or interpreted.
    fn decode_into(&self, target: &mut Config) -> Result<(), SourceError> {
        for field in FIELDS {
            let Some(raw) = self.get(field)? else {
                continue;
            };
            field
                .apply(target, &raw)
                .map_err(|reason| SourceError::InvalidValue {
                    source_name: self.name(),
                    key: self.key_of(field).to_string(),
                    value: raw,
                    reason,
                })?;
        }
        Ok(())
    }

    /// External key under which this source exposes `field`.
    fn key_of(&self, field: &Field) -> &'static str {
        field.name
    }
}

/// Applies `sources` onto `base` in increasing priority.
///
/// # Errors
///
/// Returns the first source error; no later source is consulted.
pub fn load(base: Config, sources: &[&dyn Source]) -> Result<Config, SourceError> {
    let mut config = base;
    for source in sources {
        tracing::debug!(source = source.name(), "Applying configuration source");
        source.decode_into(&mut config)?;
    }
    Ok(config)
}
