//! Environment variable source.

use std::collections::HashMap;

use super::Source;
use crate::config::error::SourceError;
use crate::config::fields::Field;

/// A snapshot of environment variables.
///
/// The snapshot is taken once, so resolution never observes later changes
/// to the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    vars: HashMap<String, String>,
}

impl EnvSource {
    /// Captures the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    #[must_use]
    pub fn from_process() -> Self {
        Self::from_vars(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    /// Builds a snapshot from explicit name/value pairs.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Source for EnvSource {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn get(&self, field: &Field) -> Result<Option<String>, SourceError> {
        Ok(self.vars.get(field.env).cloned())
    }

    fn key_of(&self, field: &Field) -> &'static str {
        field.env
    }
}
