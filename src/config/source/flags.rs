//! Command-line flag source.
//!
//! The `clap` command is generated from the field table, so every
//! key-value field is also a flag with the same long name.

use std::ffi::OsString;

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};

use super::Source;
use crate::config::error::SourceError;
use crate::config::fields::{FIELDS, Field, FieldKind};

/// Parsed command-line flags.
#[derive(Debug, Clone)]
pub struct FlagSource {
    matches: ArgMatches,
}

impl FlagSource {
    /// Builds the `clap` command for all flag-eligible fields.
    #[must_use]
    pub fn command() -> Command {
        Command::new(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .about(env!("CARGO_PKG_DESCRIPTION"))
            .args_override_self(true)
            .args(FIELDS.iter().map(arg_for))
    }

    /// Parses the process arguments.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Flags`] on invalid arguments and on
    /// `--help`/`--version` requests.
    pub fn from_process() -> Result<Self, SourceError> {
        Self::parse_from(std::env::args_os())
    }

    /// Parses arguments from an iterator; the first item is the program name.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Flags`] on invalid arguments and on
    /// `--help`/`--version` requests.
    pub fn parse_from<I, T>(args: I) -> Result<Self, SourceError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        Ok(Self { matches })
    }
}

fn arg_for(field: &Field) -> Arg {
    let arg = Arg::new(field.name).long(field.name).help(field.help);
    let arg = match field.short {
        Some(short) => arg.short(short),
        None => arg,
    };
    match field.kind {
        // `--tls` alone means true; `--tls=false` turns it off.
        FieldKind::Switch => arg
            .action(ArgAction::Set)
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
            .value_name(value_name(field.kind)),
        FieldKind::Text | FieldKind::Duration | FieldKind::Level => {
            arg.action(ArgAction::Set).value_name(value_name(field.kind))
        }
    }
}

const fn value_name(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Duration => "DURATION",
        FieldKind::Level => "LEVEL",
        FieldKind::Switch => "BOOL",
        FieldKind::Text => "VALUE",
    }
}

impl Source for FlagSource {
    fn name(&self) -> &'static str {
        "flags"
    }

    fn get(&self, field: &Field) -> Result<Option<String>, SourceError> {
        // Only explicitly passed flags count, so an absent switch never
        // shadows lower layers.
        if self.matches.value_source(field.name) != Some(ValueSource::CommandLine) {
            return Ok(None);
        }
        Ok(self.matches.get_one::<String>(field.name).cloned())
    }
}
