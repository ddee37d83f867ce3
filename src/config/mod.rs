//! Configuration layer for the netcli server.
//!
//! This module provides:
//! - The resolved configuration ([`Config`], [`LogConfig`], [`LogLevel`])
//! - Configuration sources ([`EnvSource`], [`FlagSource`], [`FileSource`], [`BufferSource`])
//! - Document decoding by format tag ([`decode()`], [`Format`])
//! - The resolver ([`Resolver`], [`load`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Without a configuration file, values are resolved with the following
//! priority (highest to lowest):
//!
//! 1. **Command-line flags**
//! 2. **Environment variables**
//! 3. **Built-in defaults**
//!
//! With `--conf-file <path>` (or `-` for stdin), the document replaces flags:
//!
//! 1. **Allow-listed flags** - `dev-login`, `port` and `dev-pass`, when non-empty
//! 2. **Configuration document**
//! 3. **Environment variables**
//! 4. **Built-in defaults**
//!
//! Other flags have no effect once a document is used. They are read only to
//! locate the document.
//!
//! # Debug Switch
//!
//! `--debug` (or `DEBUG=true`) forces the `debug` log level after everything
//! else, on both paths. A `debug` key inside the document does not.
//!
//! # Formats
//!
//! Files are decoded by extension: `.json`, `.yaml`/`.yml` or `.toml`.
//! Standard input is always decoded as YAML.

mod decode;
pub mod defaults;
mod document;
mod duration;
mod error;
mod fields;
mod model;
mod overlay;
mod resolve;
mod source;

#[cfg(test)]
mod resolve_tests;
#[cfg(test)]
mod source_tests;

pub use decode::{Format, decode};
pub use document::ConfigDocument;
pub use error::{ConfigError, DecodeError, SourceError};
pub use fields::{FIELDS, Field, FieldKind};
pub use model::{Config, DeviceAuth, LogConfig, LogLevel};
pub use overlay::{FLAG_OVERLAY, OverlayRule};
pub use resolve::{DocumentOrigin, Resolver, load};
pub use source::{BufferSource, EnvSource, FileSource, FlagSource, Source};
