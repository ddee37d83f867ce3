//! Layered configuration resolution.
//!
//! Resolution runs once at startup:
//!
//! 1. **Bootstrap**: environment, then flags, over [`defaults::bootstrap`].
//! 2. If the bootstrap names no configuration file, it is the result, with
//!    an empty listen address falling back to [`defaults::LISTEN`].
//! 3. **Full load**: environment, then the file (or stdin for `-`), over
//!    [`defaults::full`].
//! 4. **Overlay**: non-empty bootstrap values in [`FLAG_OVERLAY`] win over
//!    the full load.
//! 5. **Debug**: a bootstrap debug switch forces the debug log level.

use std::io::{self, Read};

use tracing::debug;

use super::defaults;
use super::error::ConfigError;
use super::model::{Config, LogLevel};
use super::overlay::{self, FLAG_OVERLAY};
use super::source::{self, BufferSource, EnvSource, FileSource, FlagSource, Source};

/// Where the full configuration document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOrigin {
    /// Standard input, decoded as YAML
    Stdin,
    /// A file, decoded by extension
    File(String),
}

impl DocumentOrigin {
    /// Interprets the bootstrap `conf_file` value; `None` when it is empty.
    #[must_use]
    pub fn from_conf_file(conf_file: &str) -> Option<Self> {
        match conf_file {
            "" => None,
            defaults::STDIN_MARKER => Some(Self::Stdin),
            path => Some(Self::File(path.to_string())),
        }
    }
}

/// Resolves the process configuration from explicit inputs.
///
/// All inputs are owned values, so resolution never reaches for process
/// globals on its own.
#[derive(Debug)]
pub struct Resolver<R> {
    env: EnvSource,
    flags: FlagSource,
    stdin: R,
}

impl Resolver<io::Stdin> {
    /// Builds a resolver over the real process environment, arguments and stdin.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Bootstrap`] if the arguments cannot be parsed.
    pub fn from_process() -> Result<Self, ConfigError> {
        let flags = FlagSource::from_process().map_err(ConfigError::Bootstrap)?;
        Ok(Self::new(EnvSource::from_process(), flags, io::stdin()))
    }
}

impl<R: Read> Resolver<R> {
    /// Creates a resolver; `stdin` is read only if the configuration file is `-`.
    pub const fn new(env: EnvSource, flags: FlagSource, stdin: R) -> Self {
        Self { env, flags, stdin }
    }

    /// Runs resolution to completion.
    ///
    /// # Errors
    ///
    /// Returns the first failure, tagged with the stage it happened in. No
    /// partially resolved configuration is ever returned.
    pub fn resolve(mut self) -> Result<Config, ConfigError> {
        let flag_cfg = self.bootstrap()?;

        let mut config = match DocumentOrigin::from_conf_file(&flag_cfg.conf_file) {
            None => {
                debug!("No configuration file, using flags and environment");
                let mut config = flag_cfg.clone();
                if config.listen.is_empty() {
                    config.listen = defaults::LISTEN.to_string();
                }
                config
            }
            Some(origin) => {
                let mut config = self.full_load(&origin)?;
                overlay::apply(FLAG_OVERLAY, &flag_cfg, &mut config);
                config
            }
        };

        if flag_cfg.debug {
            config.logging.level = LogLevel::MOST_VERBOSE;
        }

        Ok(config)
    }

    fn bootstrap(&self) -> Result<Config, ConfigError> {
        debug!("Loading bootstrap configuration");
        source::load(defaults::bootstrap(), &[&self.env, &self.flags])
            .map_err(ConfigError::Bootstrap)
    }

    fn full_load(&mut self, origin: &DocumentOrigin) -> Result<Config, ConfigError> {
        let document: Box<dyn Source> = match origin {
            DocumentOrigin::Stdin => {
                debug!("Reading configuration from stdin");
                Box::new(BufferSource::new(self.read_stdin()?, defaults::STDIN_FORMAT))
            }
            DocumentOrigin::File(path) => {
                debug!(path = %path, "Reading configuration file");
                Box::new(FileSource::new(path))
            }
        };

        source::load(defaults::full(), &[&self.env, &*document])
            .map_err(ConfigError::full_load)
    }

    fn read_stdin(&mut self) -> Result<Vec<u8>, ConfigError> {
        let mut data = Vec::new();
        self.stdin
            .read_to_end(&mut data)
            .map_err(ConfigError::StdinRead)?;
        Ok(data)
    }
}

/// Resolves the configuration for the current process.
///
/// # Errors
///
/// See [`Resolver::resolve`].
pub fn load() -> Result<Config, ConfigError> {
    Resolver::from_process()?.resolve()
}
