//! Tests for configuration resolution.

use std::io::{self, Cursor, Read};

use super::ConfigError;
use super::defaults;
use super::error::{DecodeError, SourceError};
use super::model::{Config, LogLevel};
use super::resolve::{DocumentOrigin, Resolver};
use super::source::{EnvSource, FlagSource};

/// Helper to build a resolver from env pairs, flags and stdin content
fn resolver(env: &[(&str, &str)], args: &[&str], stdin: &str) -> Resolver<Cursor<Vec<u8>>> {
    let mut full_args = vec!["netcli-server"];
    full_args.extend(args);
    Resolver::new(
        EnvSource::from_vars(env.iter().copied()),
        FlagSource::parse_from(full_args).unwrap(),
        Cursor::new(stdin.as_bytes().to_vec()),
    )
}

/// Helper to resolve with empty stdin
fn resolve(env: &[(&str, &str)], args: &[&str]) -> Result<Config, ConfigError> {
    resolver(env, args, "").resolve()
}

/// A reader that always fails
struct BrokenStdin;

impl Read for BrokenStdin {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
    }
}
