//! netcli-server: configuration for the device CLI gateway.
//!
//! A library that resolves the server's configuration from command-line
//! flags, environment variables, and an optional configuration document
//! read from a file or standard input.

pub mod config;
